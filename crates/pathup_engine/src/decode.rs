use serde::Deserialize;

use crate::{AnalysisPayload, AnalyzeError, FailureKind};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Interpret a finished response.
///
/// Order: report body on 2xx -> `{"error": string}` on any status -> malformed
/// body on 2xx, bare status code otherwise.
pub fn decode_response(status: u16, body: &[u8]) -> Result<AnalysisPayload, AnalyzeError> {
    let success = (200..300).contains(&status);

    let mut parse_error = None;
    if success {
        match serde_json::from_slice::<AnalysisPayload>(body) {
            Ok(payload) => return Ok(payload),
            Err(err) => parse_error = Some(err.to_string()),
        }
    }

    if let Ok(ErrorBody { error }) = serde_json::from_slice::<ErrorBody>(body) {
        return Err(AnalyzeError::new(
            FailureKind::Service {
                status,
                error: error.clone(),
            },
            error,
        ));
    }

    if let Some(detail) = parse_error {
        return Err(AnalyzeError::new(FailureKind::MalformedBody, detail));
    }

    Err(AnalyzeError::new(
        FailureKind::HttpStatus(status),
        format!("status {status} without error body"),
    ))
}
