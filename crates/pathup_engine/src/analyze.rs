use std::time::Duration;

use futures_util::StreamExt;
use pathup_logging::{pathup_debug, pathup_warn};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::decode::decode_response;
use crate::{
    AnalysisPayload, AnalyzeError, AnalyzeRequest, AttemptId, AttemptProgress, EngineEvent,
    FailureKind, Stage,
};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Whole round trip, upload through last body byte.
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_response_bytes: 1024 * 1024,
        }
    }
}

/// Accepts absolute http and https URLs only.
pub fn parse_endpoint(raw: &str) -> Result<Url, AnalyzeError> {
    let url = Url::parse(raw)
        .map_err(|err| AnalyzeError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AnalyzeError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {other}"),
        )),
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        attempt: AttemptId,
        request: &AnalyzeRequest,
        sink: &dyn ProgressSink,
    ) -> Result<AnalysisPayload, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: ClientSettings,
}

impl ReqwestAnalyzer {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))
    }

    fn build_form(&self, request: &AnalyzeRequest) -> Result<Form, AnalyzeError> {
        let resume = &request.resume;
        let part = Part::bytes(resume.bytes.to_vec())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.mime_type)
            .map_err(|err| {
                AnalyzeError::new(
                    FailureKind::InvalidMimeType {
                        mime_type: resume.mime_type.clone(),
                    },
                    err.to_string(),
                )
            })?;

        Ok(Form::new()
            .part("resume", part)
            .text("jd", request.job_description.clone()))
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze(
        &self,
        attempt: AttemptId,
        request: &AnalyzeRequest,
        sink: &dyn ProgressSink,
    ) -> Result<AnalysisPayload, AnalyzeError> {
        let endpoint = parse_endpoint(&self.settings.endpoint)?;
        let client = self.build_client()?;
        let form = self.build_form(request)?;

        sink.emit(EngineEvent::Progress(AttemptProgress {
            attempt,
            stage: Stage::Uploading,
            bytes: Some(request.resume.bytes.len() as u64),
        }));

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        pathup_debug!("attempt {} answered with status {}", attempt, status);

        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
            sink.emit(EngineEvent::Progress(AttemptProgress {
                attempt,
                stage: Stage::Receiving,
                bytes: Some(body.len() as u64),
            }));
        }

        let result = decode_response(status.as_u16(), &body);
        if let Err(err) = &result {
            pathup_warn!("attempt {} failed: {}", attempt, err);
        }
        result
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}
