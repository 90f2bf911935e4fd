use std::fmt;

use bytes::Bytes;
use serde::Deserialize;

pub type AttemptId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uploading,
    Receiving,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptProgress {
    pub attempt: AttemptId,
    pub stage: Stage,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(AttemptProgress),
    AnalysisCompleted {
        attempt: AttemptId,
        result: Result<AnalysisPayload, AnalyzeError>,
    },
}

/// Resume file as it goes on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for ResumeUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub resume: ResumeUpload,
    pub job_description: String,
}

/// Success body of the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisPayload {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<RecommendationPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendationPayload {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Error text supplied by the service, if it sent any.
    pub fn service_error(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Service { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    InvalidMimeType { mime_type: String },
    /// The body carried `{"error": ...}`.
    Service { status: u16, error: String },
    /// Error status without a readable `error` field.
    HttpStatus(u16),
    MalformedBody,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::InvalidMimeType { mime_type } => {
                write!(f, "invalid mime type {mime_type}")
            }
            FailureKind::Service { status, .. } => write!(f, "service error (status {status})"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
