/// Shown when submit is pressed without a resume or with an empty job description.
pub const VALIDATION_MESSAGE: &str = "Please provide both a resume file and a job description.";

/// Shown when the service gave no usable error text.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// Skill-gap report returned by the analysis service.
///
/// `missing_skills` is a subset of `jd_skills`; the service guarantees it and
/// nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisReport {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
}

/// Why a request produced no report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The service answered with a structured `error` string.
    Remote { error: String },
    /// Network failure, timeout, error status without a readable body, or a
    /// malformed response.
    Transport { detail: String },
}

impl AnalysisFailure {
    /// Message presented to the user for this failure.
    pub fn into_failure(self) -> Failure {
        match self {
            AnalysisFailure::Remote { error } if !error.is_empty() => Failure::new(error),
            AnalysisFailure::Remote { .. } | AnalysisFailure::Transport { .. } => {
                Failure::new(FALLBACK_MESSAGE)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn validation() -> Self {
        Self::new(VALIDATION_MESSAGE)
    }
}
