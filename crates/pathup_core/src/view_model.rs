use crate::{ReportView, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub state: SubmissionState,
    pub resume_name: Option<String>,
    pub job_description_chars: usize,
    pub in_flight: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub error: Option<String>,
    pub report: Option<ReportView>,
    pub dirty: bool,
}
