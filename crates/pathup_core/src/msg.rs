#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a resume file, or cleared the selection.
    ResumeSelected(Option<crate::ResumeFile>),
    /// User edited the job-description text.
    JobDescriptionChanged(String),
    /// User pressed the submit control.
    SubmitClicked,
    /// Engine finished the request issued for `attempt`.
    AnalysisFinished {
        attempt: crate::AttemptId,
        result: Result<crate::AnalysisReport, crate::AnalysisFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
