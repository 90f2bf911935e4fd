//! PathUp core: pure submission state machine and view-model helpers.
mod effect;
mod input;
mod msg;
mod report;
mod results;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use input::{ResumeFile, SubmissionInput, RESUME_ACCEPT_HINT};
pub use msg::Msg;
pub use report::{
    AnalysisFailure, AnalysisReport, Failure, Recommendation, FALLBACK_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use results::{render_report, GroupKind, ReportView, ResultGroup, ResultItem};
pub use state::{AttemptId, Outcome, SubmissionController, SubmissionState};
pub use update::update;
pub use view_model::AppViewModel;
