use crate::{Effect, Msg, SubmissionController};

/// Pure update function: applies a message to the controller and returns any effects.
pub fn update(mut state: SubmissionController, msg: Msg) -> (SubmissionController, Vec<Effect>) {
    let effects = match msg {
        Msg::ResumeSelected(file) => {
            state.set_resume(file);
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.set_job_description(text);
            Vec::new()
        }
        Msg::SubmitClicked => state.submit().into_iter().collect(),
        Msg::AnalysisFinished { attempt, result } => {
            // A stale completion leaves the current attempt untouched.
            state.complete(attempt, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
