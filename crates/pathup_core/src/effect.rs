use crate::{AttemptId, SubmissionInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single outbound analysis request for this attempt.
    Analyze {
        attempt: AttemptId,
        input: SubmissionInput,
    },
}
