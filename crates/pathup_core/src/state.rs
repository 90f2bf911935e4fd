use crate::view_model::AppViewModel;
use crate::{
    render_report, AnalysisFailure, AnalysisReport, Effect, Failure, ResumeFile, SubmissionInput,
};

pub type AttemptId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    InFlight,
    Success,
    Failed,
}

/// Terminal result of the latest attempt. Holding one value keeps a report and
/// a failure from ever coexisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Report(AnalysisReport),
    Failure(Failure),
}

/// Form state for one session plus the single-flight submission state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    resume: Option<ResumeFile>,
    job_description: String,
    outcome: Option<Outcome>,
    in_flight: Option<AttemptId>,
    next_attempt: AttemptId,
    dirty: bool,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.outcome {
            Some(Outcome::Report(report)) => Some(report),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Some(Outcome::Failure(failure)) => Some(failure),
            _ => None,
        }
    }

    /// Attempt whose request is currently outstanding.
    pub fn in_flight_attempt(&self) -> Option<AttemptId> {
        self.in_flight
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::InFlight
    }

    /// Stores the selected file. Validation waits for `submit`.
    pub fn set_resume(&mut self, file: Option<ResumeFile>) {
        if self.resume != file {
            self.resume = file;
            self.mark_dirty();
        }
    }

    /// Stores the text verbatim, empty or whitespace-only included.
    pub fn set_job_description(&mut self, text: String) {
        if self.job_description != text {
            self.job_description = text;
            self.mark_dirty();
        }
    }

    /// Starts a new attempt.
    ///
    /// Returns the request to issue, or `None` when validation failed or an
    /// attempt is already in flight.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.is_in_flight() {
            return None;
        }

        self.state = SubmissionState::Validating;
        self.mark_dirty();

        let resume = match &self.resume {
            Some(resume) if !self.job_description.is_empty() => resume.clone(),
            _ => {
                self.outcome = Some(Outcome::Failure(Failure::validation()));
                self.state = SubmissionState::Failed;
                return None;
            }
        };

        self.next_attempt += 1;
        let attempt = self.next_attempt;
        self.outcome = None;
        self.in_flight = Some(attempt);
        self.state = SubmissionState::InFlight;

        Some(Effect::Analyze {
            attempt,
            input: SubmissionInput {
                resume,
                job_description: self.job_description.clone(),
            },
        })
    }

    /// Applies the response for `attempt`. Returns false when the completion
    /// does not belong to the outstanding attempt and was ignored.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        result: Result<AnalysisReport, AnalysisFailure>,
    ) -> bool {
        if self.in_flight != Some(attempt) {
            return false;
        }

        self.in_flight = None;
        let (state, outcome) = match result {
            Ok(report) => (SubmissionState::Success, Outcome::Report(report)),
            Err(failure) => (
                SubmissionState::Failed,
                Outcome::Failure(failure.into_failure()),
            ),
        };
        self.outcome = Some(outcome);
        self.state = state;
        self.mark_dirty();
        true
    }

    pub fn view(&self) -> AppViewModel {
        let in_flight = self.is_in_flight();
        AppViewModel {
            state: self.state,
            resume_name: self.resume.as_ref().map(|file| file.file_name.clone()),
            job_description_chars: self.job_description.chars().count(),
            in_flight,
            submit_enabled: !in_flight,
            submit_label: if in_flight { "Analyzing..." } else { "Analyze" },
            error: self.failure().map(|failure| failure.message.clone()),
            report: self.report().map(render_report),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
