use std::sync::Once;

use pathup_core::{
    update, AnalysisFailure, AnalysisReport, Effect, Msg, Recommendation, ResumeFile,
    SubmissionController, SubmissionInput, SubmissionState, FALLBACK_MESSAGE, VALIDATION_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pathup_logging::initialize_for_tests);
}

fn resume_pdf() -> ResumeFile {
    ResumeFile::new("resume.pdf", "application/pdf", b"%PDF-1.4 fake".to_vec())
}

fn fill_form(
    state: SubmissionController,
    resume: Option<ResumeFile>,
    jd: &str,
) -> SubmissionController {
    let (state, _) = update(state, Msg::ResumeSelected(resume));
    let (state, _) = update(state, Msg::JobDescriptionChanged(jd.to_string()));
    state
}

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        resume_skills: vec!["Python".to_string()],
        jd_skills: vec!["Python".to_string(), "SQL".to_string()],
        missing_skills: vec!["SQL".to_string()],
        recommendations: vec![Recommendation {
            title: "SQL 101".to_string(),
            url: "https://example.com/sql".to_string(),
        }],
    }
}

fn attempt_of(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::Analyze { attempt, .. }] => *attempt,
        other => panic!("expected one Analyze effect, got {other:?}"),
    }
}

#[test]
fn starts_idle_with_submit_enabled() {
    init_logging();
    let view = SubmissionController::new().view();

    assert_eq!(view.state, SubmissionState::Idle);
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, "Analyze");
    assert_eq!(view.error, None);
    assert_eq!(view.report, None);
}

#[test]
fn submit_without_resume_fails_locally() {
    init_logging();
    let state = fill_form(SubmissionController::new(), None, "Need Python and SQL");

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.state(), SubmissionState::Failed);
    assert_eq!(state.failure().unwrap().message, VALIDATION_MESSAGE);
    assert_eq!(state.in_flight_attempt(), None);
}

#[test]
fn submit_with_empty_job_description_fails_locally() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "");

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.state(), SubmissionState::Failed);
    assert_eq!(state.view().error.as_deref(), Some(VALIDATION_MESSAGE));
}

#[test]
fn whitespace_only_job_description_is_accepted() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "   \n");

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(effects.len(), 1);
    assert_eq!(state.state(), SubmissionState::InFlight);
}

#[test]
fn submit_issues_one_request_with_form_snapshot() {
    init_logging();
    let state = fill_form(
        SubmissionController::new(),
        Some(resume_pdf()),
        "Need Python and SQL",
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::Analyze {
            attempt: 1,
            input: SubmissionInput {
                resume: resume_pdf(),
                job_description: "Need Python and SQL".to_string(),
            },
        }]
    );
    let view = state.view();
    assert_eq!(view.state, SubmissionState::InFlight);
    assert!(view.in_flight);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, "Analyzing...");
}

#[test]
fn submit_while_in_flight_issues_nothing() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, first) = update(state, Msg::SubmitClicked);
    assert_eq!(first.len(), 1);

    let (state, second) = update(state, Msg::SubmitClicked);

    assert!(second.is_empty());
    assert_eq!(state.in_flight_attempt(), Some(1));
}

#[test]
fn success_stores_report_and_clears_in_flight() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);
    let attempt = attempt_of(&effects);

    let (mut state, effects) = update(
        state,
        Msg::AnalysisFinished {
            attempt,
            result: Ok(sample_report()),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.state(), SubmissionState::Success);
    assert!(!state.is_in_flight());
    assert_eq!(state.report(), Some(&sample_report()));
    assert_eq!(state.failure(), None);
    assert!(state.view().submit_enabled);
}

#[test]
fn remote_error_message_is_shown_verbatim() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt_of(&effects),
            result: Err(AnalysisFailure::Remote {
                error: "Could not extract text from the resume.".to_string(),
            }),
        },
    );

    assert_eq!(state.state(), SubmissionState::Failed);
    assert_eq!(
        state.failure().unwrap().message,
        "Could not extract text from the resume."
    );
    assert_eq!(state.report(), None);
}

#[test]
fn empty_remote_error_falls_back_to_generic_message() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt_of(&effects),
            result: Err(AnalysisFailure::Remote {
                error: String::new(),
            }),
        },
    );

    assert_eq!(state.failure().unwrap().message, FALLBACK_MESSAGE);
}

#[test]
fn transport_failure_uses_generic_message() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt_of(&effects),
            result: Err(AnalysisFailure::Transport {
                detail: "timeout".to_string(),
            }),
        },
    );

    assert_eq!(state.state(), SubmissionState::Failed);
    assert_eq!(state.view().error.as_deref(), Some(FALLBACK_MESSAGE));
}

#[test]
fn edits_after_success_keep_report_until_next_submit() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt_of(&effects),
            result: Ok(sample_report()),
        },
    );

    let state = fill_form(state, None, "");

    assert_eq!(state.state(), SubmissionState::Success);
    assert_eq!(state.report(), Some(&sample_report()));

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.report(), None);
    assert_eq!(state.failure().unwrap().message, VALIDATION_MESSAGE);
}

#[test]
fn edits_after_failure_keep_failure_until_next_submit() {
    init_logging();
    let state = fill_form(SubmissionController::new(), None, "SQL");
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.state(), SubmissionState::Failed);

    let state = fill_form(state, Some(resume_pdf()), "Need SQL");
    assert_eq!(state.failure().unwrap().message, VALIDATION_MESSAGE);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.failure(), None);
    assert_eq!(state.state(), SubmissionState::InFlight);
}

#[test]
fn resubmit_clears_previous_report() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt_of(&effects),
            result: Ok(sample_report()),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(attempt_of(&effects), 2);
    assert_eq!(state.outcome(), None);
    assert_eq!(state.view().report, None);
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let state = fill_form(SubmissionController::new(), Some(resume_pdf()), "SQL");
    let (state, effects) = update(state, Msg::SubmitClicked);
    let attempt = attempt_of(&effects);

    let (mut state, _) = update(
        state,
        Msg::AnalysisFinished {
            attempt: attempt + 5,
            result: Ok(sample_report()),
        },
    );
    assert_eq!(state.state(), SubmissionState::InFlight);

    assert!(state.complete(attempt, Ok(AnalysisReport::default())));
    assert!(!state.complete(attempt, Ok(sample_report())));
    assert_eq!(state.report(), Some(&AnalysisReport::default()));
}

#[test]
fn unchanged_edit_does_not_mark_dirty() {
    init_logging();
    let mut state = fill_form(SubmissionController::new(), None, "SQL");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::JobDescriptionChanged("SQL".to_string()));

    assert!(!state.consume_dirty());
}
