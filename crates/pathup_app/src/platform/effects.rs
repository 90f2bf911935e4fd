use std::time::Duration;

use pathup_core::{
    AnalysisFailure, AnalysisReport, Effect, Msg, Recommendation, ResumeFile, SubmissionInput,
};
use pathup_engine::{
    AnalysisPayload, AnalyzeError, AnalyzeRequest, ClientSettings, EngineError, EngineEvent,
    EngineHandle, ResumeUpload,
};
use pathup_logging::{pathup_debug, pathup_info, pathup_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        pathup_info!("analysis endpoint {}", settings.endpoint);
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze { attempt, input } => {
                    self.engine.submit(attempt, to_request(input));
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event that matters to the core.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        match self.engine.recv_timeout(timeout)? {
            EngineEvent::Progress(progress) => {
                pathup_debug!(
                    "attempt {} stage {:?} bytes {:?}",
                    progress.attempt,
                    progress.stage,
                    progress.bytes
                );
                None
            }
            EngineEvent::AnalysisCompleted { attempt, result } => {
                let result = match result {
                    Ok(payload) => {
                        pathup_info!(
                            "attempt {} succeeded: {} resume skills, {} missing",
                            attempt,
                            payload.resume_skills.len(),
                            payload.missing_skills.len()
                        );
                        Ok(map_payload(payload))
                    }
                    Err(err) => {
                        pathup_warn!("attempt {} failed: {}", attempt, err);
                        Err(map_failure(err))
                    }
                };
                Some(Msg::AnalysisFinished { attempt, result })
            }
        }
    }
}

pub fn resume_file_from_upload(upload: ResumeUpload) -> ResumeFile {
    ResumeFile::new(upload.file_name, upload.mime_type, upload.bytes.to_vec())
}

fn to_request(input: SubmissionInput) -> AnalyzeRequest {
    let resume = input.resume;
    AnalyzeRequest {
        resume: ResumeUpload::new(resume.file_name, resume.mime_type, resume.bytes.to_vec()),
        job_description: input.job_description,
    }
}

fn map_payload(payload: AnalysisPayload) -> AnalysisReport {
    AnalysisReport {
        resume_skills: payload.resume_skills,
        jd_skills: payload.jd_skills,
        missing_skills: payload.missing_skills,
        recommendations: payload
            .recommendations
            .into_iter()
            .map(|rec| Recommendation {
                title: rec.title,
                url: rec.url,
            })
            .collect(),
    }
}

fn map_failure(err: AnalyzeError) -> AnalysisFailure {
    match err.service_error() {
        Some(error) => AnalysisFailure::Remote {
            error: error.to_string(),
        },
        None => AnalysisFailure::Transport {
            detail: err.to_string(),
        },
    }
}
