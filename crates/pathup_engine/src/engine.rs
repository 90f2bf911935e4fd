use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use pathup_logging::{pathup_debug, pathup_info};

use crate::analyze::{Analyzer, ChannelProgressSink, ClientSettings, ReqwestAnalyzer};
use crate::{AnalyzeRequest, AttemptId, AttemptProgress, EngineEvent, Stage};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Analyze {
        attempt: AttemptId,
        request: AnalyzeRequest,
    },
}

/// Runs analysis requests on a background tokio runtime.
///
/// Dropping the handle closes the command channel and stops the worker thread
/// once outstanding requests finish.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        Self::with_analyzer(Arc::new(ReqwestAnalyzer::new(settings)))
    }

    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pathup-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
            pathup_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, attempt: AttemptId, request: AnalyzeRequest) {
        pathup_info!(
            "submit attempt={} resume={} resume_bytes={} jd_chars={}",
            attempt,
            request.resume.file_name,
            request.resume.bytes.len(),
            request.job_description.chars().count()
        );
        let _ = self
            .cmd_tx
            .send(EngineCommand::Analyze { attempt, request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze { attempt, request } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = analyzer.analyze(attempt, &request, &sink).await;
            let _ = event_tx.send(EngineEvent::Progress(AttemptProgress {
                attempt,
                stage: Stage::Done,
                bytes: None,
            }));
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { attempt, result });
        }
    }
}
