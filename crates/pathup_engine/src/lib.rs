//! PathUp engine: resume upload, analysis request and response decoding.
mod analyze;
mod decode;
mod engine;
mod types;
mod upload;

pub use analyze::{
    parse_endpoint, Analyzer, ChannelProgressSink, ClientSettings, ProgressSink,
    ReqwestAnalyzer, DEFAULT_ENDPOINT,
};
pub use decode::decode_response;
pub use engine::{EngineError, EngineHandle};
pub use types::{
    AnalysisPayload, AnalyzeError, AnalyzeRequest, AttemptId, AttemptProgress, EngineEvent,
    FailureKind, RecommendationPayload, ResumeUpload, Stage,
};
pub use upload::{load_resume, mime_for_file_name, UploadError};
