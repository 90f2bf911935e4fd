use std::fmt;
use std::sync::Arc;

/// Extensions offered by the file picker. A hint only; nothing here enforces it.
pub const RESUME_ACCEPT_HINT: &str = ".pdf,.png,.jpg,.jpeg";

/// A resume artifact selected by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Resume contents stay out of debug output and logs.
impl fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Snapshot of the form taken when a request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub resume: ResumeFile,
    pub job_description: String,
}
