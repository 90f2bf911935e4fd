use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::ResumeUpload;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to read resume {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("resume path {} has no file name", .0.display())]
    NoFileName(PathBuf),
}

/// MIME type for the multipart part, from the file extension.
///
/// Unknown extensions are sent as `application/octet-stream` rather than
/// rejected; the service decides what it accepts.
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => FALLBACK_MIME,
    }
}

/// Reads a resume from disk into an upload part.
pub fn load_resume(path: &Path) -> Result<ResumeUpload, UploadError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| UploadError::NoFileName(path.to_path_buf()))?
        .to_string();
    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ResumeUpload {
        mime_type: mime_for_file_name(&file_name).to_string(),
        file_name,
        bytes: Bytes::from(bytes),
    })
}
