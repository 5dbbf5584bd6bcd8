use bytes::Bytes;
use std::path::PathBuf;

use super::MimeType;

/// Where the candidate's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    Memory(Bytes),
    /// Read lazily by the encoder.
    File(PathBuf),
}

/// A transient file awaiting validation and encoding.
///
/// `mime` and `size_bytes` are what the picker declared; validation trusts
/// them and never inspects the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: Option<String>,
    pub mime: MimeType,
    pub size_bytes: u64,
    pub source: UploadSource,
}

impl UploadCandidate {
    pub fn from_bytes(file_name: Option<String>, mime: MimeType, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            file_name,
            mime,
            size_bytes: bytes.len() as u64,
            source: UploadSource::Memory(bytes),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>, mime: MimeType, size_bytes: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Self {
            file_name,
            mime,
            size_bytes,
            source: UploadSource::File(path),
        }
    }
}
