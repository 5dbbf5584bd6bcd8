use async_trait::async_trait;
use blog_core::ports::{EncodeError, FileEncoderPort};
use blog_core::upload::{DataUrl, UploadCandidate, UploadSource};
use tracing::debug;

/// Reads upload candidates (memory or disk) and encodes them as data URLs.
///
/// The conversion runs on its own task: dropping the returned future does
/// not abort the read, the result is simply discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlFileEncoder;

impl DataUrlFileEncoder {
    pub fn new() -> Self {
        Self
    }

    async fn read_and_encode(candidate: UploadCandidate) -> Result<DataUrl, EncodeError> {
        let bytes = match candidate.source {
            UploadSource::Memory(bytes) => bytes.to_vec(),
            UploadSource::File(path) => tokio::fs::read(&path).await.map_err(|e| {
                EncodeError::Read(format!("{}: {}", path.display(), e))
            })?,
        };
        debug!(
            file_name = candidate.file_name.as_deref().unwrap_or(""),
            mime = %candidate.mime,
            bytes = bytes.len(),
            "encoded upload candidate"
        );
        Ok(DataUrl::encode(candidate.mime.as_str(), &bytes))
    }
}

#[async_trait]
impl FileEncoderPort for DataUrlFileEncoder {
    async fn encode(&self, candidate: UploadCandidate) -> Result<DataUrl, EncodeError> {
        tokio::spawn(Self::read_and_encode(candidate))
            .await
            .map_err(|e| EncodeError::Read(format!("encoder task failed: {e}")))?
    }
}
