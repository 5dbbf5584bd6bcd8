use async_trait::async_trait;

use super::errors::EncodeError;
use crate::upload::{DataUrl, UploadCandidate};

#[async_trait]
pub trait FileEncoderPort: Send + Sync {
    /// Reads the whole candidate and encodes it as a data URL.
    async fn encode(&self, candidate: UploadCandidate) -> Result<DataUrl, EncodeError>;
}
