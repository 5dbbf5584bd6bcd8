use thiserror::Error;

use super::UploadCandidate;

pub const IMAGE_TYPE_PREFIX: &str = "image/";
pub const MAX_FILE_SIZE_MB: u64 = 5;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Reasons an upload candidate is rejected. The display text is what the
/// user sees in the alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a valid image file")]
    InvalidType,

    #[error("File size must be less than {max_mb}MB")]
    TooLarge { max_mb: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_file_size_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl UploadLimits {
    /// Limits from a configured byte count; `0` means "not configured".
    pub fn from_configured(max_file_size_bytes: u64) -> Self {
        if max_file_size_bytes == 0 {
            Self::default()
        } else {
            Self {
                max_file_size_bytes,
            }
        }
    }

    /// Limit in whole MB, rounded up so a sub-MB limit never reads as `0`.
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size_bytes.div_ceil(BYTES_PER_MB)
    }

    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadError> {
        validate_upload(candidate.mime.as_str(), candidate.size_bytes, self)
    }
}

/// Checks the declared type first, then the size.
pub fn validate_upload(mime: &str, size_bytes: u64, limits: &UploadLimits) -> Result<(), UploadError> {
    if !mime.starts_with(IMAGE_TYPE_PREFIX) {
        return Err(UploadError::InvalidType);
    }

    if size_bytes > limits.max_file_size_bytes {
        return Err(UploadError::TooLarge {
            max_mb: limits.max_file_size_mb(),
        });
    }

    Ok(())
}
