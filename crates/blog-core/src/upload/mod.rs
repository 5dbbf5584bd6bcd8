//! Upload candidates, their validation, and the data-URL representation
//! they are turned into.

mod candidate;
mod data_url;
mod mime;
mod validation;

pub use candidate::{UploadCandidate, UploadSource};
pub use data_url::{DataUrl, DataUrlError};
pub use mime::MimeType;
pub use validation::{
    validate_upload, UploadError, UploadLimits, IMAGE_TYPE_PREFIX, MAX_FILE_SIZE_BYTES,
    MAX_FILE_SIZE_MB,
};
