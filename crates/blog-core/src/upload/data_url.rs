use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;
use thiserror::Error;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,

    #[error("data URL has no payload separator")]
    MissingPayload,

    #[error("only base64 data URLs are supported")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

/// A base64 data URL, `data:<mime>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    payload: String,
}

impl DataUrl {
    /// Encodes `bytes`; an empty MIME type is written as
    /// `application/octet-stream`.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let mime = if mime.is_empty() {
            "application/octet-stream"
        } else {
            mime
        };
        Self {
            mime: mime.to_string(),
            payload: BASE64.encode(bytes),
        }
    }

    pub fn parse(s: &str) -> Result<Self, DataUrlError> {
        let rest = s.strip_prefix(SCHEME).ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(DataUrlError::NotBase64)?;
        Ok(Self {
            mime: mime.to_string(),
            payload: payload.to_string(),
        })
    }

    pub fn is_data_url(s: &str) -> bool {
        s.starts_with(SCHEME)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, DataUrlError> {
        BASE64
            .decode(&self.payload)
            .map_err(|e| DataUrlError::InvalidPayload(e.to_string()))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}{BASE64_MARKER},{}", self.mime, self.payload)
    }
}

impl From<DataUrl> for String {
    fn from(url: DataUrl) -> Self {
        url.to_string()
    }
}
