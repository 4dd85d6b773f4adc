//! Error taxonomy for loading the weather feed

use thiserror::Error;

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Everything that can go wrong between the request and a normalized record set.
///
/// Callers treat every variant the same way: log it, fall back to an empty
/// record set, and surface the message in the status bar.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Request timed out after {after_ms}ms")]
    Timeout { after_ms: u32 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl FetchError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }

    /// Short label for the status bar
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Timeout { .. } => "timeout",
            Self::Decode(_) => "decode",
            Self::MalformedPayload(_) => "payload",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
