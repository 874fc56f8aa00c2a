//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ValidationErrors;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StudioError {
    /// Form input failed schema constraints (field level)
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A generation request is already in flight
    #[error("A request is already in progress")]
    Busy,

    /// QR service call failed before a response was received
    #[error("Request error: {0}")]
    Request(String),

    /// QR service answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// QR service did not answer in time
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// QR service answered with something that is not an image
    #[error("Unexpected content: {0}")]
    UnexpectedContent(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Image download or file save failed
    #[error("Download error: {0}")]
    Download(String),

    /// Configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(String),

    /// Local QR preview could not be rendered
    #[error("Preview error: {0}")]
    Preview(String),
}

impl StudioError {
    /// Whether it is expected behavior (user input, busy guard, ...), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Busy | Self::Preview(_))
    }
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Core layer Result type alias
pub type StudioResult<T> = std::result::Result<T, StudioError>;
