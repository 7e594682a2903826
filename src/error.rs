//! Error types for sidecar client

use thiserror::Error;

/// Sidecar client error
#[derive(Debug, Error)]
pub enum SidecarError {
    /// A byte sequence meant as a 32-byte identifier has the wrong size
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A string failed hex decoding
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// Sidecar answered with a non-success status
    #[error("Sidecar rejected request {status}: {message}")]
    RemoteRejected { status: u16, message: String },

    /// Sidecar answered 200 but the body had the wrong shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transport failure or failed health check
    #[error("Sidecar unreachable: {0}")]
    Unreachable(String),

    /// `configure_default` called on a client holding no configuration
    #[error("No client configuration set")]
    MissingConfiguration,

    /// Local configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SidecarError {
    /// HTTP status carried by a `RemoteRejected` error
    pub fn status(&self) -> Option<u16> {
        match self {
            SidecarError::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, SidecarError::RemoteRejected { .. })
    }
}

impl From<reqwest::Error> for SidecarError {
    fn from(e: reqwest::Error) -> Self {
        SidecarError::Unreachable(e.to_string())
    }
}

/// Result type for sidecar operations
pub type Result<T> = std::result::Result<T, SidecarError>;
