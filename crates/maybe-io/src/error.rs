// crates/maybe-io/src/error.rs
// Error payload carried by every file and HTTP helper Outcome

use std::path::PathBuf;

use maybe_core::Outcome;
use thiserror::Error;

/// Error type for the maybe-io helpers
#[derive(Error, Debug)]
pub enum MaybeError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP {method} request failed with status code {status}")]
    Status { method: &'static str, status: u16 },

    #[error("HTTP {method} request to {url} timed out")]
    Timeout { method: &'static str, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown error: {0}")]
    Other(String),
}

/// What every helper returns
pub type IoOutcome<T> = Outcome<T, MaybeError>;

/// Convenience type alias for code that wants `?`
pub type Result<T> = std::result::Result<T, MaybeError>;

impl MaybeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaybeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Numeric status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            MaybeError::Status { status, .. } => Some(*status),
            MaybeError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<String> for MaybeError {
    fn from(s: String) -> Self {
        MaybeError::Other(s)
    }
}

impl From<MaybeError> for String {
    fn from(err: MaybeError) -> Self {
        err.to_string()
    }
}
