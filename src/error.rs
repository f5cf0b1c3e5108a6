use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by tour sections.
///
/// `InvalidArgument`, `DivideByZero` and `MissingItem` are raised on purpose
/// and recovered inside their own sections. The rest reach the caller.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("{reason} (Parameter '{param}')")]
    InvalidArgument { param: &'static str, reason: String },

    #[error("Attempted to divide by zero.")]
    DivideByZero,

    #[error("Value cannot be absent (Parameter '{param}')")]
    MissingItem { param: &'static str },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write tour output: {0}")]
    Output(#[from] io::Error),

    #[error("Async task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl TourError {
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
