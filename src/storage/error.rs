//! Error types for the job store layer

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for job store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Job store error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not exist
    #[error("Job store not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Records could not be decoded into jobs
    #[error("Decode error: {message}")]
    Decode {
        path: Option<PathBuf>,
        message: String,
    },

    /// Repopulating the store failed
    #[error("Refresh error: {0}")]
    Refresh(String),
}

impl StorageError {
    /// Create an I/O error bound to a path, promoting missing files to `NotFound`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io {
                path: Some(path),
                source,
            }
        }
    }

    /// Create a decode error
    pub fn decode<E: fmt::Display>(path: Option<PathBuf>, err: E) -> Self {
        Self::Decode {
            path,
            message: err.to_string(),
        }
    }

    /// Create a refresh error
    pub fn refresh<E: fmt::Display>(msg: E) -> Self {
        Self::Refresh(msg.to_string())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(None, err)
    }
}
