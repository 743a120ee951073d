use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, JobscopeError>;

/// The unified error type for Jobscope
#[derive(Error, Debug)]
pub enum JobscopeError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Load error: {message}")]
    Load {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Parse error: {message}")]
    Parse {
        code: u16,
        message: String,
        input: Option<String>,
        format: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Precondition failed: {message} (issue {issue_id})")]
    Precondition {
        code: u16,
        message: String,
        issue_id: String,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl JobscopeError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and field
    pub fn config_with_code(code: u16, message: impl Into<String>, field: Option<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a load error with default code
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            code: ErrorCode::LOAD_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a load error with specific code and path
    pub fn load_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Load {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a date parse error for an input that did not match its format
    pub fn parse(input: impl Into<String>, format: impl Into<String>) -> Self {
        let input = input.into();
        let format = format.into();
        Self::Parse {
            code: ErrorCode::PARSE_DATE_MISMATCH,
            message: format!("'{}' does not match format '{}'", input, format),
            input: Some(input),
            format: Some(format),
            source: None,
        }
    }

    /// Create a parse error with specific code
    pub fn parse_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            input: None,
            format: None,
            source: None,
        }
    }

    /// Create a precondition error tagged with an issue id for traceability
    pub fn precondition(message: impl Into<String>, issue_id: impl Into<String>) -> Self {
        Self::Precondition {
            code: ErrorCode::PRECONDITION_MISSING_VALUE,
            message: message.into(),
            issue_id: issue_id.into(),
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Precondition errors carry no source and are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Load { source: src, .. }
            | Self::Parse { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Precondition { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Load { message, .. }
            | Self::Parse { message, .. }
            | Self::Precondition { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Load { .. } => 4,
            Self::Parse { .. } => 5,
            Self::Precondition { .. } => 8,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Load { code, .. }
            | Self::Parse { code, .. }
            | Self::Precondition { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, field, .. } => match field {
                Some(f) => format!("Configuration problem with '{}': {}", f, message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Load { message, path, .. } => match path {
                Some(p) => format!("Could not load jobs from {}: {}", p.display(), message),
                None => format!("Could not load jobs: {}", message),
            },
            Self::Parse { message, .. } => format!("Bad date: {}", message),
            Self::Precondition {
                message, issue_id, ..
            } => format!("{} (created issue: {})", message, issue_id),
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Whether the caller may skip the failing item and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Issue id attached to a precondition failure, if any
    pub fn issue_id(&self) -> Option<&str> {
        match self {
            Self::Precondition { issue_id, .. } => Some(issue_id),
            _ => None,
        }
    }
}

impl From<crate::storage::StorageError> for JobscopeError {
    fn from(err: crate::storage::StorageError) -> Self {
        use crate::storage::StorageError;

        let (code, path) = match &err {
            StorageError::Io { path, .. } => (ErrorCode::LOAD_IO_ERROR, path.clone()),
            StorageError::NotFound(p) => (ErrorCode::LOAD_NOT_FOUND, Some(p.clone())),
            StorageError::Decode { path, .. } => (ErrorCode::LOAD_DECODE_ERROR, path.clone()),
            StorageError::Refresh(_) => (ErrorCode::LOAD_REFRESH_FAILED, None),
        };

        JobscopeError::load_with_code(code, err.to_string(), path).with_source(err)
    }
}
