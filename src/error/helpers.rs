use super::{ErrorCode, JobscopeError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to JobscopeError with context
    fn to_jobscope(self, context: impl Into<String>) -> Result<T, JobscopeError>;

    /// Convert to JobscopeError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, JobscopeError>;
    fn to_load_error(self, message: impl Into<String>) -> Result<T, JobscopeError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_jobscope(self, context: impl Into<String>) -> Result<T, JobscopeError> {
        self.map_err(|e| JobscopeError::other(context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, JobscopeError> {
        self.map_err(|e| JobscopeError::config(message).with_source(e))
    }

    fn to_load_error(self, message: impl Into<String>) -> Result<T, JobscopeError> {
        self.map_err(|e| JobscopeError::load(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> JobscopeError {
        JobscopeError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
            None,
        )
    }

    /// Create an invalid value error for a configuration field
    pub fn config_invalid_value(field: &str, reason: impl Into<String>) -> JobscopeError {
        JobscopeError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            reason,
            Some(field.to_string()),
        )
    }

    /// Create a missing value precondition error
    pub fn missing_value(what: &str, issue_id: impl Into<String>) -> JobscopeError {
        JobscopeError::precondition(format!("{} must not be absent", what), issue_id)
    }
}
