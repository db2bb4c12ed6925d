//! Error types and exit codes for arcadekit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range values)
//! - 3: Data error (missing catalog, unknown entry, malformed catalog)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the arcadekit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing catalog, unknown entry (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arcadekit operations
#[derive(Error, Debug)]
pub enum ArcadeError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("catalog not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("entry not found: {id}")]
    EntryNotFound { id: u64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ArcadeError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArcadeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ArcadeError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArcadeError::UsageError(_) | ArcadeError::InvalidValue { .. } => ExitCode::Usage,

            ArcadeError::CatalogNotFound { .. }
            | ArcadeError::InvalidCatalog { .. }
            | ArcadeError::EntryNotFound { .. } => ExitCode::Data,

            ArcadeError::Io(_)
            | ArcadeError::Json(_)
            | ArcadeError::Toml(_)
            | ArcadeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ArcadeError::UsageError(_) => "usage_error",
            ArcadeError::InvalidValue { .. } => "invalid_value",
            ArcadeError::CatalogNotFound { .. } => "catalog_not_found",
            ArcadeError::InvalidCatalog { .. } => "invalid_catalog",
            ArcadeError::EntryNotFound { .. } => "entry_not_found",
            ArcadeError::Io(_) => "io_error",
            ArcadeError::Json(_) => "json_error",
            ArcadeError::Toml(_) => "toml_error",
            ArcadeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Result type alias for arcadekit operations
pub type Result<T> = std::result::Result<T, ArcadeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ArcadeError::UsageError("test".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ArcadeError::invalid_value("number", -1).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ArcadeError::EntryNotFound { id: 7 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ArcadeError::CatalogNotFound {
                path: PathBuf::from("games.toml")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ArcadeError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ArcadeError::invalid_value("screenshot number", 9);
        assert_eq!(err.to_string(), "invalid screenshot number: 9");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = ArcadeError::EntryNotFound { id: 42 }.to_json();
        assert_eq!(json["code"], 3);
        assert_eq!(json["type"], "entry_not_found");
        assert_eq!(json["message"], "entry not found: 42");
    }
}
