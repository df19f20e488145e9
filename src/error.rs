//! Custom error types for finmodel
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every error is fatal for a single run.

use thiserror::Error;

/// The main error type for finmodel operations
#[derive(Error, Debug)]
pub enum FinModelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (output cannot be created or written)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for inputs and arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// A computed row or column falls outside the sheet dimensions
    #[error("{axis} {index} exceeds the sheet limit of {limit}")]
    Range {
        axis: &'static str,
        index: u64,
        limit: u64,
    },

    /// Workbook construction or serialization errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinModelError {
    /// Create a range error for a row index
    pub fn row_out_of_range(index: u64, limit: u64) -> Self {
        Self::Range {
            axis: "Row",
            index,
            limit,
        }
    }

    /// Create a range error for a column index
    pub fn column_out_of_range(index: u64, limit: u64) -> Self {
        Self::Range {
            axis: "Column",
            index,
            limit,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a range error
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinModelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FinModelError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for FinModelError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for FinModelError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finmodel operations
pub type FinModelResult<T> = Result<T, FinModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinModelError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_range_error() {
        let err = FinModelError::column_out_of_range(16_384, 16_384);
        assert_eq!(err.to_string(), "Column 16384 exceeds the sheet limit of 16384");
        assert!(err.is_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: FinModelError = io_err.into();
        assert!(matches!(err, FinModelError::Io(_)));
    }
}
