//! Custom error types for BudgetPulse
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for BudgetPulse operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted or imported payload does not match the expected structure
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A mutation referenced a non-existent entry position.
    ///
    /// This is a programming-contract violation, not a user input problem:
    /// callers are expected to pass indices obtained from the current state.
    #[error("Entry index {index} out of range (have {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl BudgetError {
    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this is an index-out-of-range error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for BudgetPulse operations
pub type BudgetResult<T> = Result<T, BudgetError>;
