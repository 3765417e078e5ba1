//! Error types for the HSPICE report extractor.
//!
//! This module provides a unified error type [`HspiceError`] that covers
//! all error conditions that can occur while scanning a report, merging
//! its sections, and reading or writing delimited tables.

use thiserror::Error;

/// Result type alias using [`HspiceError`].
pub type Result<T> = std::result::Result<T, HspiceError>;

/// Unified error type for all extractor operations.
#[derive(Error, Debug)]
pub enum HspiceError {
    // ============ Token Decoding ============
    /// A token is not a valid engineering-notation number.
    ///
    /// Raised per token; the scanner recovers by dropping the row.
    #[error("Cannot decode token '{token}' as an engineering-notation value")]
    Decode { token: String },

    // ============ Report Extraction ============
    /// No line in the report matched the header grammar.
    #[error("No data section found in '{path}'")]
    NoHeaderFound { path: String },

    /// A header was found but no valid data rows followed it.
    #[error("No data rows extracted from '{path}'")]
    NoDataExtracted { path: String },

    // ============ Table I/O ============
    /// A serialized table could not be parsed back.
    #[error("Malformed table at line {line}: {message}")]
    MalformedTable { line: usize, message: String },

    /// A table has no columns or no rows where data is required.
    #[error("Table is empty: {message}")]
    EmptyTable { message: String },

    /// No column matched the requested aliases and no positional
    /// fallback was possible.
    #[error("No column matching any of {wanted:?}")]
    ColumnNotFound { wanted: Vec<String> },

    // ============ I/O Errors ============
    /// Error reading a report or table file.
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing an output table.
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a caller-supplied writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HspiceError {
    /// Create a token decode error.
    pub fn decode(token: impl Into<String>) -> Self {
        Self::Decode {
            token: token.into(),
        }
    }

    /// Create a malformed-table error.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            line,
            message: message.into(),
        }
    }

    /// Create an empty-table error.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::EmptyTable {
            message: message.into(),
        }
    }
}
