//! Error handling for localization table operations.
//!
//! Provides explicit error types for parsing, table building, language
//! switching, and lookups. All variants are recoverable by the caller;
//! a failed build or switch never corrupts the previously active table.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Data row {row} is missing the '{column}' column")]
    MissingColumn { row: usize, column: String },

    #[error("'{language}' is not a supported language (supported: {})", .supported.join(", "))]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },

    #[error("Key not found: '{key}'")]
    KeyNotFound { key: String },
}

impl LocalizationError {
    /// Create a malformed-input error
    pub fn malformed_input(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create a missing-column error for a data row
    pub fn missing_column(row: usize, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            row,
            column: column.into(),
        }
    }

    /// Create an unsupported-language error
    pub fn unsupported_language(language: impl Into<String>, supported: &[String]) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
            supported: supported.to_vec(),
        }
    }

    /// Create a key-not-found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }
}

pub type Result<T> = std::result::Result<T, LocalizationError>;
