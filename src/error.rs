//! Error types for the salary package engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can surface. The calculator itself never
//! fails; errors come from validation, schedule loading, and the store.

use thiserror::Error;

/// The main error type for the salary package engine.
///
/// Load failures are split by cause so callers can tell a wrong passphrase
/// (`Decryption`) from a damaged document (`Parse`) and from a document whose
/// values are out of range (`Validation`).
///
/// # Example
///
/// ```
/// use salary_package::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "base_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid profile field 'base_salary': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A profile field was outside its allowed domain.
    #[error("Invalid profile field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A package could not be sealed (empty passphrase, cipher setup failure).
    #[error("Encryption failed: {message}")]
    Encryption {
        /// A description of the encryption failure.
        message: String,
    },

    /// A sealed package could not be opened: wrong passphrase or corrupted data.
    #[error("Decryption failed: {message}")]
    Decryption {
        /// A description of the decryption failure.
        message: String,
    },

    /// Package content is not a structurally valid record.
    #[error("Failed to parse package: {message}")]
    Parse {
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A transport could not read or write a package file.
    #[error("Storage error for '{path}': {message}")]
    Storage {
        /// The path that was being accessed.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a validation error on `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn encryption(message: impl Into<String>) -> Self {
        Self::Encryption {
            message: message.into(),
        }
    }

    pub(crate) fn decryption(message: impl Into<String>) -> Self {
        Self::Decryption {
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
