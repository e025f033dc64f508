//! Typed error handling for the listing engine
//!
//! Most runtime failures in this crate degrade silently (unparseable facet
//! input, unreadable wishlist payloads). The types here cover the remaining
//! caller mistakes that a page has to handle explicitly.
//!
//! # Error Categories
//!
//! - [`RecordError`]: Record Store mutations (duplicate or missing ids)
//! - [`ConfigError`]: Configuration parsing and page wiring
//! - [`ValidationError`]: Form and wizard input validation
//! - [`StorageError`]: Durable storage backends
//!
//! # Example
//!
//! ```rust
//! use reels::core::error::{RecordError, ReelsError};
//!
//! let err: ReelsError = RecordError::NotFound {
//!     record_type: "player".to_string(),
//!     id: "p9".to_string(),
//! }
//! .into();
//!
//! assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
//! ```

use serde::Serialize;
use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T, E = ReelsError> = std::result::Result<T, E>;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum ReelsError {
    /// Record Store errors
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Durable storage errors
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ReelsError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ReelsError::Record(e) => e.error_code(),
            ReelsError::Config(_) => "CONFIG_ERROR",
            ReelsError::Validation(_) => "VALIDATION_ERROR",
            ReelsError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to Record Store mutations
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    /// No record with this id in the store
    #[error("{record_type} with id '{id}' not found")]
    NotFound { record_type: String, id: String },

    /// A record with this id is already loaded
    #[error("{record_type} with id '{id}' already exists")]
    AlreadyExists { record_type: String, id: String },
}

impl RecordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", display_file(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// A sort mode was requested that the page's comparator table lacks
    #[error("Unknown sort mode '{mode}'")]
    UnknownSortMode { mode: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// The wizard was submitted before reaching its final step
    #[error("Wizard is not complete: step '{step}' still pending")]
    Incomplete { step: String },
}

fn display_file(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by durable storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend could not be opened
    #[error("Failed to open storage at '{path}': {message}")]
    Open { path: String, message: String },

    /// Read failed for a key
    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    /// Write failed for a key
    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    /// Payload exceeded the backend's size limit
    #[error("Payload for key '{key}' is too large ({size} bytes, limit {limit})")]
    TooLarge { key: String, size: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_message() {
        let err = RecordError::NotFound {
            record_type: "player".to_string(),
            id: "p1".to_string(),
        };
        assert_eq!(err.to_string(), "player with id 'p1' not found");
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_wrapped_error_codes() {
        let err: ReelsError = ConfigError::UnknownSortMode {
            mode: "height".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.to_string(), "Unknown sort mode 'height'");

        let err: ReelsError = StorageError::Read {
            key: "scout_wishlist".to_string(),
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_field_errors_join() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("name", "is required"),
            FieldValidationError::new("age", "must be at least 15"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation errors: name: is required, age: must be at least 15"
        );
    }

    #[test]
    fn test_parse_error_with_and_without_file() {
        let with_file = ConfigError::ParseError {
            file: Some("reels.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            with_file.to_string(),
            "Failed to parse config file 'reels.yaml': bad indent"
        );

        let without = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(without.to_string(), "Failed to parse config: bad indent");
    }
}
