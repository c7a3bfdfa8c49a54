//! Error types
//!
//! `AppError` covers the few fallible operations (opening storage, loading
//! settings). Per-line bulk parsing failures are values, not errors that
//! propagate: see `BulkLineError`.

use serde::Serialize;
use thiserror::Error;

use crate::core::i18n::{self, Language};

/// Application errors
///
/// Serializable so a front end can show them without string matching.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// File system error (settings file, data directory)
    #[error("I/O error: {0}")]
    Io(String),

    /// Embedded database error
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Settings could not be resolved
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<redb::Error> for AppError {
    fn from(err: redb::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<redb::DatabaseError> for AppError {
    fn from(err: redb::DatabaseError) -> Self {
        AppError::Storage(format!("Failed to open database: {}", err))
    }
}

impl From<redb::TransactionError> for AppError {
    fn from(err: redb::TransactionError) -> Self {
        AppError::Storage(format!("Failed to begin transaction: {}", err))
    }
}

impl From<redb::TableError> for AppError {
    fn from(err: redb::TableError) -> Self {
        AppError::Storage(format!("Failed to open table: {}", err))
    }
}

impl From<redb::StorageError> for AppError {
    fn from(err: redb::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<redb::CommitError> for AppError {
    fn from(err: redb::CommitError) -> Self {
        AppError::Storage(format!("Failed to commit: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// A bulk input line that could not be converted.
///
/// `Display` is the fixed English category text; use [`BulkLineError::localized`]
/// for user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BulkLineError {
    #[error("Malformed line: \"{line}\"")]
    MalformedLine { line: String },

    #[error("Invalid value: \"{line}\"")]
    InvalidValue { line: String },

    #[error("Unknown unit: \"{unit}\" (line: \"{line}\")")]
    UnknownUnit { unit: String, line: String },
}

impl BulkLineError {
    /// Message in the given UI language
    pub fn localized(&self, language: Language) -> String {
        match self {
            BulkLineError::MalformedLine { line } => {
                i18n::lookup_with("bulk.errors.malformedLine", language, &[("line", line.as_str())])
            }
            BulkLineError::InvalidValue { line } => {
                i18n::lookup_with("bulk.errors.invalidValue", language, &[("line", line.as_str())])
            }
            BulkLineError::UnknownUnit { unit, line } => i18n::lookup_with(
                "bulk.errors.unknownUnit",
                language,
                &[("unit", unit.as_str()), ("line", line.as_str())],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_serializes_with_tag() {
        let err = AppError::Storage("disk full".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Storage");
        assert_eq!(json["message"], "disk full");
    }

    #[test]
    fn test_bulk_error_display_is_english() {
        let err = BulkLineError::UnknownUnit {
            unit: "acres".to_string(),
            line: "5 acres".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown unit: \"acres\" (line: \"5 acres\")");
    }

    #[test]
    fn test_unit_text_with_placeholder_is_not_expanded() {
        let err = BulkLineError::UnknownUnit {
            unit: "{line}".to_string(),
            line: "5 {line}".to_string(),
        };
        assert_eq!(
            err.localized(Language::En),
            "Unknown unit: \"{line}\" (line: \"5 {line}\")"
        );
    }

    #[test]
    fn test_bulk_error_localized() {
        let err = BulkLineError::MalformedLine { line: "foo".to_string() };
        let en = err.localized(Language::En);
        let hi = err.localized(Language::Hi);
        assert!(en.contains("\"foo\""));
        assert!(en.starts_with("Invalid format"));
        assert!(hi.contains("\"foo\""));
        assert_ne!(en, hi);
    }
}
