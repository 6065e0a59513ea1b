//! Error types for the phonebook service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors raised by the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite rejected a statement or the connection failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking task running a store call panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Business-rule and persistence failures surfaced by the contact service.
#[derive(Error, Debug)]
pub enum PhonebookError {
    /// A contact with the same phone number already exists
    #[error("{0}")]
    Conflict(String),

    /// The referenced contact does not exist
    #[error("contact with id {0} does not exist")]
    NotFound(ContactId),

    /// The request path or body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Underlying persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with PhonebookError
pub type PhonebookResult<T> = Result<T, PhonebookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhonebookError::Conflict("phone number taken".to_string());
        assert_eq!(err.to_string(), "phone number taken");

        let err = PhonebookError::NotFound(ContactId::new(9));
        assert_eq!(err.to_string(), "contact with id 9 does not exist");

        let err = PhonebookError::InvalidRequest("bad id".to_string());
        assert_eq!(err.to_string(), "Invalid request: bad id");

        let err = ConfigError::InvalidValue {
            var: "PHONEBOOK_BIND_ADDR".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PHONEBOOK_BIND_ADDR: Cannot be empty"
        );
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: PhonebookError = StoreError::Other("disk full".to_string()).into();
        assert_eq!(err.to_string(), "Store error: disk full");
        assert!(matches!(err, PhonebookError::Store(_)));
    }

    #[test]
    fn test_sqlite_error_converts() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.to_string().starts_with("SQLite error"));
    }
}
