//! Error types for wallet domain operations.
//!
//! This module defines the error types used when loading transaction history,
//! reading or writing the address book, and converting raw history records
//! into domain transactions.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for wallet data operations.
///
/// This enum provides specific error variants for the failure modes
/// encountered when reading and persisting local wallet data.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Filesystem errors while reading or writing wallet data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found in local data.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "contact").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Reasons a raw history record cannot become a [`Transaction`].
///
/// [`Transaction`]: crate::domain::Transaction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The record's `type` tag is not one of CLAIM, SEND or RECEIVE.
    #[error("unsupported transaction type '{kind}' (txid {txid})")]
    UnsupportedType {
        /// The unrecognized tag.
        kind: String,
        /// Transaction id of the offending record.
        txid: String,
    },

    /// A RECEIVE record arrived without a sender address.
    #[error("receive transaction {txid} has no sender")]
    MissingSender {
        /// Transaction id of the offending record.
        txid: String,
    },

    /// The record has no transaction id to link to.
    #[error("{kind} record has no txid")]
    MissingTxid {
        /// The record's `type` tag.
        kind: String,
    },

    /// The element could not be decoded as a history record.
    #[error("record #{index} is malformed: {message}")]
    Malformed {
        /// Position of the element in the export.
        index: usize,
        message: String,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_display() {
        let parse_err = WalletError::parse("unexpected token");
        assert_eq!(parse_err.to_string(), "Parse error: unexpected token");

        let not_found_err = WalletError::not_found("contact", "AK2nJJ");
        assert_eq!(not_found_err.to_string(), "contact 'AK2nJJ' not found");

        let invalid_err = WalletError::invalid_input("empty label");
        assert_eq!(invalid_err.to_string(), "Invalid input: empty label");
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = WalletError::from(json_err);
        assert!(matches!(err, WalletError::Parse { .. }));
    }

    #[test]
    fn test_entry_error_display() {
        let err = EntryError::UnsupportedType {
            kind: "UNKNOWN".to_string(),
            txid: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported transaction type 'UNKNOWN' (txid abc)"
        );

        let err = EntryError::MissingSender {
            txid: "def".to_string(),
        };
        assert_eq!(err.to_string(), "receive transaction def has no sender");

        let err = EntryError::Malformed {
            index: 2,
            message: "missing field `type`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "record #2 is malformed: missing field `type`"
        );
    }
}
