//! Error types for the car showroom contract
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error maps to an [`ErrorKind`] whose [`ErrorKind::as_str`] label is
//! stable across releases, so hosts and clients can match on it without
//! parsing messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for showroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stable discriminant for an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Queried or transferred id has no stored value
    RecordNotFound,
    /// Created id already has a stored value
    RecordAlreadyExists,
    /// A stored value could not be decoded as a car
    CorruptRecord,
    /// A car could not be encoded
    Serialization,
    /// The host aborted the transaction at commit because a read went stale
    MvccReadConflict,
    /// The ledger itself failed
    Ledger,
    /// Malformed invocation arguments
    InvalidArgument,
}

impl ErrorKind {
    /// Stable label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RecordNotFound => "RECORD_NOT_FOUND",
            ErrorKind::RecordAlreadyExists => "RECORD_ALREADY_EXISTS",
            ErrorKind::CorruptRecord => "CORRUPT_RECORD",
            ErrorKind::Serialization => "SERIALIZATION",
            ErrorKind::MvccReadConflict => "MVCC_READ_CONFLICT",
            ErrorKind::Ledger => "LEDGER",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for the car showroom contract and its ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No car stored at this id
    #[error("Car {id} does not exist")]
    NotFound {
        /// Requested car id
        id: String,
    },

    /// A car is already stored at this id
    #[error("Car {id} already exists")]
    AlreadyExists {
        /// Requested car id
        id: String,
    },

    /// Stored value at `key` is not a valid car
    #[error("Corrupt record at key {key}: {reason}")]
    CorruptRecord {
        /// Ledger key holding the bad value
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Transaction lost a read/write race at commit
    #[error("Transaction {tx_id} aborted: {reason}")]
    ReadConflict {
        /// Aborted transaction id
        tx_id: String,
        /// Conflict summary
        reason: String,
    },

    /// Ledger failure (inactive transaction, closed iterator, ...)
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Bad invocation arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Stable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::RecordNotFound,
            Error::AlreadyExists { .. } => ErrorKind::RecordAlreadyExists,
            Error::CorruptRecord { .. } => ErrorKind::CorruptRecord,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::ReadConflict { .. } => ErrorKind::MvccReadConflict,
            Error::Ledger(_) => ErrorKind::Ledger,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for [`Error::NotFound`]
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Shorthand for [`Error::AlreadyExists`]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Error::AlreadyExists { id: id.into() }
    }

    /// Shorthand for [`Error::Ledger`]
    pub fn ledger(message: impl Into<String>) -> Self {
        Error::Ledger(message.into())
    }

    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
