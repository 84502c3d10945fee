//! Error types for command execution.
//!
//! Errors are serializable so a host can relay them to clients as-is. Contract
//! and ledger failures keep their stable kind label; the executor adds the two
//! failures that happen before a transaction is opened.

use serde::{Deserialize, Serialize};
use showroom_core::ErrorKind;

/// Command execution errors.
///
/// | Variant | Label | Raised |
/// |---------|-------|--------|
/// | `UnknownTransaction` | `UNKNOWN_TRANSACTION` | name not registered |
/// | `InvalidArgument` | `INVALID_ARGUMENT` | wrong arity, unparsable year, bad config |
/// | `Io` | `IO` | config file could not be read or written |
/// | `Chaincode` | the contract/ledger kind | inside the transaction |
///
/// # Example
///
/// ```ignore
/// match executor.invoke("queryCar", &["CAR999".into()]) {
///     Err(Error::Chaincode { kind: ErrorKind::RecordNotFound, message }) => {
///         println!("{message}");
///     }
///     other => { /* ... */ }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// No transaction registered under this name
    #[error("unknown transaction: {name}")]
    UnknownTransaction { name: String },

    /// Arguments rejected before any ledger access
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Filesystem failure
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Failure raised by the contract or the ledger
    #[error("{message}")]
    Chaincode { kind: ErrorKind, message: String },
}

impl Error {
    /// Stable label, e.g. `RECORD_NOT_FOUND`
    pub fn label(&self) -> &'static str {
        match self {
            Error::UnknownTransaction { .. } => "UNKNOWN_TRANSACTION",
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument.as_str(),
            Error::Io { .. } => "IO",
            Error::Chaincode { kind, .. } => kind.as_str(),
        }
    }

    /// Contract kind, if this failure came from inside a transaction
    pub fn chaincode_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Chaincode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<showroom_core::Error> for Error {
    fn from(e: showroom_core::Error) -> Self {
        match e {
            showroom_core::Error::InvalidArgument(reason) => Error::InvalidArgument { reason },
            other => Error::Chaincode {
                kind: other.kind(),
                message: other.to_string(),
            },
        }
    }
}
