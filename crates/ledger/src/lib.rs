//! In-memory ledger host
//!
//! This crate plays the host side of the contract boundary:
//! - LedgerStore: ordered versioned key-value state
//! - TransactionContext: per-invocation read/write set tracking, implements `LedgerStub`
//! - Validation: first-committer-wins conflict detection at commit
//! - RangeIterator: range scan cursor with open/close accounting
//! - Ledger: begin / submit / evaluate / commit
//!
//! It is not replicated and not durable. It exists so the contract can be
//! exercised with realistic transaction semantics in tests and in the CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iterator;
pub mod ledger;
pub mod store;
pub mod transaction;
pub mod validation;

pub use iterator::{IteratorTracker, RangeIterator};
pub use ledger::{CommitReceipt, Ledger, LedgerConfig};
pub use store::{LedgerStore, Snapshot, VersionedEntry};
pub use transaction::{RangeRead, TransactionContext, TransactionStatus};
pub use validation::{validate_transaction, ConflictType, ValidationResult};
