//! Core types and traits for the car showroom contract
//!
//! This crate defines the foundational types used throughout the system:
//! - Car: the vehicle record stored under its id
//! - Error / ErrorKind: error hierarchy with stable, matchable labels
//! - Traits: the ledger capability a contract runs against (LedgerStub, StateIterator)
//! - RangeScan: guard that closes a range iterator on every exit path

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod car;
pub mod error;
pub mod traits;

pub use car::Car;
pub use error::{Error, ErrorKind, Result};
pub use traits::{KeyValue, LedgerStub, RangeScan, StateIterator};
