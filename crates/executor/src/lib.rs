//! # Showroom Executor
//!
//! The invocation surface for the car showroom contract.
//!
//! This is the only crate hosts need to import. It provides:
//! - [`Executor`] - name-based and typed dispatch onto a ledger
//! - [`Command`]/[`Output`]/[`Error`] - serializable request, result and failure types
//! - [`TransactionRegistry`] - the explicit name -> handler table
//! - [`ShowroomConfig`] - `showroom.toml` settings
//!
//! ## Quick Start
//!
//! ```text
//! use showroom_executor::{Executor, ShowroomConfig};
//!
//! let executor = Executor::from_config(&ShowroomConfig::default())?;
//! executor.invoke("initLedger", &[])?;
//! let cars = executor.invoke("queryAllCars", &[])?;
//! ```
//!
//! ## Transactions
//!
//! | Name | Intent | Parameters |
//! |------|--------|------------|
//! | `initLedger` | submit | - |
//! | `createCar` | submit | id, make, model, color, year, owner |
//! | `carExists` | evaluate | id |
//! | `queryCar` | evaluate | id |
//! | `transferCarOwnership` | submit | id, newOwner |
//! | `queryAllCars` | evaluate | - |

#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod executor;
mod handlers;
mod output;
mod registry;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::{LedgerSection, ShowroomConfig, CONFIG_FILE_NAME};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use registry::{Handler, TransactionEntry, TransactionRegistry};

// Re-export contract and ledger types so hosts need only this crate
pub use showroom_contract::{
    CarShowroomContract, ContractInfo, ContractMetadata, TransactionIntent, TransactionMetadata,
    CONTRACT_NAME, SAMPLE_CARS,
};
pub use showroom_core::{Car, ErrorKind};
pub use showroom_ledger::{Ledger, LedgerConfig};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
