//! Car showroom: a vehicle inventory contract over a transactional ledger
//!
//! Cars are stored under their id as JSON. The contract creates, queries and
//! transfers them through a host-supplied ledger stub; an in-memory ledger
//! stands in for the host in tests and in the CLI.
//!
//! # Quick Start
//!
//! ```ignore
//! use carshowroom::{Executor, ShowroomConfig};
//!
//! let executor = Executor::from_config(&ShowroomConfig::default())?;
//! executor.invoke("initLedger", &[])?;
//! executor.invoke("transferCarOwnership", &["CAR001".into(), "Amy".into()])?;
//! let cars = executor.invoke("queryAllCars", &[])?;
//! ```
//!
//! # Architecture
//!
//! All invocations go through the [`Executor`], which resolves a transaction
//! name in the registry and runs it in one ledger transaction. Lower layers
//! (contract, ledger, core types) are reachable through their own crates.

// Re-export the public API from showroom-executor
pub use showroom_executor::*;
