//! Car showroom contract
//!
//! The contract is stateless: every operation takes the host's
//! [`LedgerStub`](showroom_core::LedgerStub) for the current transaction and
//! keeps nothing once it returns.
//!
//! | Operation | Intent | Fails with |
//! |-----------|--------|------------|
//! | `init_ledger` | submit | - |
//! | `create_car` | submit | `RECORD_ALREADY_EXISTS` |
//! | `car_exists` | evaluate | - |
//! | `query_car` | evaluate | `RECORD_NOT_FOUND` |
//! | `transfer_car_ownership` | submit | `RECORD_NOT_FOUND` |
//! | `query_all_cars` | evaluate | - |
//!
//! Any operation also fails with `CORRUPT_RECORD` if it has to decode a
//! stored value that is not a car.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod metadata;
pub mod samples;

pub use contract::CarShowroomContract;
pub use metadata::{
    Contact, ContractInfo, ContractMetadata, License, TransactionIntent, TransactionMetadata,
    CONTRACT_NAME,
};
pub use samples::{SampleCar, SAMPLE_CARS};
