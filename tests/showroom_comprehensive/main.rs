//! Showroom Comprehensive Test Suite
//!
//! End-to-end coverage of the contract through the executor and directly
//! against the in-memory ledger.
//!
//! ## Areas Covered
//!
//! - `lifecycle`: create / query / transfer / seed scenarios
//! - `registry`: name resolution, argument marshaling, metadata
//! - `concurrency`: conflicting transactions, threads sharing one ledger
//! - `properties`: operation sequences checked against a model
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test showroom_comprehensive
//! cargo test --test showroom_comprehensive concurrency::
//! ```

use std::sync::Arc;

use carshowroom::{Executor, Ledger, Output};

/// Executor over a fresh, empty ledger
pub fn executor() -> Executor {
    Executor::new(Arc::new(Ledger::new()))
}

/// Owned argument list
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Unwrap `Output::Car`
pub fn expect_car(output: Output) -> carshowroom::Car {
    match output {
        Output::Car(car) => car,
        other => panic!("expected Output::Car, got {other:?}"),
    }
}

/// Unwrap `Output::Cars`
pub fn expect_cars(output: Output) -> Vec<carshowroom::Car> {
    match output {
        Output::Cars(cars) => cars,
        other => panic!("expected Output::Cars, got {other:?}"),
    }
}

mod concurrency;
mod lifecycle;
mod properties;
mod registry;
