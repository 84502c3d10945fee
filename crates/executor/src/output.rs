//! Output enum for command execution results.
//!
//! Every transaction produces exactly one output variant; the mapping is
//! fixed by the registry entry, not by ledger state.

use serde::{Deserialize, Serialize};
use showroom_contract::ContractMetadata;
use showroom_core::Car;

/// Successful command execution results.
///
/// | Transaction | Output |
/// |-------------|--------|
/// | `initLedger` | `Initialized` |
/// | `createCar`, `queryCar`, `transferCarOwnership` | `Car` |
/// | `carExists` | `Bool` |
/// | `queryAllCars` | `Cars` |
/// | metadata | `Metadata` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// A single car
    Car(Car),

    /// Every car, in ledger key order
    Cars(Vec<Car>),

    /// Existence check result
    Bool(bool),

    /// Seed result
    Initialized {
        /// Number of sample cars this call created
        created: usize,
        /// Human readable summary
        message: String,
    },

    /// Contract description
    Metadata(ContractMetadata),
}

impl Output {
    /// Seed result for `created` new cars
    pub fn initialized(created: usize) -> Self {
        Output::Initialized {
            created,
            message: format!("Ledger initialized with {} new sample cars", created),
        }
    }
}
