//! Contract description exposed to hosts
//!
//! Hosts use this to list what can be invoked and whether an invocation
//! should be submitted for commit or only evaluated.

use serde::{Deserialize, Serialize};

/// Name the contract is registered under
pub const CONTRACT_NAME: &str = "carshowroom";

/// Whether a transaction's writes are committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionIntent {
    /// Writes are committed to the ledger
    Submit,
    /// Read-only; any writes are discarded
    Evaluate,
}

impl TransactionIntent {
    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionIntent::Submit => "submit",
            TransactionIntent::Evaluate => "evaluate",
        }
    }
}

/// Maintainer contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// License the contract is published under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,
    /// License text location
    pub url: String,
}

/// Descriptive contract information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Registered name
    pub name: String,
    /// Human title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Contract version
    pub version: String,
    /// Maintainer contact
    pub contact: Contact,
    /// License
    pub license: License,
}

impl ContractInfo {
    /// Information for the car showroom contract
    pub fn carshowroom() -> Self {
        Self {
            name: CONTRACT_NAME.to_string(),
            title: "Car Showroom Contract".to_string(),
            description: "A chaincode contract for managing cars in a showroom".to_string(),
            version: "1.0.0".to_string(),
            contact: Contact {
                name: "Car Showroom".to_string(),
                email: "carshowroom@example.com".to_string(),
            },
            license: License {
                name: "Apache 2.0 License".to_string(),
                url: "http://www.apache.org/licenses/LICENSE-2.0.html".to_string(),
            },
        }
    }
}

/// One invokable transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    /// Invocation name, e.g. `createCar`
    pub name: String,
    /// Submit or evaluate
    pub intent: TransactionIntent,
    /// Parameter names in positional order
    pub parameters: Vec<String>,
}

/// Everything a host needs to describe the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// Descriptive information
    pub info: ContractInfo,
    /// Invokable transactions, sorted by name
    pub transactions: Vec<TransactionMetadata>,
}
