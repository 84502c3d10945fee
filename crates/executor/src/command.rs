//! Command enum defining every showroom transaction.
//!
//! Commands are the typed counterpart of the string-based invocation surface:
//! each variant names one registered transaction and carries its arguments.
//! The executor lowers a command to `(name, args)` and dispatches it through
//! the same registry as [`Executor::invoke`](crate::Executor::invoke), so the
//! two surfaces cannot drift apart.

use serde::{Deserialize, Serialize};

/// A self-contained, serializable contract invocation.
///
/// # Example
///
/// ```ignore
/// use showroom_executor::{Command, Executor};
///
/// let output = executor.execute(Command::TransferCarOwnership {
///     id: "CAR001".into(),
///     new_owner: "Amy".into(),
/// })?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Create the sample cars that are missing.
    /// Returns: `Output::Initialized`
    InitLedger,

    /// Create a car.
    /// Returns: `Output::Car`
    CreateCar {
        id: String,
        make: String,
        model: String,
        color: String,
        year: i32,
        owner: String,
    },

    /// Check whether a car exists.
    /// Returns: `Output::Bool`
    CarExists { id: String },

    /// Fetch a car.
    /// Returns: `Output::Car`
    QueryCar { id: String },

    /// Replace a car's owner.
    /// Returns: `Output::Car`
    TransferCarOwnership { id: String, new_owner: String },

    /// List every car.
    /// Returns: `Output::Cars`
    QueryAllCars,

    /// Describe the contract. Does not touch the ledger.
    /// Returns: `Output::Metadata`
    Metadata,
}

impl Command {
    /// Registered transaction name this command dispatches to.
    ///
    /// `Metadata` is answered by the executor itself and has no registry
    /// entry.
    pub fn name(&self) -> &'static str {
        match self {
            Command::InitLedger => "initLedger",
            Command::CreateCar { .. } => "createCar",
            Command::CarExists { .. } => "carExists",
            Command::QueryCar { .. } => "queryCar",
            Command::TransferCarOwnership { .. } => "transferCarOwnership",
            Command::QueryAllCars => "queryAllCars",
            Command::Metadata => "metadata",
        }
    }

    /// Positional string arguments, in registry parameter order.
    pub fn args(&self) -> Vec<String> {
        match self {
            Command::CreateCar {
                id,
                make,
                model,
                color,
                year,
                owner,
            } => vec![
                id.clone(),
                make.clone(),
                model.clone(),
                color.clone(),
                year.to_string(),
                owner.clone(),
            ],
            Command::CarExists { id } | Command::QueryCar { id } => vec![id.clone()],
            Command::TransferCarOwnership { id, new_owner } => vec![id.clone(), new_owner.clone()],
            Command::InitLedger | Command::QueryAllCars | Command::Metadata => Vec::new(),
        }
    }

    /// Returns `true` if this command's transaction commits writes.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::InitLedger | Command::CreateCar { .. } | Command::TransferCarOwnership { .. }
        )
    }
}
