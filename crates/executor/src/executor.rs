//! The Executor - single entry point to the showroom contract.
//!
//! The Executor resolves a transaction by name, opens a transaction on the
//! ledger with the entry's intent, runs the handler and commits (submit) or
//! discards (evaluate) the writes.

use std::sync::Arc;

use showroom_contract::{CarShowroomContract, ContractMetadata, TransactionIntent};
use showroom_ledger::Ledger;
use tracing::{debug, info};

use crate::config::ShowroomConfig;
use crate::registry::TransactionRegistry;
use crate::{Command, Error, Output, Result};

/// The command executor.
///
/// All state lives in the ledger; the executor only holds the registry.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Each call
/// runs in its own transaction.
///
/// # Example
///
/// ```ignore
/// use showroom_executor::{Command, Executor};
///
/// let executor = Executor::new(Arc::new(Ledger::new()));
///
/// executor.invoke("initLedger", &[])?;
/// let car = executor.invoke("carshowroom:queryCar", &["CAR001".to_string()])?;
///
/// let results = executor.execute_many(vec![
///     Command::CarExists { id: "CAR001".into() },
///     Command::QueryAllCars,
/// ]);
/// ```
pub struct Executor {
    ledger: Arc<Ledger>,
    contract: CarShowroomContract,
    registry: TransactionRegistry,
}

impl Executor {
    /// Create an executor over `ledger` with the default registry.
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self::with_registry(ledger, TransactionRegistry::default())
    }

    /// Create an executor over `ledger` with a custom registry.
    pub fn with_registry(ledger: Arc<Ledger>, registry: TransactionRegistry) -> Self {
        Self {
            ledger,
            contract: CarShowroomContract::new(),
            registry,
        }
    }

    /// Create a fresh ledger and executor from `config`.
    ///
    /// Seeds the sample cars when `seed_on_open` is set.
    pub fn from_config(config: &ShowroomConfig) -> Result<Self> {
        config.validate()?;
        let ledger = Arc::new(Ledger::with_config(config.ledger_config()));
        let executor = Self::with_registry(
            ledger,
            TransactionRegistry::car_showroom(config.contract_name.clone()),
        );

        if config.seed_on_open {
            if let Output::Initialized { created, .. } = executor.execute(Command::InitLedger)? {
                info!(target: "showroom::executor", created, "Seeded ledger on open");
            }
        }
        Ok(executor)
    }

    /// Underlying ledger.
    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    /// Transaction table.
    pub fn registry(&self) -> &TransactionRegistry {
        &self.registry
    }

    /// Contract description.
    pub fn metadata(&self) -> ContractMetadata {
        self.registry.metadata(self.contract.info())
    }

    /// Invoke a transaction by name with positional string arguments.
    ///
    /// Unknown names and arity mismatches fail before a transaction is
    /// opened.
    pub fn invoke(&self, name: &str, args: &[String]) -> Result<Output> {
        let entry = self.registry.resolve(name)?;
        entry.check_arity(args)?;

        debug!(
            target: "showroom::executor",
            transaction = entry.name,
            intent = entry.intent.as_str(),
            args = args.len(),
            "Dispatching"
        );

        let handler = entry.handler;
        let contract = &self.contract;
        let result = match entry.intent {
            TransactionIntent::Submit => self.ledger.submit(|txn| handler(contract, txn, args)),
            TransactionIntent::Evaluate => self.ledger.evaluate(|txn| handler(contract, txn, args)),
        };
        result.map_err(Error::from)
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Metadata => Ok(Output::Metadata(self.metadata())),
            other => self.invoke(other.name(), &other.args()),
        }
    }

    /// Execute commands in order, one transaction each.
    ///
    /// A failing command does not stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
