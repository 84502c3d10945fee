//! Transaction registry.
//!
//! An explicit table from transaction name to handler. Hosts address
//! transactions by name, either bare (`createCar`) or qualified with the
//! contract name (`carshowroom:createCar`).

use std::collections::BTreeMap;
use std::fmt;

use showroom_contract::{
    CarShowroomContract, ContractInfo, ContractMetadata, TransactionIntent, TransactionMetadata,
    CONTRACT_NAME,
};
use showroom_core::LedgerStub;

use crate::handlers;
use crate::{Error, Output, Result};

/// Handler signature shared by every transaction
pub type Handler =
    fn(&CarShowroomContract, &mut dyn LedgerStub, &[String]) -> showroom_core::Result<Output>;

/// One registered transaction
#[derive(Clone, Copy)]
pub struct TransactionEntry {
    /// Bare transaction name
    pub name: &'static str,
    /// Submit or evaluate
    pub intent: TransactionIntent,
    /// Parameter names in positional order
    pub params: &'static [&'static str],
    /// Implementation
    pub handler: Handler,
}

impl TransactionEntry {
    /// Reject `args` whose count does not match `params`
    pub fn check_arity(&self, args: &[String]) -> Result<()> {
        if args.len() != self.params.len() {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "{} expects {} argument(s) ({}), got {}",
                    self.name,
                    self.params.len(),
                    self.params.join(", "),
                    args.len()
                ),
            });
        }
        Ok(())
    }

    /// Metadata entry for this transaction
    pub fn metadata(&self) -> TransactionMetadata {
        TransactionMetadata {
            name: self.name.to_string(),
            intent: self.intent,
            parameters: self.params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl fmt::Debug for TransactionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionEntry")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

const CAR_SHOWROOM_TRANSACTIONS: [TransactionEntry; 6] = [
    TransactionEntry {
        name: "initLedger",
        intent: TransactionIntent::Submit,
        params: &[],
        handler: handlers::init_ledger,
    },
    TransactionEntry {
        name: "createCar",
        intent: TransactionIntent::Submit,
        params: &["id", "make", "model", "color", "year", "owner"],
        handler: handlers::create_car,
    },
    TransactionEntry {
        name: "carExists",
        intent: TransactionIntent::Evaluate,
        params: &["id"],
        handler: handlers::car_exists,
    },
    TransactionEntry {
        name: "queryCar",
        intent: TransactionIntent::Evaluate,
        params: &["id"],
        handler: handlers::query_car,
    },
    TransactionEntry {
        name: "transferCarOwnership",
        intent: TransactionIntent::Submit,
        params: &["id", "newOwner"],
        handler: handlers::transfer_car_ownership,
    },
    TransactionEntry {
        name: "queryAllCars",
        intent: TransactionIntent::Evaluate,
        params: &[],
        handler: handlers::query_all_cars,
    },
];

/// Name -> transaction table for one contract
#[derive(Debug, Clone)]
pub struct TransactionRegistry {
    contract_name: String,
    entries: BTreeMap<&'static str, TransactionEntry>,
}

impl TransactionRegistry {
    /// Registry with no transactions
    pub fn empty(contract_name: impl Into<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding every car showroom transaction
    pub fn car_showroom(contract_name: impl Into<String>) -> Self {
        let mut registry = Self::empty(contract_name);
        for entry in CAR_SHOWROOM_TRANSACTIONS {
            registry.register(entry);
        }
        registry
    }

    /// Add or replace an entry
    pub fn register(&mut self, entry: TransactionEntry) {
        self.entries.insert(entry.name, entry);
    }

    /// Name accepted as a qualifying prefix
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// Number of registered transactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name
    pub fn entries(&self) -> impl Iterator<Item = &TransactionEntry> {
        self.entries.values()
    }

    /// Look up `name`, bare or qualified as `<contract>:<name>`
    pub fn resolve(&self, name: &str) -> Result<&TransactionEntry> {
        let bare = match name.split_once(':') {
            Some((prefix, rest)) if prefix == self.contract_name => rest,
            _ => name,
        };
        self.entries
            .get(bare)
            .ok_or_else(|| Error::UnknownTransaction {
                name: name.to_string(),
            })
    }

    /// Contract description with `info` and every registered transaction
    pub fn metadata(&self, mut info: ContractInfo) -> ContractMetadata {
        info.name = self.contract_name.clone();
        ContractMetadata {
            info,
            transactions: self.entries().map(TransactionEntry::metadata).collect(),
        }
    }
}

impl Default for TransactionRegistry {
    fn default() -> Self {
        Self::car_showroom(CONTRACT_NAME)
    }
}
