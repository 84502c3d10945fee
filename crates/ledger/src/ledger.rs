//! Ledger: transaction lifecycle over the in-memory store
//!
//! ## Commit Sequence
//!
//! ```text
//! 1. acquire commit lock
//! 2. read-only? -> mark committed, no new version
//! 3. validate read set and range reads (if enabled)
//! 4. IF conflicts: abort, return MVCC_READ_CONFLICT
//! 5. apply write set under one new commit version
//! 6. mark committed, return receipt
//! ```
//!
//! The commit lock serializes steps 3-5, so two transactions that read the
//! same version of a key cannot both commit a write based on it.

use std::sync::Arc;

use parking_lot::Mutex;
use showroom_core::{Error, LedgerStub, Result};
use tracing::{debug, warn};

use crate::iterator::IteratorTracker;
use crate::store::LedgerStore;
use crate::transaction::TransactionContext;
use crate::validation::validate_transaction;

/// Ledger behavior knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Validate read sets and range reads at commit
    ///
    /// When false, the last committer wins.
    pub validate_reads: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            validate_reads: true,
        }
    }
}

/// Outcome of a successful commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Committed transaction id
    pub tx_id: String,
    /// Commit version assigned to the writes; the current version for read-only commits
    pub version: u64,
    /// Number of keys written
    pub writes: usize,
}

/// In-memory transactional ledger
///
/// `Send + Sync`; share it behind an `Arc` to run transactions from
/// several threads.
#[derive(Debug, Default)]
pub struct Ledger {
    store: LedgerStore,
    config: LedgerConfig,
    commit_lock: Mutex<()>,
    iterators: Arc<IteratorTracker>,
}

impl Ledger {
    /// Create an empty ledger with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with `config`
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Committed state
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Range iterators currently open
    pub fn open_iterators(&self) -> usize {
        self.iterators.open_count()
    }

    /// Range iterators dropped without close
    pub fn leaked_iterators(&self) -> usize {
        self.iterators.leaked_count()
    }

    /// Committed value at `key`, read outside any transaction
    pub fn get_committed(&self, key: &str) -> Option<String> {
        self.store.get(key).map(|e| e.value)
    }

    /// Write `value` at `key` outside any transaction
    ///
    /// For fixtures: bypasses validation, returns the commit version.
    pub fn write_raw(&self, key: &str, value: &str) -> u64 {
        self.store.put_raw(key, value)
    }

    /// Start a transaction against the current committed state
    pub fn begin(&self) -> TransactionContext {
        TransactionContext::new(self.store.snapshot(), self.iterators.clone())
    }

    /// Validate and apply `txn`
    pub fn commit(&self, mut txn: TransactionContext) -> Result<CommitReceipt> {
        txn.ensure_active()?;
        let _guard = self.commit_lock.lock();

        if txn.is_read_only() {
            txn.mark_committed()?;
            return Ok(CommitReceipt {
                tx_id: txn.tx_id().to_string(),
                version: self.store.current_version(),
                writes: 0,
            });
        }

        if self.config.validate_reads {
            let validation = validate_transaction(&txn, &self.store);
            if !validation.is_valid() {
                let reason = validation.summary();
                warn!(
                    target: "showroom::ledger",
                    tx_id = txn.tx_id(),
                    conflicts = validation.conflict_count(),
                    reason = %reason,
                    "Transaction aborted at commit"
                );
                txn.mark_aborted(reason.clone());
                return Err(Error::ReadConflict {
                    tx_id: txn.tx_id().to_string(),
                    reason,
                });
            }
        }

        let writes = txn.write_set().len();
        let version = self.store.apply_batch(txn.write_set());
        txn.mark_committed()?;
        debug!(target: "showroom::ledger", tx_id = txn.tx_id(), version, writes, "Transaction committed");

        Ok(CommitReceipt {
            tx_id: txn.tx_id().to_string(),
            version,
            writes,
        })
    }

    /// Run `f` in a fresh transaction and commit its writes on success
    ///
    /// An error from `f` discards the write set and is returned unchanged.
    pub fn submit<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TransactionContext) -> Result<T>,
    {
        let mut txn = self.begin();
        match f(&mut txn) {
            Ok(value) => {
                self.commit(txn)?;
                Ok(value)
            }
            Err(e) => {
                txn.mark_aborted(e.to_string());
                Err(e)
            }
        }
    }

    /// Run `f` in a fresh transaction and discard its writes
    pub fn evaluate<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TransactionContext) -> Result<T>,
    {
        let mut txn = self.begin();
        let result = f(&mut txn);
        txn.mark_aborted("evaluate");
        result
    }
}
