//! Transaction context for OCC
//!
//! TransactionContext is the per-invocation handle the contract sees as a
//! [`LedgerStub`]. It tracks everything needed to validate the transaction
//! at commit time:
//!
//! - **read_set**: `key -> version` for every point read served from the
//!   snapshot (version 0 when the key was absent)
//! - **range_reads**: the keys and versions every range scan observed
//! - **write_set**: buffered writes, applied only at commit
//!
//! Reads check the write set first (read-your-writes); write-set hits are
//! not recorded in the read set since they are this transaction's own data.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use showroom_core::{Error, KeyValue, LedgerStub, Result, StateIterator};
use uuid::Uuid;

use crate::iterator::{IteratorTracker, RangeIterator};
use crate::store::{is_valid_range, range_bounds, Snapshot};

/// Status of a transaction in its lifecycle
///
/// `Active` -> `Committed` or `Active` -> `Aborted`; both are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Transaction is executing, can read/write
    Active,
    /// Transaction committed successfully
    Committed,
    /// Transaction was aborted
    Aborted {
        /// Human-readable reason for abort
        reason: String,
    },
}

/// What a range scan saw, for phantom detection at commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRead {
    /// Inclusive start ("" = unbounded)
    pub start_key: String,
    /// Exclusive end ("" = unbounded)
    pub end_key: String,
    /// Snapshot keys and versions observed, in key order
    pub observed: Vec<(String, u64)>,
}

/// Per-invocation transaction state
pub struct TransactionContext {
    tx_id: String,
    timestamp: DateTime<Utc>,
    snapshot: Snapshot,
    read_set: HashMap<String, u64>,
    range_reads: Vec<RangeRead>,
    write_set: BTreeMap<String, String>,
    status: TransactionStatus,
    iterators: Arc<IteratorTracker>,
}

impl TransactionContext {
    /// Create a transaction reading from `snapshot`
    pub fn new(snapshot: Snapshot, iterators: Arc<IteratorTracker>) -> Self {
        Self {
            tx_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            snapshot,
            read_set: HashMap::new(),
            range_reads: Vec::new(),
            write_set: BTreeMap::new(),
            status: TransactionStatus::Active,
            iterators,
        }
    }

    /// Snapshot version this transaction reads at
    pub fn start_version(&self) -> u64 {
        self.snapshot.version()
    }

    /// Current status
    pub fn status(&self) -> &TransactionStatus {
        &self.status
    }

    /// True while reads and writes are accepted
    pub fn is_active(&self) -> bool {
        self.status == TransactionStatus::Active
    }

    /// Point reads served from the snapshot
    pub fn read_set(&self) -> &HashMap<String, u64> {
        &self.read_set
    }

    /// Range scans performed
    pub fn range_reads(&self) -> &[RangeRead] {
        &self.range_reads
    }

    /// Buffered writes
    pub fn write_set(&self) -> &BTreeMap<String, String> {
        &self.write_set
    }

    /// True when nothing was written
    pub fn is_read_only(&self) -> bool {
        self.write_set.is_empty()
    }

    /// Fail unless the transaction is active
    pub fn ensure_active(&self) -> Result<()> {
        match &self.status {
            TransactionStatus::Active => Ok(()),
            TransactionStatus::Committed => Err(Error::ledger(format!(
                "transaction {} already committed",
                self.tx_id
            ))),
            TransactionStatus::Aborted { reason } => Err(Error::ledger(format!(
                "transaction {} aborted: {}",
                self.tx_id, reason
            ))),
        }
    }

    /// Move to `Committed`
    pub(crate) fn mark_committed(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.status = TransactionStatus::Committed;
        Ok(())
    }

    /// Move to `Aborted`, discarding buffered writes
    pub fn mark_aborted(&mut self, reason: impl Into<String>) {
        self.write_set.clear();
        self.status = TransactionStatus::Aborted {
            reason: reason.into(),
        };
    }
}

impl LedgerStub for TransactionContext {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn tx_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn get_state(&mut self, key: &str) -> Result<Option<String>> {
        self.ensure_active()?;

        if let Some(value) = self.write_set.get(key) {
            return Ok(Some(value.clone()));
        }

        match self.snapshot.get(key) {
            Some(entry) => {
                self.read_set.insert(key.to_string(), entry.version);
                Ok(Some(entry.value.clone()))
            }
            None => {
                // Absence is a read too: a concurrent create must conflict
                self.read_set.insert(key.to_string(), 0);
                Ok(None)
            }
        }
    }

    fn put_state(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_active()?;
        if key.is_empty() {
            return Err(Error::invalid_argument("ledger key must not be empty"));
        }
        self.write_set.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_state_by_range(
        &mut self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + '_>> {
        self.ensure_active()?;
        if !is_valid_range(start_key, end_key) {
            return Err(Error::invalid_argument(format!(
                "range start '{}' is after range end '{}'",
                start_key, end_key
            )));
        }

        let mut merged: BTreeMap<String, String> = BTreeMap::new();
        let mut observed = Vec::new();
        for (key, entry) in self.snapshot.range(start_key, end_key) {
            observed.push((key.clone(), entry.version));
            merged.insert(key.clone(), entry.value.clone());
        }
        for (key, value) in self.write_set.range::<str, _>(range_bounds(start_key, end_key)) {
            merged.insert(key.clone(), value.clone());
        }

        self.range_reads.push(RangeRead {
            start_key: start_key.to_string(),
            end_key: end_key.to_string(),
            observed,
        });

        let entries = merged.into_iter().map(|(k, v)| KeyValue::new(k, v)).collect();
        Ok(Box::new(RangeIterator::new(
            entries,
            self.iterators.clone(),
            self.tx_id.clone(),
        )))
    }
}
