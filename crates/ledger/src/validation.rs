//! Transaction validation for OCC
//!
//! Rules:
//! - First-committer-wins based on the READ-SET, not the write-set
//! - Blind writes (write without read) do NOT conflict
//! - A range scan conflicts when the set of keys in its range, or any of
//!   their versions, changed since the scan (phantom read)

use crate::store::LedgerStore;
use crate::transaction::TransactionContext;

/// Types of conflicts that can occur during transaction validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictType {
    /// Key was read at one version but the committed version differs
    ReadWriteConflict {
        /// The key that has a conflict
        key: String,
        /// Version recorded in read_set when read (0 = absent)
        read_version: u64,
        /// Committed version at validation time (0 = absent)
        current_version: u64,
    },

    /// A range scan would now return a different key/version set
    PhantomRead {
        /// Inclusive start of the scanned range
        start_key: String,
        /// Exclusive end of the scanned range
        end_key: String,
    },
}

impl std::fmt::Display for ConflictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictType::ReadWriteConflict {
                key,
                read_version,
                current_version,
            } => write!(
                f,
                "key {} read at version {} but is now at version {}",
                key, read_version, current_version
            ),
            ConflictType::PhantomRead { start_key, end_key } => {
                write!(f, "range ['{}', '{}') changed since it was scanned", start_key, end_key)
            }
        }
    }
}

/// Result of transaction validation
///
/// A transaction commits only if `is_valid()` returns true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// All conflicts detected during validation
    pub conflicts: Vec<ConflictType>,
}

impl ValidationResult {
    /// Successful validation (no conflicts)
    pub fn ok() -> Self {
        Self::default()
    }

    /// True if no conflicts were found
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicts
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Append conflicts from another result
    pub fn merge(&mut self, other: ValidationResult) {
        self.conflicts.extend(other.conflicts);
    }

    /// One-line summary for errors and logs
    pub fn summary(&self) -> String {
        match self.conflicts.first() {
            None => "no conflicts".to_string(),
            Some(first) if self.conflicts.len() == 1 => first.to_string(),
            Some(first) => format!("{} (and {} more)", first, self.conflicts.len() - 1),
        }
    }
}

/// Check every point read against the committed versions
pub fn validate_read_set(txn: &TransactionContext, store: &LedgerStore) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for (key, &read_version) in txn.read_set() {
        let current_version = store.version_of(key);
        if current_version != read_version {
            result.conflicts.push(ConflictType::ReadWriteConflict {
                key: key.clone(),
                read_version,
                current_version,
            });
        }
    }
    // HashMap order is arbitrary; keep reports stable
    result.conflicts.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
    result
}

/// Re-run every recorded range scan against the committed state
pub fn validate_range_reads(txn: &TransactionContext, store: &LedgerStore) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for range in txn.range_reads() {
        if store.range_versions(&range.start_key, &range.end_key) != range.observed {
            result.conflicts.push(ConflictType::PhantomRead {
                start_key: range.start_key.clone(),
                end_key: range.end_key.clone(),
            });
        }
    }
    result
}

/// Full validation: point reads, then range reads
pub fn validate_transaction(txn: &TransactionContext, store: &LedgerStore) -> ValidationResult {
    let mut result = validate_read_set(txn, store);
    result.merge(validate_range_reads(txn, store));
    result
}
