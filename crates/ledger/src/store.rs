//! LedgerStore: ordered versioned key-value state
//!
//! This module implements the committed world state using:
//! - `BTreeMap<String, VersionedEntry>` for key-ordered storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for monotonically increasing commit versions
//!
//! # Design Notes
//!
//! - **No version history**: each key stores only its latest value
//! - **No deletes**: nothing in the contract removes state
//! - **Cloned snapshots**: `snapshot()` deep-clones the map; O(n) but simple
//! - **Batch apply under one write lock**: no reader sees half a transaction

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Committed value plus the version of the transaction that wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedEntry {
    /// Stored value
    pub value: String,
    /// Commit version that produced this value (always >= 1)
    pub version: u64,
}

/// Convert a host-style `[start, end)` pair into map bounds
///
/// Empty strings mean unbounded.
pub(crate) fn range_bounds<'k>(start_key: &'k str, end_key: &'k str) -> (Bound<&'k str>, Bound<&'k str>) {
    let lower = if start_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start_key)
    };
    let upper = if end_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end_key)
    };
    (lower, upper)
}

/// True when `[start, end)` is a range `BTreeMap::range` accepts
pub(crate) fn is_valid_range(start_key: &str, end_key: &str) -> bool {
    start_key.is_empty() || end_key.is_empty() || start_key <= end_key
}

/// Committed ledger state
#[derive(Debug, Default)]
pub struct LedgerStore {
    data: RwLock<BTreeMap<String, VersionedEntry>>,
    version: AtomicU64,
}

impl LedgerStore {
    /// Create an empty store at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest committed entry for `key`
    pub fn get(&self, key: &str) -> Option<VersionedEntry> {
        self.data.read().get(key).cloned()
    }

    /// Version of `key`, or 0 when absent
    pub fn version_of(&self, key: &str) -> u64 {
        self.data.read().get(key).map(|e| e.version).unwrap_or(0)
    }

    /// Highest commit version assigned so far
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Keys and versions in `[start_key, end_key)`, in key order
    ///
    /// Used at commit time to detect phantoms in recorded range reads.
    pub fn range_versions(&self, start_key: &str, end_key: &str) -> Vec<(String, u64)> {
        if !is_valid_range(start_key, end_key) {
            return Vec::new();
        }
        let data = self.data.read();
        data.range::<str, _>(range_bounds(start_key, end_key))
            .map(|(k, e)| (k.clone(), e.version))
            .collect()
    }

    /// Capture the committed state
    ///
    /// Version is read under the same read lock as the clone so the snapshot
    /// never claims a version whose writes it does not contain.
    pub fn snapshot(&self) -> Snapshot {
        let data = self.data.read();
        let version = self.current_version();
        Snapshot {
            version,
            data: data.clone(),
        }
    }

    /// Apply a transaction's writes atomically under a new commit version
    ///
    /// Returns the version assigned to every write in the batch.
    pub fn apply_batch<'a, I>(&self, writes: I) -> u64
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut data = self.data.write();
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        for (key, value) in writes {
            data.insert(
                key.clone(),
                VersionedEntry {
                    value: value.clone(),
                    version,
                },
            );
        }
        version
    }

    /// Write a single value outside any transaction
    pub fn put_raw(&self, key: &str, value: &str) -> u64 {
        let key = key.to_string();
        let value = value.to_string();
        self.apply_batch([(&key, &value)])
    }
}

/// Immutable view of the store at a commit version
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    data: BTreeMap<String, VersionedEntry>,
}

impl Snapshot {
    /// Version this snapshot was taken at
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Entry for `key` as of this snapshot
    pub fn get(&self, key: &str) -> Option<&VersionedEntry> {
        self.data.get(key)
    }

    /// Entries in `[start_key, end_key)`, in key order
    ///
    /// Callers must check the range with `is_valid_range` first.
    pub fn range<'s>(
        &'s self,
        start_key: &'s str,
        end_key: &'s str,
    ) -> impl Iterator<Item = (&'s String, &'s VersionedEntry)> + 's {
        self.data.range::<str, _>(range_bounds(start_key, end_key))
    }
}
