//! Range scan cursors and their resource accounting
//!
//! A real ledger holds a server-side cursor per open range query. The
//! in-memory ledger has nothing to leak, so it counts instead: every cursor
//! is registered with an [`IteratorTracker`] when opened and unregistered
//! when closed. A cursor dropped without `close()` is unregistered, logged
//! and counted as leaked, which lets tests assert that callers close on
//! every path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use showroom_core::{Error, KeyValue, Result, StateIterator};
use tracing::warn;

/// Open/leaked cursor counters shared by a ledger and its cursors
#[derive(Debug, Default)]
pub struct IteratorTracker {
    open: AtomicUsize,
    leaked: AtomicUsize,
}

impl IteratorTracker {
    /// Cursors currently open
    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Cursors dropped without being closed
    pub fn leaked_count(&self) -> usize {
        self.leaked.load(Ordering::SeqCst)
    }

    fn opened(&self) {
        self.open.fetch_add(1, Ordering::SeqCst);
    }

    fn released(&self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }

    fn leaked(&self) {
        self.leaked.fetch_add(1, Ordering::SeqCst);
    }
}

/// Cursor over a materialized range scan result
pub struct RangeIterator {
    entries: std::vec::IntoIter<KeyValue>,
    tracker: Arc<IteratorTracker>,
    tx_id: String,
    closed: bool,
}

impl RangeIterator {
    /// Register a new cursor over `entries`
    pub fn new(entries: Vec<KeyValue>, tracker: Arc<IteratorTracker>, tx_id: impl Into<String>) -> Self {
        tracker.opened();
        Self {
            entries: entries.into_iter(),
            tracker,
            tx_id: tx_id.into(),
            closed: false,
        }
    }

    /// Entries not yet yielded
    pub fn remaining(&self) -> usize {
        if self.closed {
            0
        } else {
            self.entries.len()
        }
    }
}

impl Iterator for RangeIterator {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        self.entries.next().map(Ok)
    }
}

impl StateIterator for RangeIterator {
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::ledger(format!(
                "range iterator for transaction {} already closed",
                self.tx_id
            )));
        }
        self.closed = true;
        self.tracker.released();
        Ok(())
    }
}

impl Drop for RangeIterator {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            self.tracker.released();
            self.tracker.leaked();
            warn!(target: "showroom::ledger", tx_id = %self.tx_id, "Range iterator dropped without close");
        }
    }
}
