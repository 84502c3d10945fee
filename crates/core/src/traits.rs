//! Core traits for ledger access
//!
//! This module defines the capability a contract runs against. The host
//! hands the contract one `LedgerStub` per invocation; the contract never
//! holds on to it, or to any state read through it, past that invocation.
//!
//! Swapping implementations (the in-memory ledger used by tests and the CLI,
//! or a real replicated ledger) does not touch contract code.

use chrono::{DateTime, Utc};

use crate::error::Result;

/// A single entry yielded by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Ledger key
    pub key: String,
    /// Stored value
    pub value: String,
}

impl KeyValue {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Host-side range scan cursor
///
/// Lifecycle is open (via [`LedgerStub::get_state_by_range`]) -> next* ->
/// close. Implementations hold host resources until `close` is called, so
/// callers must close on every path. [`RangeScan`] does that for you.
pub trait StateIterator: Iterator<Item = Result<KeyValue>> {
    /// Release the cursor
    ///
    /// Calling `next` after `close` yields `None`. Closing twice is an error.
    fn close(&mut self) -> Result<()>;
}

/// Per-invocation transaction context supplied by the host
///
/// All calls are synchronous. Writes become visible to other transactions
/// only when the host commits; atomicity, isolation and conflict detection
/// are whatever the host provides.
pub trait LedgerStub {
    /// Host-assigned transaction id
    fn tx_id(&self) -> &str;

    /// Host-assigned transaction timestamp
    fn tx_timestamp(&self) -> DateTime<Utc>;

    /// Point lookup
    ///
    /// `None` or an empty string both mean "does not exist".
    fn get_state(&mut self, key: &str) -> Result<Option<String>>;

    /// Point write, replacing any prior value
    fn put_state(&mut self, key: &str, value: &str) -> Result<()>;

    /// Scan `[start_key, end_key)` in host-defined order
    ///
    /// An empty `start_key` or `end_key` leaves that side unbounded, so
    /// `("", "")` covers the whole key space.
    fn get_state_by_range(
        &mut self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateIterator + '_>>;
}

/// Range scan that is closed exactly once on every exit path
///
/// Call [`RangeScan::close`] on the success path to observe close errors.
/// If the scan is dropped instead (early return, `?`, panic unwind), the
/// cursor is closed in `Drop` and any close error is discarded.
pub struct RangeScan<'a> {
    inner: Option<Box<dyn StateIterator + 'a>>,
}

impl<'a> RangeScan<'a> {
    /// Take ownership of an open cursor
    pub fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self { inner: Some(inner) }
    }

    /// Open a scan over `[start_key, end_key)`
    pub fn open<S>(stub: &'a mut S, start_key: &str, end_key: &str) -> Result<Self>
    where
        S: LedgerStub + ?Sized,
    {
        Ok(Self::new(stub.get_state_by_range(start_key, end_key)?))
    }

    /// Close the cursor and report the result
    pub fn close(mut self) -> Result<()> {
        match self.inner.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl Iterator for RangeScan<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl Drop for RangeScan<'_> {
    fn drop(&mut self) {
        if let Some(mut cursor) = self.inner.take() {
            let _ = cursor.close();
        }
    }
}
