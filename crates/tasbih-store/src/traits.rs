//! The Gateway trait: the persistence seam of the counter.
//!
//! A gateway stores two independent durable values: the flat counts record
//! and the last-selected key. It never interprets them against the active
//! configuration; normalization happens above this layer.

use std::collections::BTreeMap;
use std::sync::Arc;

use tasbih_core::{CounterKey, Snapshot};

use crate::error::{GatewayError, Result};

/// Outcome of reading the durable state.
///
/// Reading never raises: whatever is on the medium is classified into one
/// of these three cases. The corrupt case carries its cause so the caller
/// can log it.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Stored data was found and decoded. Either half may still be absent
    /// inside the snapshot.
    Snapshot(Snapshot),

    /// Nothing has been persisted yet.
    NotFound,

    /// Stored data exists but could not be decoded.
    Corrupt(GatewayError),
}

impl LoadOutcome {
    /// Whether nothing was persisted.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadOutcome::NotFound)
    }

    /// Whether the stored data was unreadable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt(_))
    }

    /// The decoded snapshot, if one was found.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadOutcome::Snapshot(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Storage abstraction for counter state.
///
/// Implementations must be cheap to call from a single-threaded event
/// loop: every method is synchronous and a save is one best-effort write,
/// with no retry or queueing behind it.
pub trait Gateway: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Read
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the durable state.
    ///
    /// Never returns an error: missing data is `NotFound` and undecodable
    /// data is `Corrupt`.
    fn load(&self) -> LoadOutcome;

    // ─────────────────────────────────────────────────────────────────────────
    // Write
    // ─────────────────────────────────────────────────────────────────────────

    /// Persist the counts record, replacing the previous one.
    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()>;

    /// Persist the selection. `None` clears the stored selection.
    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()>;
}

/// Extension methods for any Gateway.
pub trait GatewayExt: Gateway {
    /// Write both halves of a snapshot, counts first.
    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.save_counts(&snapshot.counts)?;
        self.save_selection(snapshot.selected.as_ref())
    }
}

impl<G: Gateway + ?Sized> GatewayExt for G {}

impl<G: Gateway + ?Sized> Gateway for Arc<G> {
    fn load(&self) -> LoadOutcome {
        (**self).load()
    }

    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()> {
        (**self).save_counts(counts)
    }

    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()> {
        (**self).save_selection(selected)
    }
}
