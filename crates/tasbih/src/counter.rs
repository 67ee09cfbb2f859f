//! The counter store: selection, tallies, recovery, and persistence.
//!
//! `CounterStore` is the single owner of counter state. It recovers from
//! the gateway at construction, then serves synchronous operations from
//! memory; every mutation updates memory first and persists afterwards,
//! so a failing medium degrades durability but never correctness.

use tasbih_core::{ChangeNotice, CounterKey, CounterSet, TallyConfig, TallyEvent};
use tasbih_store::{Gateway, LoadOutcome};

use crate::error::{Result, TallyError};

/// The tasbih counter: a fixed set of tallies with one selected key.
///
/// Operations take `&mut self` and are meant to be called from a single
/// event loop; the store itself holds no locks.
pub struct CounterStore<G: Gateway> {
    /// Current counts, always normalized to the configuration.
    counters: CounterSet,
    /// The selected key. Invariant: `None` or a key present in `counters`.
    selection: Option<CounterKey>,
    /// The persistence backend.
    gateway: G,
}

impl<G: Gateway> CounterStore<G> {
    /// Build a store by recovering state from the gateway.
    ///
    /// Stored counts are normalized against the configuration (missing
    /// keys start at zero, unknown keys are dropped) and the stored
    /// selection is restored only when it names a configured key. A
    /// missing snapshot starts everything at zero; an unreadable one does
    /// the same after logging the cause. Construction never fails.
    pub fn initialize(config: TallyConfig, gateway: G) -> Self {
        let (counters, selection) = match gateway.load() {
            LoadOutcome::Snapshot(snapshot) => {
                let counters = CounterSet::restore(config.keys(), &snapshot.counts);
                let selection = snapshot.selected.filter(|key| config.contains(key));
                (counters, selection)
            }
            LoadOutcome::NotFound => (CounterSet::zeroed(config.keys()), None),
            LoadOutcome::Corrupt(err) => {
                tracing::warn!("stored counter state unreadable, starting from zero: {}", err);
                (CounterSet::zeroed(config.keys()), None)
            }
        };

        Self {
            counters,
            selection,
            gateway,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tally Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Select a counter by key.
    ///
    /// Returns the key's current count without mutating it, so the caller
    /// can render the counter straight away. Only the selection record is
    /// persisted. An unconfigured key fails with `InvalidKey` and leaves
    /// the previous selection in place.
    pub fn select(&mut self, key: &CounterKey) -> Result<u64> {
        if !self.counters.contains(key) {
            return Err(TallyError::InvalidKey(key.clone()));
        }

        self.selection = Some(key.clone());
        self.persist_selection();
        Ok(self.counters.get(key))
    }

    /// Add one to the selected counter, returning the new count.
    ///
    /// Fails with `NoSelection` when nothing is selected.
    pub fn increment(&mut self) -> Result<u64> {
        let key = self.selection.clone().ok_or(TallyError::NoSelection)?;
        let count = self
            .counters
            .increment(&key)
            .ok_or(TallyError::InvalidKey(key))?;

        self.persist_counts();
        Ok(count)
    }

    /// Zero the selected counter, returning the new count (always 0).
    ///
    /// Other counters are untouched. Fails with `NoSelection` when
    /// nothing is selected.
    pub fn reset_current(&mut self) -> Result<u64> {
        let key = self.selection.clone().ok_or(TallyError::NoSelection)?;
        let count = self
            .counters
            .reset(&key)
            .ok_or(TallyError::InvalidKey(key))?;

        self.persist_counts();
        Ok(count)
    }

    /// Zero every counter, with or without a selection.
    ///
    /// The selection itself is kept.
    pub fn reset_all(&mut self) {
        self.counters.reset_all();
        self.persist_counts();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Current count for a key. Zero for keys outside the configuration.
    pub fn count_of(&self, key: &CounterKey) -> u64 {
        self.counters.get(key)
    }

    /// The selected key, if any.
    pub fn selection(&self) -> Option<&CounterKey> {
        self.selection.as_ref()
    }

    /// The configured keys, in display order.
    pub fn keys(&self) -> &[CounterKey] {
        self.counters.keys()
    }

    /// Iterate over (key, count) pairs in display order.
    pub fn counts(&self) -> impl Iterator<Item = (&CounterKey, u64)> {
        self.counters.iter()
    }

    /// The persistence backend.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event Contract
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply an inbound event, returning the change notice it produced.
    ///
    /// This is the entry point for embedding hosts: feed translated UI
    /// events in, hand the notices to a presentation sync.
    pub fn apply(&mut self, event: TallyEvent) -> Result<ChangeNotice> {
        match event {
            TallyEvent::Select(key) => {
                let count = self.select(&key)?;
                Ok(ChangeNotice::single(key.clone(), count, Some(key)))
            }
            TallyEvent::Increment => {
                let key = self.selection.clone().ok_or(TallyError::NoSelection)?;
                let count = self.increment()?;
                Ok(ChangeNotice::single(key.clone(), count, Some(key)))
            }
            TallyEvent::ResetCurrent => {
                let key = self.selection.clone().ok_or(TallyError::NoSelection)?;
                let count = self.reset_current()?;
                Ok(ChangeNotice::single(key.clone(), count, Some(key)))
            }
            TallyEvent::ResetAll => {
                self.reset_all();
                Ok(self.repaint())
            }
        }
    }

    /// A notice covering the entire current state, for first paint.
    pub fn repaint(&self) -> ChangeNotice {
        ChangeNotice::batch(
            self.counters.iter().map(|(key, count)| (key.clone(), count)),
            self.selection.clone(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Persist the counts record. Failures are logged, never raised;
    /// in-memory state stays authoritative.
    fn persist_counts(&self) {
        if let Err(err) = self.gateway.save_counts(&self.counters.to_map()) {
            tracing::warn!("failed to persist counters: {}", err);
        }
    }

    /// Persist the selection. Failures are logged, never raised.
    fn persist_selection(&self) {
        if let Err(err) = self.gateway.save_selection(self.selection.as_ref()) {
            tracing::warn!("failed to persist selection: {}", err);
        }
    }
}
