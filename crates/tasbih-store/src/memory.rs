//! In-memory implementation of the Gateway trait.
//!
//! This is primarily for testing and ephemeral embedding. It has the same
//! semantics as the durable backends but keeps everything in memory.

use std::collections::BTreeMap;
use std::sync::RwLock;

use tasbih_core::{CounterKey, Snapshot};

use crate::error::Result;
use crate::traits::{Gateway, LoadOutcome};

/// In-memory gateway implementation.
///
/// All data is lost when the gateway is dropped. Thread-safe via RwLock.
pub struct MemoryGateway {
    inner: RwLock<MemoryGatewayInner>,
}

struct MemoryGatewayInner {
    /// The counts record. `None` until the first save.
    counts: Option<BTreeMap<CounterKey, u64>>,

    /// The stored selection.
    selected: Option<CounterKey>,

    /// Whether the selection slot was ever written. Distinguishes "never
    /// saved" from "saved as cleared".
    selection_written: bool,
}

impl MemoryGateway {
    /// Create an empty gateway: `load` reports `NotFound`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryGatewayInner {
                counts: None,
                selected: None,
                selection_written: false,
            }),
        }
    }

    /// Create a gateway pre-seeded with a snapshot.
    ///
    /// `load` on the result reports exactly this snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(MemoryGatewayInner {
                counts: Some(snapshot.counts),
                selected: snapshot.selected,
                selection_written: true,
            }),
        }
    }

    /// What is currently stored, if anything was ever written.
    pub fn stored(&self) -> Option<Snapshot> {
        let inner = self.inner.read().unwrap();
        if inner.counts.is_none() && !inner.selection_written {
            return None;
        }
        Some(Snapshot::new(
            inner.counts.clone().unwrap_or_default(),
            inner.selected.clone(),
        ))
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway for MemoryGateway {
    fn load(&self) -> LoadOutcome {
        let inner = self.inner.read().unwrap();

        if inner.counts.is_none() && !inner.selection_written {
            return LoadOutcome::NotFound;
        }

        LoadOutcome::Snapshot(Snapshot::new(
            inner.counts.clone().unwrap_or_default(),
            inner.selected.clone(),
        ))
    }

    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.counts = Some(counts.clone());
        Ok(())
    }

    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.selected = selected.cloned();
        inner.selection_written = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<CounterKey, u64> {
        pairs
            .iter()
            .map(|&(k, v)| (CounterKey::from(k), v))
            .collect()
    }

    #[test]
    fn test_fresh_gateway_reports_not_found() {
        let gateway = MemoryGateway::new();
        assert!(gateway.load().is_not_found());
        assert!(gateway.stored().is_none());
    }

    #[test]
    fn test_counts_round_trip() {
        let gateway = MemoryGateway::new();
        gateway.save_counts(&counts(&[("a", 3), ("b", 0)])).unwrap();

        let loaded = gateway.load();
        let snapshot = loaded.snapshot().unwrap();
        assert_eq!(snapshot.counts, counts(&[("a", 3), ("b", 0)]));
        assert_eq!(snapshot.selected, None);
    }

    #[test]
    fn test_selection_only_write_is_loadable() {
        let gateway = MemoryGateway::new();
        gateway.save_selection(Some(&CounterKey::from("a"))).unwrap();

        let loaded = gateway.load();
        let snapshot = loaded.snapshot().unwrap();
        assert!(snapshot.counts.is_empty());
        assert_eq!(snapshot.selected, Some(CounterKey::from("a")));
    }

    #[test]
    fn test_save_counts_replaces_record() {
        let gateway = MemoryGateway::new();
        gateway.save_counts(&counts(&[("old", 9)])).unwrap();
        gateway.save_counts(&counts(&[("new", 1)])).unwrap();

        let stored = gateway.stored().unwrap();
        assert_eq!(stored.counts, counts(&[("new", 1)]));
    }

    #[test]
    fn test_clearing_selection() {
        let gateway = MemoryGateway::new();
        gateway.save_selection(Some(&CounterKey::from("a"))).unwrap();
        gateway.save_selection(None).unwrap();

        let stored = gateway.stored().unwrap();
        assert_eq!(stored.selected, None);
    }

    #[test]
    fn test_with_snapshot_loads_back() {
        let snapshot = Snapshot::new(counts(&[("a", 5)]), Some(CounterKey::from("a")));
        let gateway = MemoryGateway::with_snapshot(snapshot.clone());

        match gateway.load() {
            LoadOutcome::Snapshot(loaded) => assert_eq!(loaded, snapshot),
            other => panic!("expected snapshot, got {:?}", other),
        }
    }
}
