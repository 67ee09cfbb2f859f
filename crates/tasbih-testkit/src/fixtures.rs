//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a counter session wired to
//! an instrumented in-memory gateway.

use std::sync::Arc;

use tasbih::{CounterStore, TallyConfig};
use tasbih_core::{CounterKey, Snapshot};
use tasbih_store::MemoryGateway;

use crate::gateways::ProbeGateway;

/// A test fixture: a store over a probed in-memory gateway.
///
/// The fixture keeps its own handle to the gateway, so tests can inspect
/// persistence traffic and inject failures while the store runs. The
/// initial recovery load is counted like any other call.
pub struct TestFixture {
    pub store: CounterStore<Arc<ProbeGateway<MemoryGateway>>>,
    pub gateway: Arc<ProbeGateway<MemoryGateway>>,
    pub config: TallyConfig,
}

impl TestFixture {
    /// Create a fixture with the default phrase configuration and an
    /// empty medium.
    pub fn new() -> Self {
        Self::build(TallyConfig::default_phrases(), MemoryGateway::new())
    }

    /// Create a fixture with the given keys and an empty medium.
    pub fn with_keys(labels: &[&str]) -> Self {
        let config = TallyConfig::new(labels.iter().copied()).expect("fixture keys are valid");
        Self::build(config, MemoryGateway::new())
    }

    /// Create a fixture recovering from a pre-seeded medium.
    pub fn with_stored(labels: &[&str], snapshot: Snapshot) -> Self {
        let config = TallyConfig::new(labels.iter().copied()).expect("fixture keys are valid");
        Self::build(config, MemoryGateway::with_snapshot(snapshot))
    }

    fn build(config: TallyConfig, memory: MemoryGateway) -> Self {
        let gateway = Arc::new(ProbeGateway::new(memory));
        let store = CounterStore::initialize(config.clone(), Arc::clone(&gateway));
        Self {
            store,
            gateway,
            config,
        }
    }

    /// Select a counter by label, returning its current count.
    pub fn select(&mut self, label: &str) -> u64 {
        self.store
            .select(&CounterKey::from(label))
            .expect("fixture select uses configured keys")
    }

    /// Tap the selected counter `times` times, returning its final count.
    pub fn tap(&mut self, times: usize) -> u64 {
        let selected = self
            .store
            .selection()
            .cloned()
            .expect("tap requires a selection");
        let mut last = self.store.count_of(&selected);
        for _ in 0..times {
            last = self.store.increment().expect("increment with a selection");
        }
        last
    }

    /// Current count for a label.
    pub fn count(&self, label: &str) -> u64 {
        self.store.count_of(&CounterKey::from(label))
    }

    /// Simulate an app restart: rebuild the store over the same medium.
    pub fn restart(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        self.store = CounterStore::initialize(self.config.clone(), gateway);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fixture whose medium already holds the given counts and
/// selection.
pub fn seeded_fixture(
    labels: &[&str],
    counts: &[(&str, u64)],
    selected: Option<&str>,
) -> TestFixture {
    let counts = counts
        .iter()
        .map(|&(key, value)| (CounterKey::from(key), value))
        .collect();
    let snapshot = Snapshot::new(counts, selected.map(CounterKey::from));
    TestFixture::with_stored(labels, snapshot)
}
