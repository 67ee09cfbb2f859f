//! Instrumented gateway wrappers.
//!
//! `ProbeGateway` wraps any gateway, counting calls and optionally
//! injecting failures, so tests can assert exactly which persistence
//! traffic an operation produced.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use tasbih_core::CounterKey;
use tasbih_store::{Gateway, GatewayError, LoadOutcome, Result};

/// Gateway wrapper that counts calls and can inject failures.
pub struct ProbeGateway<G> {
    inner: G,
    loads: AtomicU32,
    count_saves: AtomicU32,
    selection_saves: AtomicU32,
    fail_saves: AtomicBool,
    corrupt_loads: AtomicBool,
}

impl<G: Gateway> ProbeGateway<G> {
    /// Wrap a gateway. All counters start at zero.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            loads: AtomicU32::new(0),
            count_saves: AtomicU32::new(0),
            selection_saves: AtomicU32::new(0),
            fail_saves: AtomicBool::new(false),
            corrupt_loads: AtomicBool::new(false),
        }
    }

    /// How many times `load` was called.
    pub fn loads(&self) -> u32 {
        self.loads.load(Ordering::Relaxed)
    }

    /// How many times `save_counts` was called, failed attempts included.
    pub fn count_saves(&self) -> u32 {
        self.count_saves.load(Ordering::Relaxed)
    }

    /// How many times `save_selection` was called, failed attempts included.
    pub fn selection_saves(&self) -> u32 {
        self.selection_saves.load(Ordering::Relaxed)
    }

    /// Make every subsequent save fail with `WriteFailed`.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    /// Make every subsequent load report corruption.
    pub fn corrupt_loads(&self, corrupt: bool) {
        self.corrupt_loads.store(corrupt, Ordering::Relaxed);
    }

    /// The wrapped gateway.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Gateway> Gateway for ProbeGateway<G> {
    fn load(&self) -> LoadOutcome {
        self.loads.fetch_add(1, Ordering::Relaxed);
        if self.corrupt_loads.load(Ordering::Relaxed) {
            return LoadOutcome::Corrupt(GatewayError::InvalidData(
                "injected corruption".into(),
            ));
        }
        self.inner.load()
    }

    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()> {
        self.count_saves.fetch_add(1, Ordering::Relaxed);
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(GatewayError::WriteFailed("injected save failure".into()));
        }
        self.inner.save_counts(counts)
    }

    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()> {
        self.selection_saves.fetch_add(1, Ordering::Relaxed);
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(GatewayError::WriteFailed("injected save failure".into()));
        }
        self.inner.save_selection(selected)
    }
}
