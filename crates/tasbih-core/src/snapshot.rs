//! The persisted snapshot: what survives a restart.
//!
//! Durable state is two independent values: the flat counts record and the
//! last-selected key. Either may be absent on its own; a snapshot carries
//! whatever halves were found.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::key::CounterKey;

/// Decoded durable state as read back from a gateway.
///
/// The counts record is a flat map, unvalidated at this layer: keys are
/// whatever was stored, and it is the store's job to normalize them
/// against the active configuration. `BTreeMap` keeps the serialized
/// document deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Stored count per key. Empty when no counts record was found.
    pub counts: BTreeMap<CounterKey, u64>,
    /// The last-selected key, if one was stored.
    pub selected: Option<CounterKey>,
}

impl Snapshot {
    /// Create a snapshot from both halves.
    pub fn new(counts: BTreeMap<CounterKey, u64>, selected: Option<CounterKey>) -> Self {
        Self { counts, selected }
    }

    /// Whether both halves are absent.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.selected.is_none()
    }
}
