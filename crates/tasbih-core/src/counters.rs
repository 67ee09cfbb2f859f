//! The counter set: one tally per configured key.
//!
//! A `CounterSet` always holds exactly one non-negative count for every
//! configured key and nothing else. Raw data read back from storage is
//! normalized into that shape before it is used.

use std::collections::{BTreeMap, HashMap};

use crate::key::CounterKey;

/// All counters, keyed by label, iterated in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSet {
    /// Configured keys in display order.
    keys: Vec<CounterKey>,
    /// Current count per key. Holds exactly the keys in `keys`.
    counts: HashMap<CounterKey, u64>,
}

impl CounterSet {
    /// Create a set with every configured counter at zero.
    pub fn zeroed(keys: &[CounterKey]) -> Self {
        let counts = keys.iter().map(|k| (k.clone(), 0)).collect();
        Self {
            keys: keys.to_vec(),
            counts,
        }
    }

    /// Rebuild a set from raw stored counts.
    ///
    /// Normalization rules: a configured key missing from `raw` starts at
    /// zero; a key in `raw` that is not configured is dropped.
    pub fn restore(keys: &[CounterKey], raw: &BTreeMap<CounterKey, u64>) -> Self {
        let counts = keys
            .iter()
            .map(|k| (k.clone(), raw.get(k).copied().unwrap_or(0)))
            .collect();
        Self {
            keys: keys.to_vec(),
            counts,
        }
    }

    /// Current count for a key. Zero for keys outside the configuration.
    pub fn get(&self, key: &CounterKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Whether the key is part of this set.
    pub fn contains(&self, key: &CounterKey) -> bool {
        self.counts.contains_key(key)
    }

    /// Add one to a counter, returning the new count.
    ///
    /// Returns `None` if the key is not configured; the set is unchanged.
    pub fn increment(&mut self, key: &CounterKey) -> Option<u64> {
        let count = self.counts.get_mut(key)?;
        *count = count.saturating_add(1);
        Some(*count)
    }

    /// Zero a single counter, returning the new count (always 0).
    ///
    /// Returns `None` if the key is not configured; the set is unchanged.
    pub fn reset(&mut self, key: &CounterKey) -> Option<u64> {
        let count = self.counts.get_mut(key)?;
        *count = 0;
        Some(0)
    }

    /// Zero every counter.
    pub fn reset_all(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    /// Iterate over (key, count) pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&CounterKey, u64)> {
        self.keys.iter().map(|k| (k, self.counts[k]))
    }

    /// The configured keys, in order.
    pub fn keys(&self) -> &[CounterKey] {
        &self.keys
    }

    /// Snapshot the counts as a flat ordered map, the durable form.
    pub fn to_map(&self) -> BTreeMap<CounterKey, u64> {
        self.counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect()
    }

    /// Number of counters.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set has no counters.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
