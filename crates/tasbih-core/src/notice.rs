//! Outbound change notices: what an operation changed.
//!
//! Every successful operation on the store describes its effect as a
//! `ChangeNotice`. The presentation layer consumes notices to decide what
//! actually needs redrawing; nothing in a notice implies a redraw by itself.

use serde::{Deserialize, Serialize};

use crate::key::CounterKey;

/// The observable effect of one operation.
///
/// `counts` names every key the operation touched (or re-announced), with
/// the count taken at emission time. `selection` is the selection in effect
/// after the operation completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotice {
    /// Touched keys with their current counts, in announcement order.
    pub counts: Vec<(CounterKey, u64)>,
    /// The selected key after the operation, if any.
    pub selection: Option<CounterKey>,
}

impl ChangeNotice {
    /// A notice covering a single key.
    pub fn single(key: CounterKey, count: u64, selection: Option<CounterKey>) -> Self {
        Self {
            counts: vec![(key, count)],
            selection,
        }
    }

    /// A notice covering many keys at once (reset-all, first paint).
    pub fn batch(
        counts: impl IntoIterator<Item = (CounterKey, u64)>,
        selection: Option<CounterKey>,
    ) -> Self {
        Self {
            counts: counts.into_iter().collect(),
            selection,
        }
    }

    /// The announced count for a key, if the notice covers it.
    pub fn value_of(&self, key: &CounterKey) -> Option<u64> {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, count)| count)
    }

    /// Whether the notice covers more than one key.
    pub fn is_batch(&self) -> bool {
        self.counts.len() > 1
    }
}
