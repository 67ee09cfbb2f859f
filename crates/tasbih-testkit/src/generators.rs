//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use tasbih::CounterStore;
use tasbih_core::{CounterKey, Snapshot, TallyConfig, TallyEvent};
use tasbih_store::MemoryGateway;

/// Generate a short printable counter key.
pub fn counter_key() -> impl Strategy<Value = CounterKey> {
    "[a-z]{1,12}".prop_map(CounterKey::from)
}

/// Generate a configuration of 1 to `max` distinct keys.
pub fn key_set(max: usize) -> impl Strategy<Value = Vec<CounterKey>> {
    prop::collection::btree_set(counter_key(), 1..=max)
        .prop_map(|keys| keys.into_iter().collect())
}

/// Generate a stored count.
pub fn count() -> impl Strategy<Value = u64> {
    0u64..=50_000
}

/// Generate one event against the given configuration.
///
/// Mostly well-formed; occasionally selects a key outside the
/// configuration to exercise the rejection path.
pub fn tally_event(keys: &[CounterKey]) -> impl Strategy<Value = TallyEvent> {
    let configured = keys.to_vec();
    prop_oneof![
        3 => prop::sample::select(configured).prop_map(TallyEvent::Select),
        4 => Just(TallyEvent::Increment),
        1 => Just(TallyEvent::ResetCurrent),
        1 => Just(TallyEvent::ResetAll),
        1 => counter_key().prop_map(TallyEvent::Select),
    ]
}

/// Generate a stored snapshot for the given configuration: some keys
/// missing, some foreign, and a selection that may be stale.
pub fn stored_snapshot(keys: &[CounterKey]) -> impl Strategy<Value = Snapshot> {
    let configured = keys.to_vec();
    let per_key = prop::collection::vec(prop::option::of(count()), configured.len());
    let extras = prop::collection::btree_map(counter_key(), count(), 0..3);
    let selection = prop_oneof![
        2 => Just(None),
        2 => prop::sample::select(configured.clone()).prop_map(Some),
        1 => counter_key().prop_map(Some),
    ];

    (per_key, extras, selection).prop_map(move |(per_key, extras, selected)| {
        let mut counts: BTreeMap<CounterKey, u64> = extras;
        for (key, stored) in configured.iter().zip(per_key) {
            if let Some(value) = stored {
                counts.insert(key.clone(), value);
            }
        }
        Snapshot::new(counts, selected)
    })
}

/// Parameters for a full generated session.
#[derive(Debug, Clone)]
pub struct SessionParams {
    /// The configured keys, distinct and non-empty.
    pub keys: Vec<CounterKey>,
    /// What the medium holds before the session starts.
    pub stored: Snapshot,
    /// The events the session applies, in order.
    pub events: Vec<TallyEvent>,
}

impl Arbitrary for SessionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        key_set(6)
            .prop_flat_map(|keys| {
                let stored = stored_snapshot(&keys);
                let events = prop::collection::vec(tally_event(&keys), 0..40);
                (Just(keys), stored, events)
            })
            .prop_map(|(keys, stored, events)| SessionParams {
                keys,
                stored,
                events,
            })
            .boxed()
    }
}

/// Build a store over an in-memory medium seeded from the parameters.
pub fn store_from_params(params: &SessionParams) -> CounterStore<MemoryGateway> {
    let config = TallyConfig::new(params.keys.iter().cloned())
        .expect("generated keys are distinct and non-empty");
    CounterStore::initialize(config, MemoryGateway::with_snapshot(params.stored.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tasbih::TallyError;

    proptest! {
        #[test]
        fn test_store_matches_model(params: SessionParams) {
            let mut store = store_from_params(&params);

            // The model mirrors recovery normalization by hand
            let mut model: HashMap<CounterKey, u64> = params
                .keys
                .iter()
                .map(|key| {
                    let stored = params.stored.counts.get(key).copied().unwrap_or(0);
                    (key.clone(), stored)
                })
                .collect();
            let mut selected = params
                .stored
                .selected
                .clone()
                .filter(|key| params.keys.contains(key));

            for event in params.events.clone() {
                match event {
                    TallyEvent::Select(key) => {
                        let result = store.apply(TallyEvent::Select(key.clone()));
                        if params.keys.contains(&key) {
                            prop_assert_eq!(
                                result.unwrap().value_of(&key),
                                Some(model[&key])
                            );
                            selected = Some(key);
                        } else {
                            prop_assert_eq!(
                                result.unwrap_err(),
                                TallyError::InvalidKey(key)
                            );
                        }
                    }
                    TallyEvent::Increment => match selected.clone() {
                        Some(key) => {
                            let entry = model.get_mut(&key).unwrap();
                            *entry = entry.saturating_add(1);
                            let notice = store.apply(TallyEvent::Increment).unwrap();
                            prop_assert_eq!(notice.value_of(&key), Some(*entry));
                        }
                        None => {
                            prop_assert_eq!(
                                store.apply(TallyEvent::Increment).unwrap_err(),
                                TallyError::NoSelection
                            );
                        }
                    },
                    TallyEvent::ResetCurrent => match selected.clone() {
                        Some(key) => {
                            model.insert(key.clone(), 0);
                            let notice = store.apply(TallyEvent::ResetCurrent).unwrap();
                            prop_assert_eq!(notice.value_of(&key), Some(0));
                        }
                        None => {
                            prop_assert_eq!(
                                store.apply(TallyEvent::ResetCurrent).unwrap_err(),
                                TallyError::NoSelection
                            );
                        }
                    },
                    TallyEvent::ResetAll => {
                        for value in model.values_mut() {
                            *value = 0;
                        }
                        let notice = store.apply(TallyEvent::ResetAll).unwrap();
                        prop_assert_eq!(notice.counts.len(), params.keys.len());
                    }
                }
            }

            for key in &params.keys {
                prop_assert_eq!(store.count_of(key), model[key]);
            }
            prop_assert_eq!(store.selection(), selected.as_ref());
        }

        #[test]
        fn test_recovery_reflects_final_state(params: SessionParams) {
            let mut store = store_from_params(&params);
            for event in params.events.clone() {
                let _ = store.apply(event);
            }

            let stored = store.gateway().stored().unwrap_or_default();
            let config = TallyConfig::new(params.keys.iter().cloned()).unwrap();
            let recovered =
                CounterStore::initialize(config, MemoryGateway::with_snapshot(stored));

            for key in &params.keys {
                prop_assert_eq!(recovered.count_of(key), store.count_of(key));
            }
            prop_assert_eq!(recovered.selection(), store.selection());
        }

        #[test]
        fn test_key_sets_are_distinct(keys in key_set(8)) {
            let mut seen = keys.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), keys.len());
        }
    }
}
