//! End-to-end sessions driving the full engine surface.
//!
//! Every test walks the engine the way an embedding host would:
//! - recover a store, select, count, reset
//! - feed translated UI events through the event contract
//! - hand each notice to a presentation sync and check the planned redraws

use std::collections::BTreeMap;

use tasbih::{
    CounterKey, CounterStore, Gateway, GatewayError, LoadOutcome, MemoryGateway,
    PresentationSync, TallyConfig, TallyError, TallyEvent, DEFAULT_PHRASES,
};

fn key(label: &str) -> CounterKey {
    CounterKey::from(label)
}

fn two_key_store() -> CounterStore<MemoryGateway> {
    let config = TallyConfig::new(["A", "B"]).unwrap();
    CounterStore::initialize(config, MemoryGateway::new())
}

/// Gateway with nothing stored that rejects every write.
struct BrokenGateway;

impl Gateway for BrokenGateway {
    fn load(&self) -> LoadOutcome {
        LoadOutcome::NotFound
    }

    fn save_counts(&self, _: &BTreeMap<CounterKey, u64>) -> tasbih::store::Result<()> {
        Err(GatewayError::WriteFailed("medium unavailable".into()))
    }

    fn save_selection(&self, _: Option<&CounterKey>) -> tasbih::store::Result<()> {
        Err(GatewayError::WriteFailed("medium unavailable".into()))
    }
}

#[test]
fn test_two_counter_session() {
    let mut store = two_key_store();

    assert_eq!(store.select(&key("A")).unwrap(), 0);
    assert_eq!(store.increment().unwrap(), 1);
    assert_eq!(store.increment().unwrap(), 2);
    assert_eq!(store.increment().unwrap(), 3);
    assert_eq!(store.count_of(&key("B")), 0, "other counters stay untouched");

    assert_eq!(store.select(&key("B")).unwrap(), 0);
    assert_eq!(store.count_of(&key("A")), 3, "switching selection keeps counts");

    store.reset_all();
    assert_eq!(store.count_of(&key("A")), 0);
    assert_eq!(store.count_of(&key("B")), 0);
}

#[test]
fn test_default_phrase_configuration() {
    let store = CounterStore::initialize(TallyConfig::default_phrases(), MemoryGateway::new());

    assert_eq!(store.keys().len(), DEFAULT_PHRASES.len());
    for phrase in DEFAULT_PHRASES {
        assert_eq!(store.count_of(&key(phrase)), 0);
    }
    assert_eq!(store.selection(), None);
}

#[test]
fn test_event_driven_session_with_redraws() {
    let mut store = two_key_store();
    let mut sync = PresentationSync::new();

    // First paint: both badges at zero, nothing selected yet
    let plan = sync.plan(&store.repaint());
    assert_eq!(plan.badges.len(), 2);
    assert!(plan.badges.iter().all(|badge| badge.value == 0 && !badge.has_count));
    assert!(plan.display.is_none());

    // Selecting A repaints only the primary display
    let notice = store.apply(TallyEvent::Select(key("A"))).unwrap();
    let plan = sync.plan(&notice);
    assert!(plan.badges.is_empty(), "badge already shows 0");
    let display = plan.display.unwrap();
    assert_eq!(display.key, key("A"));
    assert_eq!(display.value, 0);

    // Each tap repaints A's badge and the display together
    for expected in 1..=3u64 {
        let notice = store.apply(TallyEvent::Increment).unwrap();
        let plan = sync.plan(&notice);
        assert_eq!(plan.badges.len(), 1);
        assert_eq!(plan.badges[0].key, key("A"));
        assert_eq!(plan.badges[0].value, expected);
        assert!(plan.badges[0].has_count);
        assert_eq!(plan.display.unwrap().value, expected);
    }

    // Switching to B moves the display; no badge changed
    let notice = store.apply(TallyEvent::Select(key("B"))).unwrap();
    let plan = sync.plan(&notice);
    assert!(plan.badges.is_empty());
    let display = plan.display.unwrap();
    assert_eq!(display.key, key("B"));
    assert_eq!(display.value, 0);

    // Reset all: only A's badge is stale, and the display already shows 0
    let notice = store.apply(TallyEvent::ResetAll).unwrap();
    let plan = sync.plan(&notice);
    assert_eq!(plan.badges.len(), 1);
    assert_eq!(plan.badges[0].key, key("A"));
    assert_eq!(plan.badges[0].value, 0);
    assert!(!plan.badges[0].has_count);
    assert!(plan.display.is_none());
}

#[test]
fn test_errors_leave_state_untouched() {
    let mut store = two_key_store();

    assert_eq!(store.increment().unwrap_err(), TallyError::NoSelection);
    assert_eq!(store.reset_current().unwrap_err(), TallyError::NoSelection);

    store.select(&key("A")).unwrap();
    store.increment().unwrap();

    let err = store.select(&key("C")).unwrap_err();
    assert_eq!(err, TallyError::InvalidKey(key("C")));
    assert_eq!(store.selection(), Some(&key("A")), "failed select keeps the old selection");
    assert_eq!(store.count_of(&key("A")), 1);
}

#[test]
fn test_failed_events_plan_nothing() {
    let mut store = two_key_store();
    let mut sync = PresentationSync::new();
    sync.plan(&store.repaint());

    // No selection yet, so the event fails and there is no notice to plan
    assert!(store.apply(TallyEvent::Increment).is_err());
    assert!(sync.plan(&store.repaint()).is_empty());
}

#[test]
fn test_write_failures_are_logged_not_raised() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let config = TallyConfig::new(["A"]).unwrap();
    let mut store = CounterStore::initialize(config, BrokenGateway);

    // Every operation still succeeds against in-memory state
    assert_eq!(store.select(&key("A")).unwrap(), 0);
    assert_eq!(store.increment().unwrap(), 1);
    assert_eq!(store.increment().unwrap(), 2);
    assert_eq!(store.reset_current().unwrap(), 0);
    store.reset_all();
    assert_eq!(store.count_of(&key("A")), 0);
}
