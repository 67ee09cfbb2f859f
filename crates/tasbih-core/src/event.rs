//! Inbound events: what the embedding UI asks the counter to do.
//!
//! The event contract keeps the core decoupled from any particular widget
//! toolkit. A host translates its own input (clicks, key presses, gestures)
//! into these events and feeds them to the store.

use serde::{Deserialize, Serialize};

use crate::key::CounterKey;

/// A request from the embedding host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyEvent {
    /// A counter was chosen from the list.
    Select(CounterKey),

    /// The tally button was tapped: add one to the selected counter.
    Increment,

    /// Zero the selected counter.
    ResetCurrent,

    /// Zero every counter.
    ResetAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_round_trip() {
        let events = vec![
            TallyEvent::Select(CounterKey::from("a")),
            TallyEvent::Increment,
            TallyEvent::ResetCurrent,
            TallyEvent::ResetAll,
        ];

        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<TallyEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }
}
