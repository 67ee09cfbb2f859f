//! Strong key type for the tasbih counter.
//!
//! Counter keys are newtypes over strings to prevent mixing them up with
//! other text at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The label identifying one counter.
///
/// Keys are opaque to the core: any non-empty configuration may use any
/// strings it likes (the stock application uses Arabic dhikr phrases).
/// Two counters are the same counter exactly when their keys are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterKey(String);

impl CounterKey {
    /// Create a new key from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CounterKey({:?})", self.0)
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CounterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CounterKey {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for CounterKey {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for CounterKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CounterKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
