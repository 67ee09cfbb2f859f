//! Counter configuration: the fixed, ordered set of keys.
//!
//! The set of counters is decided once at startup and never changes while
//! the store is running. Everything downstream (normalization, selection
//! validation, badge ordering) is defined relative to this list.

use crate::error::ConfigError;
use crate::key::CounterKey;

/// The five dhikr phrases of the stock application, in display order.
pub const DEFAULT_PHRASES: [&str; 5] = [
    "استغفر الله",
    "سبحان الله",
    "الحمد لله",
    "لا اله إلا الله",
    "الله أكبر",
];

/// A validated, ordered list of counter keys.
///
/// Construction rejects an empty list and duplicate keys, so holders of a
/// `TallyConfig` can rely on every key being unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    keys: Vec<CounterKey>,
}

impl TallyConfig {
    /// Build a configuration from an ordered list of keys.
    pub fn new<I, K>(keys: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = K>,
        K: Into<CounterKey>,
    {
        let keys: Vec<CounterKey> = keys.into_iter().map(Into::into).collect();

        if keys.is_empty() {
            return Err(ConfigError::Empty);
        }

        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(ConfigError::Duplicate(key.clone()));
            }
        }

        Ok(Self { keys })
    }

    /// The stock configuration: the five dhikr phrases in canonical order.
    pub fn default_phrases() -> Self {
        Self {
            keys: DEFAULT_PHRASES.iter().map(|&p| CounterKey::from(p)).collect(),
        }
    }

    /// The configured keys, in order.
    pub fn keys(&self) -> &[CounterKey] {
        &self.keys
    }

    /// Whether a key is part of this configuration.
    pub fn contains(&self, key: &CounterKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of configured counters.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the configuration is empty (never true for a constructed value).
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_preserves_order() {
        let config = TallyConfig::new(["c", "a", "b"]).unwrap();
        let labels: Vec<&str> = config.keys().iter().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_config_rejects_empty() {
        let keys: Vec<&str> = vec![];
        assert_eq!(TallyConfig::new(keys), Err(ConfigError::Empty));
    }

    #[test]
    fn test_config_rejects_duplicates() {
        let err = TallyConfig::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(err, ConfigError::Duplicate(CounterKey::from("a")));
    }

    #[test]
    fn test_config_contains() {
        let config = TallyConfig::new(["a", "b"]).unwrap();
        assert!(config.contains(&CounterKey::from("a")));
        assert!(!config.contains(&CounterKey::from("z")));
    }

    #[test]
    fn test_default_phrases() {
        let config = TallyConfig::default_phrases();
        assert_eq!(config.len(), 5);
        assert_eq!(config.keys()[0].as_str(), "استغفر الله");
        assert_eq!(config.keys()[4].as_str(), "الله أكبر");
    }
}
