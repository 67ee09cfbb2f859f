//! Error types for the core crate.

use thiserror::Error;

use crate::key::CounterKey;

/// Errors raised while validating a counter configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured key list has no entries.
    #[error("configured key list is empty")]
    Empty,

    /// The same key appears more than once.
    #[error("duplicate counter key: {0}")]
    Duplicate(CounterKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::Empty.to_string(), "configured key list is empty");
        assert_eq!(
            ConfigError::Duplicate(CounterKey::from("a")).to_string(),
            "duplicate counter key: a"
        );
    }
}
