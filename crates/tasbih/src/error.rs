//! Error types for counter operations.

use tasbih_core::{ConfigError, CounterKey};
use thiserror::Error;

/// Errors reported by counter operations.
///
/// Persistence failures never appear here: writes are best-effort and
/// reported through logging, not through operation results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// No counter is selected.
    #[error("no counter selected")]
    NoSelection,

    /// The key is not part of the configured set.
    #[error("invalid counter key: {0}")]
    InvalidKey(CounterKey),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for counter operations.
pub type Result<T> = std::result::Result<T, TallyError>;
