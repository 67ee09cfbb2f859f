//! # Tasbih Core
//!
//! Pure primitives for the tasbih counter: keys, configurations, counter
//! sets, snapshots, and the event/notice contract.
//!
//! This crate contains no I/O, no storage, no logging. It is pure
//! computation over counter state.
//!
//! ## Key Types
//!
//! - [`CounterKey`] - The label identifying one counter
//! - [`TallyConfig`] - The fixed, ordered set of configured keys
//! - [`CounterSet`] - One non-negative count per configured key
//! - [`Snapshot`] - The two-part durable state (counts + selection)
//! - [`TallyEvent`] / [`ChangeNotice`] - The inbound/outbound contract
//!
//! ## Normalization
//!
//! Stored counts are never trusted as-is: [`CounterSet::restore`] fills
//! missing configured keys with zero and drops keys that are no longer
//! configured, so a counter set always matches the active configuration.

pub mod config;
pub mod counters;
pub mod error;
pub mod event;
pub mod key;
pub mod notice;
pub mod snapshot;

pub use config::{TallyConfig, DEFAULT_PHRASES};
pub use counters::CounterSet;
pub use error::ConfigError;
pub use event::TallyEvent;
pub use key::CounterKey;
pub use notice::ChangeNotice;
pub use snapshot::Snapshot;
