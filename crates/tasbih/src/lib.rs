//! # Tasbih
//!
//! The unified entry point for the tasbih counter engine: a small set of
//! named tallies, one selected at a time, counted by repeated taps and
//! persisted across sessions.
//!
//! ## Overview
//!
//! The engine is assembled from three layers:
//!
//! - [`tasbih_core`] holds the pure domain model: keys, configurations,
//!   counter sets, events, and change notices.
//! - [`tasbih_store`] provides the persistence gateways (SQLite, JSON
//!   files, in-memory) behind the [`Gateway`] trait.
//! - This crate binds them together: [`CounterStore`] owns the state and
//!   drives persistence, [`PresentationSync`] plans minimal redraws.
//!
//! ## Key Types
//!
//! - [`CounterStore`]: recovery, selection, increment, and resets.
//! - [`PresentationSync`]: diffs change notices into [`RedrawPlan`]s.
//! - [`TallyError`]: what a caller can get wrong, no selection or an
//!   unknown key.
//!
//! ## Usage
//!
//! ```
//! use tasbih::{CounterStore, MemoryGateway, PresentationSync, TallyConfig, TallyEvent};
//!
//! let config = TallyConfig::default_phrases();
//! let mut store = CounterStore::initialize(config, MemoryGateway::new());
//! let mut sync = PresentationSync::new();
//!
//! // First paint: every badge, no primary display yet.
//! let plan = sync.plan(&store.repaint());
//! assert_eq!(plan.badges.len(), 5);
//! assert!(plan.display.is_none());
//!
//! // Tap a phrase, then count it twice.
//! let key = store.keys()[0].clone();
//! store.select(&key)?;
//! store.increment()?;
//! let notice = store.apply(TallyEvent::Increment)?;
//!
//! let plan = sync.plan(&notice);
//! assert_eq!(plan.display.unwrap().value, 2);
//! # Ok::<(), tasbih::TallyError>(())
//! ```
//!
//! ## Design Notes
//!
//! In-memory state is authoritative: every mutation lands in memory
//! first, then a single persistence attempt follows. Write failures are
//! logged and swallowed, so a broken medium costs durability, never a
//! tap. Reads at startup never fail either; missing or unreadable state
//! recovers to all-zero counts with no selection.

pub mod counter;
pub mod error;
pub mod view;

pub use tasbih_core as core;
pub use tasbih_store as store;

pub use tasbih_core::{
    ChangeNotice, CounterKey, CounterSet, Snapshot, TallyConfig, TallyEvent, DEFAULT_PHRASES,
};
pub use tasbih_store::{
    Gateway, GatewayError, GatewayExt, JsonFileGateway, LoadOutcome, MemoryGateway, SqliteGateway,
};

pub use crate::counter::CounterStore;
pub use crate::error::{Result, TallyError};
pub use crate::view::{BadgeUpdate, DisplayUpdate, PresentationSync, RedrawPlan};
