//! # Tasbih Store
//!
//! Persistence for the tasbih counter. Provides a trait-based gateway for
//! the two durable values (counts record and last selection) with SQLite,
//! JSON file, and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts persistence behind the [`Gateway`] trait so
//! the counter is storage-agnostic. The primary durable implementation is
//! [`SqliteGateway`]; [`JsonFileGateway`] keeps the state as two plain
//! JSON documents, and [`MemoryGateway`] backs tests.
//!
//! ## Key Types
//!
//! - [`Gateway`] - The synchronous trait for all persistence operations
//! - [`LoadOutcome`] - Classified result of reading the durable state
//! - [`SqliteGateway`] - SQLite-based persistent storage
//! - [`JsonFileGateway`] - Two JSON documents in a directory
//! - [`MemoryGateway`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasbih_store::{Gateway, LoadOutcome, SqliteGateway};
//!
//! let gateway = SqliteGateway::open("tally.db").unwrap();
//!
//! match gateway.load() {
//!     LoadOutcome::Snapshot(snapshot) => println!("recovered {:?}", snapshot),
//!     LoadOutcome::NotFound => println!("first run"),
//!     LoadOutcome::Corrupt(err) => println!("starting over: {}", err),
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Reads never raise**: every failure mode of [`Gateway::load`] is
//!   classified into [`LoadOutcome`]
//! - **Independent values**: saving counts never rewrites the selection,
//!   and vice versa
//! - **Single attempt writes**: a save is one best-effort write with no
//!   retry or queueing
//! - **Opaque records**: gateways store what they are given; counts are
//!   normalized against the configuration above this layer

pub mod error;
pub mod json;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{GatewayError, Result};
pub use json::JsonFileGateway;
pub use memory::MemoryGateway;
pub use sqlite::SqliteGateway;
pub use traits::{Gateway, GatewayExt, LoadOutcome};
