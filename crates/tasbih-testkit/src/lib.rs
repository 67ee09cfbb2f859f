//! # Tasbih Testkit
//!
//! Testing utilities for the tasbih counter engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Snapshot vectors**: Raw persisted documents paired with the state a session must recover
//! - **Generators**: Proptest strategies for configurations, stored snapshots, and event streams
//! - **Fixtures**: A ready-made session over an instrumented in-memory gateway
//! - **Probe gateway**: A wrapper that counts persistence calls and injects failures
//!
//! ## Snapshot Vectors
//!
//! Snapshot vectors pin the persisted document formats and the recovery
//! rules:
//!
//! ```rust
//! use tasbih_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     println!("{}: {} configured keys", vector.name, vector.keys.len());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tasbih_testkit::generators::{store_from_params, SessionParams};
//!
//! proptest! {
//!     #[test]
//!     fn recovery_is_idempotent(params: SessionParams) {
//!         let s1 = store_from_params(&params);
//!         let s2 = store_from_params(&params);
//!         prop_assert_eq!(s1.selection(), s2.selection());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up a session and watch its persistence traffic:
//!
//! ```rust
//! use tasbih_testkit::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.select("سبحان الله");
//! assert_eq!(fixture.tap(3), 3);
//! assert_eq!(fixture.gateway.count_saves(), 3);
//! ```

pub mod fixtures;
pub mod gateways;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded_fixture, TestFixture};
pub use gateways::ProbeGateway;
pub use generators::{store_from_params, SessionParams};
pub use vectors::{all_vectors, counts_document, seed_into, SnapshotVector};
