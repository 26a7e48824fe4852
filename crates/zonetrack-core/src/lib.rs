//! Core zone-transition detection for the ZoneTrack service.
//!
//! This crate is pure, synchronous, in-memory logic: no I/O, no async, no
//! network. The HTTP layer validates input, hands samples to the
//! [`TransitionEngine`], and serves the derived state back out.
//!
//! # Modules
//!
//! - [`error`] -- Registry construction errors.
//! - [`registry`] -- Ordered, validated zone collection; the iteration order
//!   is the overlap tie-break contract.
//! - [`locator`] -- First-match-wins point-in-zone lookup.
//! - [`store`] -- Last-known state per vehicle (overwrite-on-write).
//! - [`history`] -- Global bounded FIFO window of recent samples.
//! - [`engine`] -- The transition state machine orchestrating one update
//!   per sample.

pub mod engine;
pub mod error;
pub mod history;
pub mod locator;
pub mod registry;
pub mod store;

// Re-export primary types at crate root.
pub use engine::TransitionEngine;
pub use error::RegistryError;
pub use history::{DEFAULT_CAPACITY, HistoryLog};
pub use locator::ZoneLocator;
pub use registry::{ZoneRegistry, default_zones};
pub use store::VehicleStateStore;
