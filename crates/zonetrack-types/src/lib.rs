//! Shared type definitions for the ZoneTrack vehicle tracking service.
//!
//! This crate is the single source of truth for the data model shared by the
//! core engine, the HTTP layer, and the server binary.
//!
//! # Modules
//!
//! - [`ids`] -- String newtypes for vehicle identifiers and zone names
//! - [`zone`] -- Zone geometry (named inclusive rectangles)
//! - [`vehicle`] -- Location samples, per-vehicle state, history entries
//! - [`event`] -- Classified transition events

pub mod event;
pub mod ids;
pub mod vehicle;
pub mod zone;

// Re-export all public types at crate root for convenience.
pub use event::{TransitionEvent, TransitionKind};
pub use ids::{VehicleId, ZoneName};
pub use vehicle::{HistoryEntry, LocationSample, VehicleState};
pub use zone::{Zone, ZoneBounds};
