//! HTTP layer for the ZoneTrack vehicle tracking service.
//!
//! This crate owns everything between the network and the core engine:
//! request validation (field presence, coordinate ranges, numeric
//! coercion), the timestamp default, error-to-response mapping with the
//! exact wire-contract bodies, and the server lifecycle.
//!
//! # Architecture
//!
//! Handlers share one [`TransitionEngine`](zonetrack_core::TransitionEngine)
//! behind a read-write lock in [`AppState`]. Ingest requests take the write
//! lock for the full update so each sample's read-modify-write is atomic;
//! read endpoints take the read lock. The core never sees an invalid
//! sample: every validation error is produced here, before the engine is
//! invoked.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
