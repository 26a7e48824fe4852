//! Shared application state for the HTTP server.

use std::sync::Arc;

use tokio::sync::RwLock;
use zonetrack_core::TransitionEngine;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The engine
/// sits behind a read-write lock: `POST /location` takes the write lock for
/// the whole lookup-classify-overwrite-append sequence, which makes each
/// update atomic relative to concurrent samples (including samples for the
/// same vehicle) and keeps the history append-and-evict atomic as a whole.
/// Read endpoints take the read lock and never block each other.
pub struct AppState {
    /// The transition engine holding all per-vehicle state and history.
    pub engine: Arc<RwLock<TransitionEngine>>,
}

impl AppState {
    /// Wrap an engine for sharing across request tasks.
    pub fn new(engine: TransitionEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}
