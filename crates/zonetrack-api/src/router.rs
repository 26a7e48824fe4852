//! Axum router construction for the ZoneTrack API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so dashboards on other origins can read the tracking state.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the ZoneTrack server.
///
/// The router includes:
/// - `POST /location` -- ingest one vehicle location sample
/// - `GET /vehicles/{vehicle_id}/status` -- last-known state for one vehicle
/// - `GET /vehicles` -- all vehicle states plus a count
/// - `GET /zones` -- the zone registry in lookup order
/// - `GET /health` -- liveness probe
///
/// CORS is configured to allow any origin for development. In production
/// this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/location", post(handlers::receive_location))
        .route(
            "/vehicles/{vehicle_id}/status",
            get(handlers::vehicle_status),
        )
        .route("/vehicles", get(handlers::list_vehicles))
        .route("/zones", get(handlers::list_zones))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
