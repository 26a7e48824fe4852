//! REST endpoint handlers for the ZoneTrack API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/location` | Ingest one vehicle location sample |
//! | `GET` | `/vehicles/{vehicle_id}/status` | Last-known state for one vehicle |
//! | `GET` | `/vehicles` | All vehicle states plus a count |
//! | `GET` | `/zones` | The zone registry, in lookup order |
//! | `GET` | `/health` | Liveness probe |
//!
//! `POST /location` validates against a raw JSON value rather than a typed
//! payload struct so the error responses can distinguish a missing field
//! (checked field by field, in order) from a present field of the wrong
//! type, and so numeric strings are accepted for coordinates.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use zonetrack_types::{LocationSample, VehicleId, VehicleState};

use crate::error::ApiError;
use crate::state::AppState;

/// Current UTC time in ISO-8601 format, used wherever the server mints a
/// timestamp.
fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Check that every required field is present (and not JSON null), in the
/// documented order. Presence is checked for all fields before any type
/// coercion so a missing field is always reported as missing, whatever else
/// is wrong with the body.
fn check_required_fields(payload: &Value) -> Result<(), ApiError> {
    for field in ["vehicle_id", "latitude", "longitude"] {
        match payload.get(field) {
            None | Some(Value::Null) => return Err(ApiError::MissingField(field.to_string())),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Coerce a coordinate field to a float.
///
/// The value must be a JSON number or a numeric string; anything else is a
/// format error. The range check happens separately so out-of-range numbers
/// get their own message.
fn coordinate_field(payload: &Value, field: &str) -> Result<f64, ApiError> {
    let value = payload.get(field).ok_or(ApiError::InvalidFormat)?;
    if let Some(number) = value.as_f64() {
        return Ok(number);
    }
    value
        .as_str()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or(ApiError::InvalidFormat)
}

/// Extract the `vehicle_id` field, which must be a non-empty string.
fn vehicle_id_field(payload: &Value) -> Result<VehicleId, ApiError> {
    let id = payload
        .get("vehicle_id")
        .and_then(Value::as_str)
        .ok_or(ApiError::InvalidFormat)?;
    if id.is_empty() {
        return Err(ApiError::MissingField(String::from("vehicle_id")));
    }
    Ok(VehicleId::from(id))
}

/// Extract the optional `timestamp` field, minting a server-side UTC
/// timestamp when absent.
fn timestamp_field(payload: &Value) -> Result<String, ApiError> {
    match payload.get("timestamp") {
        None | Some(Value::Null) => Ok(current_timestamp()),
        Some(Value::String(ts)) => Ok(ts.clone()),
        Some(_) => Err(ApiError::InvalidFormat),
    }
}

// ---------------------------------------------------------------------------
// POST /location -- ingest one sample
// ---------------------------------------------------------------------------

/// Validate one location update and run it through the transition engine.
///
/// Validation order: field presence (`vehicle_id`, `latitude`, `longitude`,
/// in that order), then type coercion, then the coordinate range check.
/// On success the response body is the classified transition event.
pub async fn receive_location(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = body.map_err(|_| ApiError::InvalidFormat)?;

    check_required_fields(&payload)?;
    let vehicle_id = vehicle_id_field(&payload)?;
    let latitude = coordinate_field(&payload, "latitude")?;
    let longitude = coordinate_field(&payload, "longitude")?;

    if !((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)) {
        return Err(ApiError::InvalidCoordinates);
    }

    let timestamp = timestamp_field(&payload)?;

    let sample = LocationSample {
        vehicle_id,
        latitude,
        longitude,
        timestamp,
    };

    // Write lock held across the whole update: lookup, classification,
    // state overwrite, and history append happen atomically per request.
    let mut engine = state.engine.write().await;
    let event = engine.process(sample);

    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// GET /vehicles/{vehicle_id}/status -- single vehicle
// ---------------------------------------------------------------------------

/// Return the last-known zone and location for one vehicle.
pub async fn vehicle_status(
    State(state): State<Arc<AppState>>,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let engine = state.engine.read().await;

    let status = engine
        .vehicle(&VehicleId::from(vehicle_id))
        .ok_or(ApiError::VehicleNotFound)?;

    Ok(Json(serde_json::json!({
        "vehicle_id": status.vehicle_id,
        "current_zone": status.current_zone,
        "last_location": {
            "latitude": status.last_latitude,
            "longitude": status.last_longitude,
        },
        "last_update": status.last_update,
    })))
}

// ---------------------------------------------------------------------------
// GET /vehicles -- all vehicles
// ---------------------------------------------------------------------------

/// List the last-known state of every vehicle that has ever reported.
pub async fn list_vehicles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine.read().await;

    let vehicles: Vec<&VehicleState> = engine.vehicles().collect();

    Json(serde_json::json!({
        "vehicles": vehicles,
        "total_vehicles": engine.vehicle_count(),
    }))
}

// ---------------------------------------------------------------------------
// GET /zones -- zone registry
// ---------------------------------------------------------------------------

/// List the registered zones in their documented lookup order.
pub async fn list_zones(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine.read().await;

    Json(serde_json::json!({
        "zones": engine.zones(),
    }))
}

// ---------------------------------------------------------------------------
// GET /health -- liveness probe
// ---------------------------------------------------------------------------

/// Liveness probe reporting the current UTC time.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": current_timestamp(),
    }))
}
