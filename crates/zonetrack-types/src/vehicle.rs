//! Per-vehicle tracking records: incoming samples, last-known state, and
//! history entries.
//!
//! Timestamps are opaque strings throughout. The caller's timestamp (or the
//! server-assigned default minted at the HTTP boundary) is authoritative and
//! is never parsed, compared, or reordered by the core.

use serde::{Deserialize, Serialize};

use crate::ids::{VehicleId, ZoneName};

/// A validated GPS sample for one vehicle.
///
/// By the time a sample is constructed the boundary layer has guaranteed a
/// non-empty `vehicle_id`, latitude in `[-90, 90]`, longitude in
/// `[-180, 180]`, and a resolved timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// The reporting vehicle.
    pub vehicle_id: VehicleId,
    /// Degrees latitude, within `[-90, 90]`.
    pub latitude: f64,
    /// Degrees longitude, within `[-180, 180]`.
    pub longitude: f64,
    /// Caller-supplied or server-assigned timestamp (ISO-8601).
    pub timestamp: String,
}

/// Last-known state for one vehicle.
///
/// One record per vehicle, created on first sighting and overwritten whole
/// on every subsequent sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// The vehicle this record describes.
    pub vehicle_id: VehicleId,
    /// Zone the vehicle was last seen in, if any.
    pub current_zone: Option<ZoneName>,
    /// Latitude of the most recent sample.
    pub last_latitude: f64,
    /// Longitude of the most recent sample.
    pub last_longitude: f64,
    /// Timestamp of the most recent sample.
    pub last_update: String,
}

/// A raw sample with its derived zone, as retained in the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The reporting vehicle.
    pub vehicle_id: VehicleId,
    /// Degrees latitude.
    pub latitude: f64,
    /// Degrees longitude.
    pub longitude: f64,
    /// Timestamp of the sample.
    pub timestamp: String,
    /// Zone the sample resolved to at the time it arrived.
    pub zone: Option<ZoneName>,
}
