//! Zone geometry: named axis-aligned rectangles in latitude/longitude space.

use serde::{Deserialize, Serialize};

use crate::ids::ZoneName;

/// Rectangular bounds of a zone, inclusive on all four edges.
///
/// Invariant: `min_lat <= max_lat` and `min_lng <= max_lng`. The bounds are
/// not validated here; the registry rejects invalid rectangles at
/// construction time so every [`ZoneBounds`] it hands out satisfies the
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    /// Southern edge (degrees latitude).
    pub min_lat: f64,
    /// Northern edge (degrees latitude).
    pub max_lat: f64,
    /// Western edge (degrees longitude).
    pub min_lng: f64,
    /// Eastern edge (degrees longitude).
    pub max_lng: f64,
}

impl ZoneBounds {
    /// Check whether a point lies inside the rectangle.
    ///
    /// All four edges are inclusive: a point exactly on a boundary is
    /// inside the zone.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.min_lat <= latitude
            && latitude <= self.max_lat
            && self.min_lng <= longitude
            && longitude <= self.max_lng
    }

    /// Check the `min <= max` invariant on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lng <= self.max_lng
    }
}

/// A named rectangular geographic region.
///
/// Serializes flat (`{"name": ..., "min_lat": ..., ...}`) so the same shape
/// works for the configuration file and the `GET /zones` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique zone name.
    pub name: ZoneName,
    /// Inclusive rectangular bounds.
    #[serde(flatten)]
    pub bounds: ZoneBounds,
}

impl Zone {
    /// Convenience constructor for a zone from its name and edge coordinates.
    pub fn new(name: impl Into<ZoneName>, min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            name: name.into(),
            bounds: ZoneBounds {
                min_lat,
                max_lat,
                min_lng,
                max_lng,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_all_edges() {
        let bounds = ZoneBounds {
            min_lat: 40.70,
            max_lat: 40.75,
            min_lng: -74.00,
            max_lng: -73.98,
        };
        assert!(bounds.contains(40.70, -74.00));
        assert!(bounds.contains(40.75, -73.98));
        assert!(bounds.contains(40.72, -73.99));
        assert!(!bounds.contains(40.69, -73.99));
        assert!(!bounds.contains(40.72, -73.97));
    }

    #[test]
    fn invalid_bounds_detected() {
        let flipped = ZoneBounds {
            min_lat: 40.75,
            max_lat: 40.70,
            min_lng: -74.00,
            max_lng: -73.98,
        };
        assert!(!flipped.is_valid());
    }

    #[test]
    fn zone_serializes_flat() {
        let zone = Zone::new("downtown", 40.70, 40.75, -74.00, -73.98);
        let json = serde_json::to_value(&zone).unwrap_or_default();
        assert_eq!(json["name"], "downtown");
        assert_eq!(json["min_lat"], 40.70);
        assert_eq!(json["max_lng"], -73.98);
    }
}
