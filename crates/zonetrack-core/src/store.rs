//! Last-known state per vehicle.

use std::collections::BTreeMap;

use zonetrack_types::{VehicleId, VehicleState};

/// Mapping from vehicle identifier to its last-known state.
///
/// At most one entry per vehicle. Entries are created on first sighting,
/// overwritten whole on every subsequent sample, and never deleted. Absence
/// means "never seen before" and is an ordinary `None`, not an error.
///
/// The store itself is not synchronized; the engine that owns it is placed
/// behind a lock by the serving layer.
#[derive(Debug, Clone, Default)]
pub struct VehicleStateStore {
    vehicles: BTreeMap<VehicleId, VehicleState>,
}

impl VehicleStateStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            vehicles: BTreeMap::new(),
        }
    }

    /// Look up a vehicle's last-known state.
    pub fn get(&self, vehicle_id: &VehicleId) -> Option<&VehicleState> {
        self.vehicles.get(vehicle_id)
    }

    /// Insert or overwrite the state for a vehicle.
    ///
    /// Unconditional overwrite: last writer wins, no merging.
    pub fn put(&mut self, state: VehicleState) {
        self.vehicles.insert(state.vehicle_id.clone(), state);
    }

    /// Iterate over all vehicle states.
    pub fn all(&self) -> impl Iterator<Item = &VehicleState> {
        self.vehicles.values()
    }

    /// Number of vehicles ever seen.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether no vehicle has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: &str, zone: Option<&str>, lat: f64) -> VehicleState {
        VehicleState {
            vehicle_id: VehicleId::from(id),
            current_zone: zone.map(zonetrack_types::ZoneName::from),
            last_latitude: lat,
            last_longitude: -73.99,
            last_update: String::from("2023-10-01T12:00:00Z"),
        }
    }

    #[test]
    fn absent_vehicle_is_none() {
        let store = VehicleStateStore::new();
        assert!(store.get(&VehicleId::from("ghost")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn put_then_get_round_trip() {
        let mut store = VehicleStateStore::new();
        store.put(state("v1", Some("downtown"), 40.72));
        let found = store.get(&VehicleId::from("v1"));
        assert!(found.is_some());
        assert_eq!(
            found.and_then(|s| s.current_zone.as_ref()).map(|z| z.as_str()),
            Some("downtown")
        );
    }

    #[test]
    fn put_overwrites_whole_record() {
        let mut store = VehicleStateStore::new();
        store.put(state("v1", Some("downtown"), 40.72));
        store.put(state("v1", None, 40.0));
        assert_eq!(store.len(), 1);
        let found = store.get(&VehicleId::from("v1"));
        assert_eq!(found.and_then(|s| s.current_zone.clone()), None);
        assert_eq!(found.map(|s| s.last_latitude), Some(40.0));
    }

    #[test]
    fn all_lists_every_vehicle() {
        let mut store = VehicleStateStore::new();
        store.put(state("v1", None, 40.0));
        store.put(state("v2", Some("airport"), 40.64));
        assert_eq!(store.all().count(), 2);
        assert_eq!(store.len(), 2);
    }
}
