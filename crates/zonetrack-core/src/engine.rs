//! The zone-transition detection state machine.
//!
//! [`TransitionEngine::process`] is the single entry point for a sample:
//! resolve the point to a zone, classify the transition against the
//! vehicle's previously recorded zone, overwrite the vehicle's state,
//! append to the history window, and return the classified event.
//!
//! Per-vehicle state is a single variable over `Option<ZoneName>`; the
//! event kind is a pure function of (old zone, new zone). The last
//! latitude/longitude/timestamp are observational and play no part in
//! classification, which is why reapplying an identical sample is
//! idempotent in effect: the second application classifies as
//! `location_update` and leaves identical state behind.

use std::sync::Arc;

use tracing::info;
use zonetrack_types::{
    HistoryEntry, LocationSample, TransitionEvent, TransitionKind, VehicleId, VehicleState, Zone,
    ZoneName,
};

use crate::history::HistoryLog;
use crate::locator::ZoneLocator;
use crate::registry::ZoneRegistry;
use crate::store::VehicleStateStore;

/// Classify a transition from `previous` to `current` zone membership.
///
/// Returns the event kind together with the entered/exited zone names where
/// applicable. The four cases are exhaustive and mutually exclusive over the
/// optional encoding; "no zone" is always `None`, never a sentinel.
fn classify(
    previous: Option<&ZoneName>,
    current: Option<&ZoneName>,
) -> (TransitionKind, Option<ZoneName>, Option<ZoneName>) {
    match (previous, current) {
        (None, None) => (TransitionKind::LocationUpdate, None, None),
        (Some(p), Some(c)) if p == c => (TransitionKind::LocationUpdate, None, None),
        (None, Some(c)) => (TransitionKind::ZoneEntered, Some(c.clone()), None),
        (Some(p), None) => (TransitionKind::ZoneExited, None, Some(p.clone())),
        (Some(p), Some(c)) => (TransitionKind::ZoneChanged, Some(c.clone()), Some(p.clone())),
    }
}

/// Orchestrates one update per incoming sample.
///
/// Owns the locator, the vehicle state store, and the history window. The
/// engine performs no I/O and raises no errors: input is validated before it
/// reaches this component, and every operation here is a bounded in-memory
/// mutation. Callers that share an engine across tasks must serialize
/// [`process`](Self::process) calls (the HTTP layer holds the engine behind
/// a write lock for the full update).
#[derive(Debug)]
pub struct TransitionEngine {
    locator: ZoneLocator,
    store: VehicleStateStore,
    history: HistoryLog,
}

impl TransitionEngine {
    /// Create an engine over the given registry with the default history
    /// capacity.
    pub const fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self {
            locator: ZoneLocator::new(registry),
            store: VehicleStateStore::new(),
            history: HistoryLog::new(),
        }
    }

    /// Create an engine with an explicit history capacity.
    pub const fn with_history_capacity(registry: Arc<ZoneRegistry>, capacity: usize) -> Self {
        Self {
            locator: ZoneLocator::new(registry),
            store: VehicleStateStore::new(),
            history: HistoryLog::with_capacity(capacity),
        }
    }

    /// Process one validated sample and return the classified event.
    ///
    /// Steps, in order: locate the point, read the previous zone (absent
    /// vehicle means "never seen", i.e. no zone), classify, overwrite the
    /// vehicle's state, append to history (evicting if over capacity).
    pub fn process(&mut self, sample: LocationSample) -> TransitionEvent {
        let current_zone = self
            .locator
            .locate(sample.latitude, sample.longitude)
            .cloned();
        let previous_zone = self
            .store
            .get(&sample.vehicle_id)
            .and_then(|state| state.current_zone.clone());

        let (event_type, zone_entered, zone_exited) =
            classify(previous_zone.as_ref(), current_zone.as_ref());

        match event_type {
            TransitionKind::ZoneEntered => {
                if let Some(zone) = &zone_entered {
                    info!(vehicle = %sample.vehicle_id, zone = %zone, "vehicle entered zone");
                }
            }
            TransitionKind::ZoneExited => {
                if let Some(zone) = &zone_exited {
                    info!(vehicle = %sample.vehicle_id, zone = %zone, "vehicle exited zone");
                }
            }
            TransitionKind::ZoneChanged => {
                if let (Some(from), Some(to)) = (&zone_exited, &zone_entered) {
                    info!(vehicle = %sample.vehicle_id, from = %from, to = %to, "vehicle changed zone");
                }
            }
            TransitionKind::LocationUpdate => {}
        }

        self.store.put(VehicleState {
            vehicle_id: sample.vehicle_id.clone(),
            current_zone: current_zone.clone(),
            last_latitude: sample.latitude,
            last_longitude: sample.longitude,
            last_update: sample.timestamp.clone(),
        });

        self.history.append(HistoryEntry {
            vehicle_id: sample.vehicle_id.clone(),
            latitude: sample.latitude,
            longitude: sample.longitude,
            timestamp: sample.timestamp.clone(),
            zone: current_zone.clone(),
        });

        TransitionEvent {
            vehicle_id: sample.vehicle_id,
            timestamp: sample.timestamp,
            current_zone,
            event_type,
            zone_entered,
            zone_exited,
        }
    }

    /// Last-known state for one vehicle, if it has ever reported.
    pub fn vehicle(&self, vehicle_id: &VehicleId) -> Option<&VehicleState> {
        self.store.get(vehicle_id)
    }

    /// Iterate over the last-known state of every vehicle.
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleState> {
        self.store.all()
    }

    /// Number of vehicles ever seen.
    pub fn vehicle_count(&self) -> usize {
        self.store.len()
    }

    /// The registered zones, in lookup order.
    pub fn zones(&self) -> &[Zone] {
        self.locator.registry().zones()
    }

    /// The history window.
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TransitionEngine {
        TransitionEngine::new(Arc::new(ZoneRegistry::with_defaults()))
    }

    fn sample(id: &str, lat: f64, lng: f64, ts: &str) -> LocationSample {
        LocationSample {
            vehicle_id: VehicleId::from(id),
            latitude: lat,
            longitude: lng,
            timestamp: ts.to_string(),
        }
    }

    #[test]
    fn first_sighting_inside_zone_is_entered() {
        let mut engine = engine();
        let event = engine.process(sample("v1", 40.72, -73.99, "t1"));
        assert_eq!(event.event_type, TransitionKind::ZoneEntered);
        assert_eq!(event.current_zone.as_ref().map(ZoneName::as_str), Some("downtown"));
        assert_eq!(event.zone_entered.as_ref().map(ZoneName::as_str), Some("downtown"));
        assert_eq!(event.zone_exited, None);
    }

    #[test]
    fn first_sighting_outside_zones_is_plain_update() {
        let mut engine = engine();
        let event = engine.process(sample("v1", 40.0, -73.0, "t1"));
        assert_eq!(event.event_type, TransitionKind::LocationUpdate);
        assert_eq!(event.current_zone, None);
        assert_eq!(event.zone_entered, None);
        assert_eq!(event.zone_exited, None);
    }

    #[test]
    fn leaving_a_zone_is_exited() {
        let mut engine = engine();
        engine.process(sample("v1", 40.72, -73.99, "t1"));
        let event = engine.process(sample("v1", 40.0, -73.0, "t2"));
        assert_eq!(event.event_type, TransitionKind::ZoneExited);
        assert_eq!(event.current_zone, None);
        assert_eq!(event.zone_exited.as_ref().map(ZoneName::as_str), Some("downtown"));
        assert_eq!(event.zone_entered, None);
    }

    #[test]
    fn moving_between_zones_is_changed() {
        let mut engine = engine();
        engine.process(sample("v1", 40.72, -73.99, "t1"));
        let event = engine.process(sample("v1", 40.64, -73.77, "t2"));
        assert_eq!(event.event_type, TransitionKind::ZoneChanged);
        assert_eq!(event.zone_exited.as_ref().map(ZoneName::as_str), Some("downtown"));
        assert_eq!(event.zone_entered.as_ref().map(ZoneName::as_str), Some("airport"));
        assert_eq!(event.current_zone.as_ref().map(ZoneName::as_str), Some("airport"));
    }

    #[test]
    fn staying_in_the_same_zone_is_plain_update() {
        let mut engine = engine();
        engine.process(sample("v1", 40.72, -73.99, "t1"));
        let event = engine.process(sample("v1", 40.73, -73.99, "t2"));
        assert_eq!(event.event_type, TransitionKind::LocationUpdate);
        assert_eq!(event.zone_entered, None);
        assert_eq!(event.zone_exited, None);
    }

    #[test]
    fn reapplying_a_sample_is_idempotent_in_effect() {
        let mut engine = engine();
        let first = engine.process(sample("v1", 40.72, -73.99, "t1"));
        assert_eq!(first.event_type, TransitionKind::ZoneEntered);

        let state_after_first = engine.vehicle(&VehicleId::from("v1")).cloned();
        let second = engine.process(sample("v1", 40.72, -73.99, "t1"));
        assert_eq!(second.event_type, TransitionKind::LocationUpdate);
        assert_eq!(engine.vehicle(&VehicleId::from("v1")).cloned(), state_after_first);
    }

    #[test]
    fn state_and_history_updated_per_sample() {
        let mut engine = engine();
        engine.process(sample("v1", 40.72, -73.99, "t1"));
        engine.process(sample("v2", 40.0, -73.0, "t2"));

        assert_eq!(engine.vehicle_count(), 2);
        assert_eq!(engine.history().len(), 2);

        let state = engine.vehicle(&VehicleId::from("v1"));
        assert_eq!(
            state.and_then(|s| s.current_zone.as_ref()).map(ZoneName::as_str),
            Some("downtown")
        );
        let entry = engine.history().iter().next();
        assert_eq!(
            entry.and_then(|e| e.zone.as_ref()).map(ZoneName::as_str),
            Some("downtown")
        );
    }

    #[test]
    fn independent_vehicles_do_not_interact() {
        let mut engine = engine();
        engine.process(sample("v1", 40.72, -73.99, "t1"));
        // v2's first sighting outside any zone is a plain update even though
        // v1 is currently in downtown.
        let event = engine.process(sample("v2", 40.0, -73.0, "t2"));
        assert_eq!(event.event_type, TransitionKind::LocationUpdate);
    }

    #[test]
    fn classify_covers_all_four_cases() {
        let a = ZoneName::from("a");
        let b = ZoneName::from("b");

        assert_eq!(classify(None, None).0, TransitionKind::LocationUpdate);
        assert_eq!(classify(Some(&a), Some(&a)).0, TransitionKind::LocationUpdate);
        assert_eq!(classify(None, Some(&a)).0, TransitionKind::ZoneEntered);
        assert_eq!(classify(Some(&a), None).0, TransitionKind::ZoneExited);

        let (kind, entered, exited) = classify(Some(&a), Some(&b));
        assert_eq!(kind, TransitionKind::ZoneChanged);
        assert_eq!(entered, Some(b));
        assert_eq!(exited, Some(a));
    }
}
