//! Classified transition events returned to the caller per sample.

use serde::{Deserialize, Serialize};

use crate::ids::{VehicleId, ZoneName};

/// The four possible zone-membership classifications for one sample.
///
/// The classification is a pure function of the previous and current zone:
///
/// | previous | current | kind |
/// |----------|---------|------|
/// | equal (incl. both none) | | `LocationUpdate` |
/// | none | some | `ZoneEntered` |
/// | some | none | `ZoneExited` |
/// | some A | some B, A != B | `ZoneChanged` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// No membership change; position refreshed.
    LocationUpdate,
    /// The vehicle entered a zone from unzoned space.
    ZoneEntered,
    /// The vehicle left its zone into unzoned space.
    ZoneExited,
    /// The vehicle moved directly from one zone to another.
    ZoneChanged,
}

/// The engine's output for one processed sample.
///
/// A derived value returned to the caller, not stored anywhere. The
/// `zone_entered`/`zone_exited` fields are present only when the event kind
/// makes them meaningful and are omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// The reporting vehicle.
    pub vehicle_id: VehicleId,
    /// Timestamp of the sample that produced this event.
    pub timestamp: String,
    /// Zone the vehicle is now in, if any.
    pub current_zone: Option<ZoneName>,
    /// Classification of the transition.
    pub event_type: TransitionKind,
    /// Zone entered, for `zone_entered` and `zone_changed` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_entered: Option<ZoneName>,
    /// Zone exited, for `zone_exited` and `zone_changed` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_exited: Option<ZoneName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransitionKind::ZoneEntered).ok(),
            Some(String::from("\"zone_entered\""))
        );
        assert_eq!(
            serde_json::to_string(&TransitionKind::LocationUpdate).ok(),
            Some(String::from("\"location_update\""))
        );
    }

    #[test]
    fn absent_zone_fields_are_omitted() {
        let event = TransitionEvent {
            vehicle_id: VehicleId::from("v1"),
            timestamp: String::from("2023-10-01T12:00:00Z"),
            current_zone: Some(ZoneName::from("downtown")),
            event_type: TransitionKind::LocationUpdate,
            zone_entered: None,
            zone_exited: None,
        };
        let json = serde_json::to_value(&event).unwrap_or_default();
        assert!(json.get("zone_entered").is_none());
        assert!(json.get("zone_exited").is_none());
        assert_eq!(json["event_type"], "location_update");
        assert_eq!(json["current_zone"], "downtown");
    }
}
