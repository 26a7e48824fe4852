//! Ordered collection of named zones.
//!
//! The registry owns the zone definitions and, crucially, their order:
//! iteration order is the tie-break contract for overlapping zones (the
//! first matching zone wins in [`ZoneLocator`]). The order is whatever the
//! configuration supplied, or the documented built-in order for the default
//! set.
//!
//! [`ZoneLocator`]: crate::locator::ZoneLocator

use std::collections::BTreeSet;

use zonetrack_types::{Zone, ZoneName};

use crate::error::RegistryError;

/// The default zone set used when no configuration supplies zones.
///
/// Order matters and is part of the contract: downtown, airport, suburbs.
pub fn default_zones() -> Vec<Zone> {
    vec![
        Zone::new("downtown", 40.70, 40.75, -74.00, -73.98),
        Zone::new("airport", 40.63, 40.65, -73.78, -73.76),
        Zone::new("suburbs", 40.80, 40.85, -73.90, -73.85),
    ]
}

/// An ordered, validated set of named rectangular zones.
///
/// Immutable after construction. Zones are matched in the order they were
/// registered; [`zones`](Self::zones) exposes that order to callers.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    /// Zones in registration order.
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    /// Build a registry from an ordered list of zones.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidBounds`] if any zone's rectangle has
    /// `min > max` on either axis, or [`RegistryError::DuplicateZone`] if
    /// two zones share a name.
    pub fn from_zones(zones: Vec<Zone>) -> Result<Self, RegistryError> {
        {
            let mut seen: BTreeSet<&ZoneName> = BTreeSet::new();
            for zone in &zones {
                if !zone.bounds.is_valid() {
                    return Err(RegistryError::InvalidBounds(zone.name.clone()));
                }
                if !seen.insert(&zone.name) {
                    return Err(RegistryError::DuplicateZone(zone.name.clone()));
                }
            }
        }
        Ok(Self { zones })
    }

    /// Build a registry holding the built-in default zone set.
    pub fn with_defaults() -> Self {
        // The defaults are known-valid, so no validation pass is needed.
        Self {
            zones: default_zones(),
        }
    }

    /// All zones, in the order used for first-match-wins lookups.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the registry holds no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_three_zones_in_documented_order() {
        let registry = ZoneRegistry::with_defaults();
        let names: Vec<&str> = registry.zones().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["downtown", "airport", "suburbs"]);
    }

    #[test]
    fn from_zones_preserves_order() {
        let zones = vec![
            Zone::new("b", 0.0, 1.0, 0.0, 1.0),
            Zone::new("a", 0.0, 1.0, 0.0, 1.0),
        ];
        let registry = ZoneRegistry::from_zones(zones);
        assert!(registry.is_ok());
        if let Ok(r) = registry {
            assert_eq!(r.zones()[0].name.as_str(), "b");
            assert_eq!(r.len(), 2);
        }
    }

    #[test]
    fn invalid_bounds_rejected() {
        let zones = vec![Zone::new("flipped", 1.0, 0.0, 0.0, 1.0)];
        let result = ZoneRegistry::from_zones(zones);
        assert!(matches!(result, Err(RegistryError::InvalidBounds(_))));
    }

    #[test]
    fn duplicate_name_rejected() {
        let zones = vec![
            Zone::new("dup", 0.0, 1.0, 0.0, 1.0),
            Zone::new("dup", 2.0, 3.0, 2.0, 3.0),
        ];
        let result = ZoneRegistry::from_zones(zones);
        assert!(matches!(result, Err(RegistryError::DuplicateZone(_))));
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = ZoneRegistry::from_zones(Vec::new());
        assert!(registry.is_ok());
        if let Ok(r) = registry {
            assert!(r.is_empty());
        }
    }
}
