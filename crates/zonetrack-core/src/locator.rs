//! Point-in-zone lookup against the registry.

use std::sync::Arc;

use zonetrack_types::ZoneName;

use crate::registry::ZoneRegistry;

/// Resolves a point to a zone name using first-match-wins semantics.
///
/// Zones are checked in registry order and the first zone whose rectangle
/// contains the point (all edges inclusive) wins. This is an observable
/// behavioral contract for overlapping zones, not an implementation
/// accident: a point inside both zone A and zone B resolves to whichever
/// was registered first.
#[derive(Debug, Clone)]
pub struct ZoneLocator {
    registry: Arc<ZoneRegistry>,
}

impl ZoneLocator {
    /// Create a locator over the given registry.
    pub const fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a point to the first matching zone, or `None` if the point
    /// is outside every registered zone.
    ///
    /// Pure: no side effects, same answer for the same point and registry.
    pub fn locate(&self, latitude: f64, longitude: f64) -> Option<&ZoneName> {
        self.registry
            .zones()
            .iter()
            .find(|zone| zone.bounds.contains(latitude, longitude))
            .map(|zone| &zone.name)
    }

    /// The registry this locator resolves against.
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }
}
