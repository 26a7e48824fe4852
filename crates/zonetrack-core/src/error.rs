//! Error types for the `zonetrack-core` crate.
//!
//! The only fallible operation in this crate is zone registry construction;
//! everything downstream of a valid registry is infallible by design.

use zonetrack_types::ZoneName;

/// Errors that can occur while building a zone registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A zone's rectangle violates `min <= max` on one of its axes.
    #[error("zone {0} has invalid bounds (min > max)")]
    InvalidBounds(ZoneName),

    /// Two zones share the same name.
    #[error("duplicate zone name: {0}")]
    DuplicateZone(ZoneName),
}
