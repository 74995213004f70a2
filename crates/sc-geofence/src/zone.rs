//! Circular safe-zone definition.

use sc_core::GeoPoint;

use crate::error::{GeofenceError, GeofenceResult};

/// A circular region a subject is expected to remain within.
///
/// Owned by the pairing's caregiver and editable at any time; the engine
/// treats it as a value that may be swapped between samples.  Construct via
/// [`SafeZone::new`] to get validation; zones arriving through serde or
/// struct literals are re-validated at `set_zone` time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeZone {
    /// Zone center.
    pub center: GeoPoint,

    /// Zone radius in metres.  Must be finite and > 0.
    pub radius_m: f64,

    /// Caregiver-chosen label, e.g. "Home".  `None` displays as "Safe Zone".
    pub name: Option<String>,
}

impl SafeZone {
    /// Create a validated zone.
    ///
    /// # Errors
    ///
    /// `GeofenceError::InvalidZone` if the center is out of range or
    /// non-finite, or the radius is non-finite or ≤ 0.  A zero radius must
    /// never silently become "everything is outside".
    pub fn new(center: GeoPoint, radius_m: f64) -> GeofenceResult<Self> {
        let zone = Self {
            center,
            radius_m,
            name: None,
        };
        zone.validate()?;
        Ok(zone)
    }

    /// Attach a caregiver-facing label.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Re-check the zone's invariants (for zones not built via `new`).
    pub fn validate(&self) -> GeofenceResult<()> {
        if !self.center.is_valid() {
            return Err(GeofenceError::InvalidZone(format!(
                "center {} out of range",
                self.center
            )));
        }
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(GeofenceError::InvalidZone(format!(
                "radius {} m must be finite and positive",
                self.radius_m
            )));
        }
        Ok(())
    }

    /// `true` when `other` covers the same circle (label changes are not
    /// geometry edits and do not disturb a pending transition).
    #[inline]
    pub fn same_geometry(&self, other: &SafeZone) -> bool {
        self.center == other.center && self.radius_m == other.radius_m
    }

    /// Display label: the caregiver's name for the zone, or "Safe Zone".
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Safe Zone")
    }
}

impl std::fmt::Display for SafeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} r={:.0}m", self.label(), self.center, self.radius_m)
    }
}
