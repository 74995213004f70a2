//! One reading from the location source.

use sc_core::{GeoPoint, Millis};

/// A single position update pushed by the location source.
///
/// Cadence is arbitrary and variable; samples carry capture time, not
/// receive time, and are never persisted by the engine.  Two samples may
/// legitimately share a timestamp (a resent position) — they are processed
/// in arrival order, never deduplicated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSample {
    /// Reported coordinate.
    pub point: GeoPoint,

    /// Receiver-estimated accuracy in metres, if the platform reports one.
    /// May be absent or degenerate; see [`PositionSample::accuracy`].
    pub accuracy_m: Option<f64>,

    /// Monotonic capture timestamp.
    pub captured_at: Millis,
}

impl PositionSample {
    pub fn new(point: GeoPoint, captured_at: Millis) -> Self {
        Self {
            point,
            accuracy_m: None,
            captured_at,
        }
    }

    /// Attach a reported accuracy.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// The reported accuracy, filtered to usable values.
    ///
    /// Non-finite or non-positive accuracy is ignored for buffer purposes
    /// only — a bad accuracy reading never suppresses classification of the
    /// sample itself.
    #[inline]
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy_m.filter(|a| a.is_finite() && *a > 0.0)
    }
}
