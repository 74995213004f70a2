//! Monitor tuning knobs.

/// Configuration for one [`GeofenceMonitor`][crate::GeofenceMonitor].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Noise tolerance added to the zone radius before a sample classifies
    /// as outside: a subject standing still exactly on the nominal boundary
    /// must not flip state on every sample from receiver jitter alone.
    pub buffer_m: f64,

    /// How long a raw classification must hold (measured on sample capture
    /// timestamps) before it becomes the confirmed state.
    pub debounce_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            buffer_m: 10.0,
            debounce_ms: 250,
        }
    }
}

impl MonitorConfig {
    /// The buffer applied to one evaluation: the configured floor, widened
    /// to the sample's reported accuracy when that is finite and positive.
    #[inline]
    pub(crate) fn effective_buffer_m(&self, accuracy_m: Option<f64>) -> f64 {
        match accuracy_m {
            Some(a) => self.buffer_m.max(a),
            None => self.buffer_m,
        }
    }
}
