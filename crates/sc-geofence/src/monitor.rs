//! Per-subject geofence confirmation state machine.

use tracing::{debug, trace};

use sc_core::Millis;

use crate::config::MonitorConfig;
use crate::error::GeofenceResult;
use crate::event::{Transition, TransitionEvent};
use crate::sample::PositionSample;
use crate::zone::SafeZone;

/// Externally visible phase of a monitor, derived from its internal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MonitorPhase {
    /// No sample has been classified yet (or the zone was cleared).
    Uninitialized,
    /// Confirmed inside the zone.
    ConfirmedInside,
    /// Confirmed outside the zone.
    ConfirmedOutside,
    /// Confirmed outside, with an unconfirmed inside reading pending.
    PendingInside,
    /// Confirmed inside, with an unconfirmed outside reading pending.
    PendingOutside,
}

/// An unconfirmed classification flip, awaiting the debounce window.
///
/// At most one exists per monitor: a newer sample in the same direction
/// refreshes it (last-sample-wins), a reverting sample cancels it, a zone
/// geometry edit discards it.
#[derive(Debug, Clone)]
struct Pending {
    /// Raw classification being debounced (`true` = outside).
    outside: bool,
    /// Capture time of the sample that opened the window.
    since: Millis,
    /// Most recent sample classifying in this direction.
    last: PositionSample,
    /// Distance of `last` to the zone center, metres.
    distance_m: f64,
}

/// Converts one subject's noisy sample stream plus a possibly-changing
/// circular zone into a clean sequence of confirmed enter/exit events.
///
/// Single-threaded: each sample is a discrete, non-overlapping unit of
/// work.  The monitor never reads a clock — confirmation is driven by
/// sample capture timestamps ([`observe`][Self::observe]) or by a host-
/// supplied `now` ([`poll`][Self::poll]) when the stream goes quiet.
#[derive(Debug, Clone)]
pub struct GeofenceMonitor {
    config: MonitorConfig,
    zone: Option<SafeZone>,
    /// Confirmed membership (`true` = outside).  `None` until the first
    /// valid sample under a zone seeds the baseline.
    confirmed_outside: Option<bool>,
    pending: Option<Pending>,
    samples_skipped: u64,
}

impl GeofenceMonitor {
    /// Create a monitor with no zone defined.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            zone: None,
            confirmed_outside: None,
            pending: None,
            samples_skipped: 0,
        }
    }

    /// The currently configured zone, if any.
    #[inline]
    pub fn zone(&self) -> Option<&SafeZone> {
        self.zone.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Count of samples skipped for invalid coordinates.
    #[inline]
    pub fn samples_skipped(&self) -> u64 {
        self.samples_skipped
    }

    /// Current phase of the confirmation state machine.
    pub fn phase(&self) -> MonitorPhase {
        match (self.confirmed_outside, &self.pending) {
            (None, _) => MonitorPhase::Uninitialized,
            (Some(_), Some(p)) if p.outside => MonitorPhase::PendingOutside,
            (Some(_), Some(_)) => MonitorPhase::PendingInside,
            (Some(true), None) => MonitorPhase::ConfirmedOutside,
            (Some(false), None) => MonitorPhase::ConfirmedInside,
        }
    }

    /// Install or replace the zone.
    ///
    /// An invalid zone is rejected and the previous zone *and* state are
    /// left untouched.  An accepted geometry change discards any pending
    /// transition (it was computed against the old circle and must not
    /// validate against the new one) but keeps confirmed membership — only
    /// a subsequent sample evaluation can emit.  A zone appearing after
    /// none resets confirmed membership so the next sample re-seeds the
    /// baseline without an event.
    pub fn set_zone(&mut self, zone: SafeZone) -> GeofenceResult<()> {
        zone.validate()?;
        match &self.zone {
            None => {
                self.confirmed_outside = None;
                self.pending = None;
            }
            Some(current) if !current.same_geometry(&zone) => {
                if self.pending.take().is_some() {
                    trace!(zone = %zone, "zone edit discarded pending transition");
                }
            }
            Some(_) => {} // label-only change
        }
        self.zone = Some(zone);
        Ok(())
    }

    /// Remove the zone and reset state wholesale.
    ///
    /// Classification stops; when a zone later appears the first sample
    /// only seeds the baseline, because there is no prior confirmed state
    /// to transition from.
    pub fn clear_zone(&mut self) {
        self.zone = None;
        self.confirmed_outside = None;
        self.pending = None;
    }

    /// Evaluate one position sample.
    ///
    /// Returns the confirmed transition, if this sample completed one.
    /// Invalid samples (non-finite or out-of-range coordinates) are skipped
    /// silently — expected occasionally from flaky sources, never fatal.
    pub fn observe(&mut self, sample: PositionSample) -> Option<TransitionEvent> {
        if !sample.point.is_valid() {
            self.samples_skipped += 1;
            trace!(point = %sample.point, "skipping sample with invalid coordinates");
            return None;
        }
        let Some(zone) = &self.zone else {
            // Zone not yet defined: hold state, classify nothing.
            return None;
        };

        let distance_m = sample.point.distance_m(zone.center);
        let buffer_m = self.config.effective_buffer_m(sample.accuracy());
        let outside_now = distance_m > zone.radius_m + buffer_m;

        let Some(confirmed) = self.confirmed_outside else {
            // First classified sample: seed the baseline, no event.
            self.confirmed_outside = Some(outside_now);
            self.pending = None;
            debug!(outside = outside_now, distance_m, "baseline seeded");
            return None;
        };

        if outside_now == confirmed {
            // Raw agrees with confirmed: cancel any pending flip silently.
            if self.pending.take().is_some() {
                trace!(distance_m, "pending transition cancelled by reverting sample");
            }
            return None;
        }

        // Raw disagrees with confirmed — open or advance the window.
        match self.pending.take() {
            Some(mut p) if p.outside == outside_now => {
                if sample.captured_at.saturating_since(p.since) >= self.config.debounce_ms {
                    return self.confirm(outside_now, distance_m, sample);
                }
                // Still inside the window: last sample wins the pending decision.
                p.last = sample;
                p.distance_m = distance_m;
                self.pending = Some(p);
                None
            }
            _ => {
                self.pending = Some(Pending {
                    outside: outside_now,
                    since: sample.captured_at,
                    last: sample,
                    distance_m,
                });
                None
            }
        }
    }

    /// Confirm an elapsed pending transition when no further samples have
    /// arrived.
    ///
    /// `observe` can only confirm when a sample lands after the window; a
    /// subject who exits and then loses signal would otherwise stay pending
    /// forever.  The host drives this with its own notion of "now" (same
    /// monotonic clock as sample timestamps).
    pub fn poll(&mut self, now: Millis) -> Option<TransitionEvent> {
        let due = matches!(
            &self.pending,
            Some(p) if now.saturating_since(p.since) >= self.config.debounce_ms
        );
        if !due {
            return None;
        }
        let p = self.pending.take()?;
        self.confirm(p.outside, p.distance_m, p.last)
    }

    /// Flip confirmed membership and build the event.  Callers guarantee
    /// the debounce window has elapsed; pending state only ever exists with
    /// a zone set, so the `None` arm is unreachable in practice.
    fn confirm(
        &mut self,
        outside: bool,
        distance_m: f64,
        sample: PositionSample,
    ) -> Option<TransitionEvent> {
        let zone = self.zone.clone()?;
        self.confirmed_outside = Some(outside);
        let kind = if outside {
            Transition::Exited
        } else {
            Transition::Entered
        };
        debug!(%kind, distance_m, zone = %zone, "transition confirmed");
        Some(TransitionEvent {
            kind,
            distance_m,
            sample,
            zone,
        })
    }
}

impl Default for GeofenceMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}
