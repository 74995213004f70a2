//! Per-subject monitor registry and sink dispatch.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use sc_core::{Millis, SubjectId};
use sc_geofence::{
    AlertSink, GeofenceMonitor, MonitorConfig, PositionSample, SafeZone, Transition, sink,
};

use crate::error::{WatchError, WatchResult};

/// Drives one [`GeofenceMonitor`] per watched subject and delivers each
/// confirmed transition to the owned sink exactly once.
///
/// Generic over the sink the way the surrounding application composes it:
/// an in-memory [`AlertLog`][crate::AlertLog], a notification bridge, or
/// [`NoopSink`][sc_geofence::NoopSink] in tests.
pub struct WatchService<S: AlertSink> {
    monitors: FxHashMap<SubjectId, GeofenceMonitor>,
    default_config: MonitorConfig,
    sink: S,
}

impl<S: AlertSink> WatchService<S> {
    pub fn new(default_config: MonitorConfig, sink: S) -> Self {
        Self {
            monitors: FxHashMap::default(),
            default_config,
            sink,
        }
    }

    /// Begin monitoring `subject` with the service's default config.
    pub fn start(&mut self, subject: SubjectId) -> WatchResult<()> {
        self.start_with(subject, self.default_config)
    }

    /// Begin monitoring `subject` with a per-subject config.
    pub fn start_with(&mut self, subject: SubjectId, config: MonitorConfig) -> WatchResult<()> {
        if self.monitors.contains_key(&subject) {
            return Err(WatchError::AlreadyWatched(subject));
        }
        self.monitors.insert(subject, GeofenceMonitor::new(config));
        debug!(%subject, "monitoring started");
        Ok(())
    }

    /// Stop monitoring `subject`, destroying its state.
    ///
    /// Any pending transition dies with the monitor, so a late, stale event
    /// can never fire into a sink that no longer expects it.
    pub fn stop(&mut self, subject: SubjectId) -> WatchResult<()> {
        self.monitors
            .remove(&subject)
            .ok_or(WatchError::NotWatched(subject))?;
        debug!(%subject, "monitoring stopped");
        Ok(())
    }

    /// Install or replace `subject`'s zone.  On `InvalidZone` the previous
    /// zone and state are unchanged.
    pub fn set_zone(&mut self, subject: SubjectId, zone: SafeZone) -> WatchResult<()> {
        let monitor = self.monitor_mut(subject)?;
        monitor.set_zone(zone)?;
        Ok(())
    }

    /// Remove `subject`'s zone; classification pauses until a new one is set.
    pub fn clear_zone(&mut self, subject: SubjectId) -> WatchResult<()> {
        self.monitor_mut(subject)?.clear_zone();
        Ok(())
    }

    /// Evaluate one sample, dispatching to the sink if it confirmed a
    /// transition.  Returns the transition kind, if any.
    ///
    /// Samples for subjects nobody watches are dropped: a feed fans out to
    /// every subscriber, and this watcher may not be the only consumer.
    pub fn push_sample(
        &mut self,
        subject: SubjectId,
        sample: PositionSample,
    ) -> Option<Transition> {
        let Some(monitor) = self.monitors.get_mut(&subject) else {
            trace!(%subject, "dropping sample for unwatched subject");
            return None;
        };
        let event = monitor.observe(sample)?;
        let kind = event.kind;
        sink::dispatch(&mut self.sink, subject, &event);
        Some(kind)
    }

    /// Confirm elapsed pending transitions across all monitors (the
    /// quiet-stream path).  Returns the number of events dispatched.
    pub fn poll(&mut self, now: Millis) -> usize {
        let mut emitted = 0;
        for (&subject, monitor) in &mut self.monitors {
            if let Some(event) = monitor.poll(now) {
                sink::dispatch(&mut self.sink, subject, &event);
                emitted += 1;
            }
        }
        emitted
    }

    #[inline]
    pub fn is_watching(&self, subject: SubjectId) -> bool {
        self.monitors.contains_key(&subject)
    }

    #[inline]
    pub fn watched_count(&self) -> usize {
        self.monitors.len()
    }

    /// Read-only view of one subject's monitor.
    pub fn monitor(&self, subject: SubjectId) -> Option<&GeofenceMonitor> {
        self.monitors.get(&subject)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear the service down, returning the sink (e.g. to flush an alert log).
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn monitor_mut(&mut self, subject: SubjectId) -> WatchResult<&mut GeofenceMonitor> {
        self.monitors
            .get_mut(&subject)
            .ok_or(WatchError::NotWatched(subject))
    }
}
