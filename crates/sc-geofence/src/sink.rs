//! Alert sink trait for confirmed transitions.

use sc_core::SubjectId;

use crate::event::{Transition, TransitionEvent};

/// Callbacks invoked exactly once per confirmed boundary crossing.
///
/// Both methods have default no-op implementations so implementors only
/// need to override what they care about.  Transitions are never batched:
/// one confirmed crossing, one call.
///
/// # Example — banner printer
///
/// ```rust,ignore
/// struct BannerPrinter;
///
/// impl AlertSink for BannerPrinter {
///     fn on_exit(&mut self, subject: SubjectId, event: &TransitionEvent) {
///         println!("{subject} left {} ({:.0} m away)", event.zone.label(), event.distance_m);
///     }
/// }
/// ```
pub trait AlertSink {
    /// The subject crossed back inside the zone.
    fn on_enter(&mut self, _subject: SubjectId, _event: &TransitionEvent) {}

    /// The subject crossed out of the zone.
    fn on_exit(&mut self, _subject: SubjectId, _event: &TransitionEvent) {}
}

/// An [`AlertSink`] that does nothing.  Use when you need a watcher but
/// don't want alert callbacks.
pub struct NoopSink;

impl AlertSink for NoopSink {}

/// Route one event to the matching sink callback.
pub fn dispatch<S: AlertSink + ?Sized>(
    sink: &mut S,
    subject: SubjectId,
    event: &TransitionEvent,
) {
    match event.kind {
        Transition::Entered => sink.on_enter(subject, event),
        Transition::Exited => sink.on_exit(subject, event),
    }
}
