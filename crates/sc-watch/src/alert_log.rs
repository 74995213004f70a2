//! In-memory alert record store.
//!
//! The engine-side stand-in for the application's alert inbox: each
//! confirmed transition becomes one record a caregiver can list, count
//! unread, and mark read.  Delivery (push notification, banner) stays
//! external; this sink only keeps the record.

use sc_core::{GeoPoint, Millis, SubjectId};
use sc_geofence::{AlertSink, Transition, TransitionEvent};

/// One stored alert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertRecord {
    /// Monotonic per-log sequence number.
    pub id: u64,

    /// The subject the alert is about.
    pub subject: SubjectId,

    /// Direction of the crossing.
    pub kind: Transition,

    /// Caregiver-facing message.
    pub message: String,

    /// Distance to the zone center at confirmation, metres.
    pub distance_m: f64,

    /// Where the subject was when the transition confirmed.
    pub position: GeoPoint,

    /// Label of the zone that was crossed.
    pub zone_label: String,

    /// Capture time of the confirming sample.
    pub ts: Millis,

    /// Whether a caregiver has seen this alert.
    pub read: bool,
}

/// An [`AlertSink`] that appends one record per confirmed transition.
#[derive(Debug, Default)]
pub struct AlertLog {
    records: Vec<AlertRecord>,
    next_id: u64,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts for `subject`, newest first.
    pub fn list(&self, subject: SubjectId) -> Vec<&AlertRecord> {
        let mut out: Vec<&AlertRecord> = self
            .records
            .iter()
            .filter(|r| r.subject == subject)
            .collect();
        out.sort_by(|a, b| b.ts.cmp(&a.ts).then(b.id.cmp(&a.id)));
        out
    }

    /// Unread alerts for `subject`.
    pub fn unread_count(&self, subject: SubjectId) -> usize {
        self.records
            .iter()
            .filter(|r| r.subject == subject && !r.read)
            .count()
    }

    /// Mark every alert for `subject` read.
    pub fn mark_read(&mut self, subject: SubjectId) {
        for r in &mut self.records {
            if r.subject == subject {
                r.read = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, subject: SubjectId, event: &TransitionEvent, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(AlertRecord {
            id,
            subject,
            kind: event.kind,
            message,
            distance_m: event.distance_m,
            position: event.sample.point,
            zone_label: event.zone.label().to_owned(),
            ts: event.sample.captured_at,
            read: false,
        });
    }
}

impl AlertSink for AlertLog {
    fn on_enter(&mut self, subject: SubjectId, event: &TransitionEvent) {
        let message = format!("Subject returned to \"{}\".", event.zone.label());
        self.push(subject, event, message);
    }

    fn on_exit(&mut self, subject: SubjectId, event: &TransitionEvent) {
        let message = format!(
            "Subject has left \"{}\" ({:.0} m from center).",
            event.zone.label(),
            event.distance_m
        );
        self.push(subject, event, message);
    }
}
