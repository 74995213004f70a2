//! Location sample fan-out.
//!
//! An explicitly constructed service with a subscribe/unsubscribe
//! lifecycle, owned by whatever composes the application — deliberately
//! not a process-wide singleton.  Each subscriber gets its own unbounded
//! channel; a dropped receiver is pruned on the next publish.

use crossbeam_channel::{Receiver, Sender, unbounded};
use rustc_hash::FxHashMap;
use tracing::trace;

use sc_core::{ListenerId, SubjectId};
use sc_geofence::PositionSample;

/// A `(subject, sample)` pair as delivered to subscribers.
pub type FeedItem = (SubjectId, PositionSample);

/// Fan-out point between the location source and its consumers.
///
/// `publish` is push-based with arbitrary cadence; ordering is arrival
/// order per subscriber and nothing more.  The feed also caches the most
/// recent sample per subject for pull-style consumers (map centering, "last
/// seen" UI) that don't want a channel.
pub struct LocationFeed {
    subscribers: Vec<(ListenerId, Sender<FeedItem>)>,
    latest: FxHashMap<SubjectId, PositionSample>,
    next_listener: u32,
}

impl LocationFeed {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            latest: FxHashMap::default(),
            next_listener: 0,
        }
    }

    /// Register a subscriber; returns its handle and the receiving end.
    ///
    /// Dropping the receiver is enough to stop delivery, but callers that
    /// own the feed should still [`unsubscribe`][Self::unsubscribe] to free
    /// the slot deterministically.
    pub fn subscribe(&mut self) -> (ListenerId, Receiver<FeedItem>) {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        let (tx, rx) = unbounded();
        self.subscribers.push((id, tx));
        (id, rx)
    }

    /// Remove a subscriber.  Returns `false` if the handle was unknown
    /// (already unsubscribed or pruned).
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(l, _)| *l != id);
        self.subscribers.len() != before
    }

    /// Push one sample to every live subscriber and the latest-sample cache.
    pub fn publish(&mut self, subject: SubjectId, sample: PositionSample) {
        self.latest.insert(subject, sample.clone());
        self.subscribers.retain(|(id, tx)| {
            let live = tx.send((subject, sample.clone())).is_ok();
            if !live {
                trace!(listener = %id, "pruning disconnected feed subscriber");
            }
            live
        });
    }

    /// Most recent sample published for `subject`, if any.
    pub fn latest(&self, subject: SubjectId) -> Option<&PositionSample> {
        self.latest.get(&subject)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for LocationFeed {
    fn default() -> Self {
        Self::new()
    }
}
