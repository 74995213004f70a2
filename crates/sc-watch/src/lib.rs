//! `sc-watch` — multi-subject monitoring service for SafeCircle.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`feed`]      | `LocationFeed` — sample fan-out with subscribe/unsubscribe   |
//! | [`watcher`]   | `WatchService<S>` — per-subject monitors → sink dispatch     |
//! | [`alert_log`] | `AlertLog` — in-memory alert record sink                     |
//! | [`error`]     | `WatchError`, `WatchResult<T>`                               |
//!
//! # Wiring
//!
//! ```rust,ignore
//! let mut feed = LocationFeed::new();
//! let (listener, samples) = feed.subscribe();
//! let mut watcher = WatchService::new(MonitorConfig::default(), AlertLog::new());
//!
//! watcher.start(patient)?;
//! watcher.set_zone(patient, SafeZone::new(home, 150.0)?)?;
//!
//! feed.publish(patient, sample);            // location source side
//! for (subject, sample) in samples.try_iter() {
//!     watcher.push_sample(subject, sample); // monitoring side
//! }
//! watcher.poll(now);                        // confirm quiet-stream pendings
//! feed.unsubscribe(listener);
//! ```
//!
//! Each subject's monitor state is independent; no cross-subject locking
//! exists because no cross-subject state exists.

pub mod alert_log;
pub mod error;
pub mod feed;
pub mod watcher;

#[cfg(test)]
mod tests;

pub use alert_log::{AlertLog, AlertRecord};
pub use error::{WatchError, WatchResult};
pub use feed::{FeedItem, LocationFeed};
pub use watcher::WatchService;
