//! `sc-core` — foundational types for the SafeCircle geofence engine.
//!
//! This crate is a dependency of every other `sc-*` crate.  It intentionally
//! has no `sc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SubjectId`, `ListenerId`                             |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`time`]        | `Millis` monotonic millisecond timestamp              |
//! | [`error`]       | `ScError`, `ScResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ScError, ScResult};
pub use geo::GeoPoint;
pub use ids::{ListenerId, SubjectId};
pub use time::Millis;
