//! `sc-geofence` — debounced enter/exit evaluation for circular safe zones.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`zone`]      | `SafeZone` — validated circular zone                        |
//! | [`sample`]    | `PositionSample` — one location-source reading              |
//! | [`config`]    | `MonitorConfig` — noise buffer + debounce window            |
//! | [`monitor`]   | `GeofenceMonitor` — per-subject confirmation state machine  |
//! | [`event`]     | `Transition`, `TransitionEvent`                             |
//! | [`sink`]      | `AlertSink` observer trait, `NoopSink`                      |
//! | [`error`]     | `GeofenceError`, `GeofenceResult<T>`                        |
//!
//! # Confirmation model
//!
//! ```text
//! Uninitialized ──first valid sample──▶ ConfirmedInside | ConfirmedOutside   (no event)
//! ConfirmedInside ──raw outside──▶ PendingOutside
//!   PendingOutside ──held ≥ debounce_ms──▶ ConfirmedOutside   (emit Exited)
//!   PendingOutside ──raw inside──▶ ConfirmedInside            (no event)
//! ConfirmedOutside ──symmetric──▶ PendingInside ──▶ ConfirmedInside (emit Entered)
//! ```
//!
//! Raw per-sample classification never reaches consumers: only membership
//! that has survived the debounce window emits, and each confirmed flip
//! emits exactly once.

pub mod config;
pub mod error;
pub mod event;
pub mod monitor;
pub mod sample;
pub mod sink;
pub mod zone;


pub use config::MonitorConfig;
pub use error::{GeofenceError, GeofenceResult};
pub use event::{Transition, TransitionEvent};
pub use monitor::{GeofenceMonitor, MonitorPhase};
pub use sample::PositionSample;
pub use sink::{AlertSink, NoopSink};
pub use zone::SafeZone;
