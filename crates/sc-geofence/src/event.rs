//! Confirmed boundary-crossing events.

use std::fmt;

use crate::sample::PositionSample;
use crate::zone::SafeZone;

/// Direction of a confirmed crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Confirmed outside → inside.
    Entered,
    /// Confirmed inside → outside.
    Exited,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Entered => write!(f, "entered"),
            Transition::Exited => write!(f, "exited"),
        }
    }
}

/// One confirmed state change, delivered to the alert sink at most once.
///
/// Carries the sample and zone that decided the transition so sinks can
/// build alert payloads (distance, position, zone geometry) without holding
/// any monitor state of their own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionEvent {
    /// Which way the boundary was crossed.
    pub kind: Transition,

    /// Great-circle distance from the deciding sample to the zone center,
    /// in metres.  Human/alert-facing.
    pub distance_m: f64,

    /// The sample that confirmed the transition.
    pub sample: PositionSample,

    /// The zone the transition was evaluated against.
    pub zone: SafeZone,
}
