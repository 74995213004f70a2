use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeofenceError {
    /// The zone fails its invariants (non-finite center, radius ≤ 0).
    /// Rejected at zone-set time; the previous zone and state are kept.
    #[error("invalid zone: {0}")]
    InvalidZone(String),
}

pub type GeofenceResult<T> = Result<T, GeofenceError>;
