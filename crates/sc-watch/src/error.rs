use sc_core::SubjectId;
use sc_geofence::GeofenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("subject {0} is not being watched")]
    NotWatched(SubjectId),

    #[error("subject {0} is already being watched")]
    AlreadyWatched(SubjectId),

    #[error("zone rejected: {0}")]
    Zone(#[from] GeofenceError),
}

pub type WatchResult<T> = Result<T, WatchError>;
