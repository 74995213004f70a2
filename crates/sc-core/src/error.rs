//! Framework error type.
//!
//! Sub-crates define their own error enums (`GeofenceError`, `WatchError`)
//! and either convert into `ScError` via `From` impls or wrap it as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `sc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ScError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sc-*` crates.
pub type ScResult<T> = Result<T, ScError>;
