//! Engine error taxonomy.
//!
//! Every failure mode of the public operations maps onto one of these kinds,
//! so callers branch on each case instead of relying on unwinding. A missing
//! record is not represented here: lookups return `Ok(None)` for that outcome.

use thiserror::Error;

use crate::proj::ProjectionError;
use crate::store::StorageError;

/// Errors signaled by the dual-record service.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Point name is empty or blank; detected before any write
    #[error("point name must not be empty")]
    InvalidName,

    /// Coordinates outside the projectable range; detected before any write
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The underlying store failed; the enclosing transaction was rolled back
    #[error(transparent)]
    Storage(#[from] StorageError),
}
