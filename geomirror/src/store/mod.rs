//! Store abstraction for the two point collections.
//!
//! The persistent store is an external collaborator reached through the
//! [`PointStore`] trait, so backends can be swapped without touching the
//! service. The shipped backend is [`sqlite::SqliteStore`]; tests inject
//! failing implementations through the same seam.

pub mod sqlite;

pub use sqlite::{SqliteStore, SqliteTransaction};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{MirrorRecord, PrimaryRecord};

/// Storage backend failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database reported an error (connectivity, constraint, aborted transaction)
    #[error("database error: {0}")]
    Database(String),

    /// I/O failure while preparing the store (paths, directories)
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An open write transaction covering both collections.
///
/// The paired inserts of one logical write all go through a single
/// transaction handle. [`commit`](StoreTransaction::commit) consumes the
/// handle; dropping it without committing rolls every insert back. That drop
/// path is what the service relies on when an insert fails mid-write.
pub trait StoreTransaction {
    /// Insert a WGS84 record, returning the store-generated id.
    fn insert_primary(
        &mut self,
        name: &str,
        lon: f64,
        lat: f64,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError>;

    /// Insert a Web Mercator record, returning the store-generated id.
    fn insert_mirror(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError>;

    /// Make every insert on this handle durably visible, atomically.
    fn commit(self) -> Result<(), StorageError>;
}

/// Keyed access to the primary and mirror collections.
pub trait PointStore {
    /// Transaction handle type produced by [`begin`](PointStore::begin).
    type Tx<'a>: StoreTransaction
    where
        Self: 'a;

    /// Create both collections empty, discarding any existing data.
    ///
    /// Idempotent: safe to call on a fresh store or over an existing schema.
    fn create_schema(&mut self) -> Result<(), StorageError>;

    /// Open a write transaction.
    fn begin(&mut self) -> Result<Self::Tx<'_>, StorageError>;

    /// All primary records, ordered by id ascending. Re-queries on every call.
    fn primary_points(&self) -> Result<Vec<PrimaryRecord>, StorageError>;

    /// All mirror records, ordered by id ascending. Re-queries on every call.
    fn mirror_points(&self) -> Result<Vec<MirrorRecord>, StorageError>;

    /// Look up one primary record by id. Absence is not an error.
    fn find_primary(&self, id: i64) -> Result<Option<PrimaryRecord>, StorageError>;
}
