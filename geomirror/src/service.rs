//! Dual-record service.
//!
//! Orchestrates reads and writes across the primary (WGS84) and mirror
//! (Web Mercator) collections, enforcing the correspondence invariant: every
//! primary record written through [`PointService::add_point`] commits together
//! with exactly one mirror record carrying its name and forward projection,
//! or neither is visible at all.
//!
//! The service holds no state of its own beyond the injected store handle;
//! every operation is an independent request. Consistency under concurrent
//! writers is delegated to the store's transaction isolation.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::model::{CrsSelection, PointListing, TransformedPoint};
use crate::proj;
use crate::store::{PointStore, StoreTransaction};

/// Service over the two point collections.
///
/// Generic over the store backend so tests can inject doubles through the
/// same seam the shipped SQLite backend uses.
pub struct PointService<S: PointStore> {
    store: S,
}

impl<S: PointStore> PointService<S> {
    /// Create a service over the given store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reset both collections to empty, well-defined form.
    ///
    /// Destructive and idempotent: existing data is discarded, and calling it
    /// repeatedly is safe.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] if schema creation fails; the store's
    /// transactional batch leaves no partial schema behind.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        info!("resetting point collections");
        self.store.create_schema()?;
        Ok(())
    }

    /// Add a point to both collections atomically.
    ///
    /// Projects first, so invalid coordinates abort before any write. Both
    /// inserts then run inside one store transaction: on success both records
    /// are durably visible, on any failure neither is. Returns the generated
    /// `(primary_id, mirror_id)` pair; the two ids are assigned independently.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidName`] - `name` is empty or blank
    /// * [`EngineError::Projection`] - `lon`/`lat` outside the projectable range
    /// * [`EngineError::Storage`] - either insert failed; the transaction was
    ///   rolled back in full
    pub fn add_point(&mut self, name: &str, lon: f64, lat: f64) -> Result<(i64, i64), EngineError> {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidName);
        }
        let (x, y) = proj::forward(lon, lat)?;

        // One timestamp for the pair: the records are created together.
        let created_at = Utc::now();

        // An early return before commit drops the handle, rolling back the
        // primary insert along with anything else on it.
        let mut tx = self.store.begin()?;
        let primary_id = tx.insert_primary(name, lon, lat, created_at)?;
        let mirror_id = tx.insert_mirror(name, x, y, created_at)?;
        tx.commit()?;

        info!(name, lon, lat, primary_id, mirror_id, "point added to both collections");
        Ok((primary_id, mirror_id))
    }

    /// List stored records from the selected collection(s).
    ///
    /// Read-only; each call re-executes the query, ordered by id ascending
    /// within each collection. No cursor state survives between calls.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] if a read fails.
    pub fn list_points(&self, selection: CrsSelection) -> Result<PointListing, EngineError> {
        debug!(?selection, "listing points");

        let primary = if selection.includes_primary() {
            Some(self.store.primary_points()?)
        } else {
            None
        };
        let mirror = if selection.includes_mirror() {
            Some(self.store.mirror_points()?)
        } else {
            None
        };

        Ok(PointListing { primary, mirror })
    }

    /// Look up a primary record and return it with a fresh projection.
    ///
    /// Only the primary collection is consulted; the mercator fields are
    /// recomputed from the stored coordinates, so the view reflects the
    /// projection engine's current behavior rather than the stored mirror
    /// row. `Ok(None)` is the normal not-found outcome, not an error.
    ///
    /// # Errors
    ///
    /// * [`EngineError::Storage`] - the lookup failed
    /// * [`EngineError::Projection`] - the stored coordinates no longer
    ///   project (possible only if the store was modified out of band)
    pub fn transform_point(&self, primary_id: i64) -> Result<Option<TransformedPoint>, EngineError> {
        let record = match self.store.find_primary(primary_id)? {
            Some(record) => record,
            None => {
                debug!(primary_id, "primary record not found");
                return Ok(None);
            }
        };

        let (x, y) = proj::forward(record.lon, record.lat)?;

        Ok(Some(TransformedPoint {
            id: record.id,
            name: record.name,
            lon: record.lon,
            lat: record.lat,
            x,
            y,
            created_at: record.created_at,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn fresh_service() -> PointService<SqliteStore> {
        let mut service = PointService::new(SqliteStore::in_memory().expect("in-memory store"));
        service.initialize().expect("initialize");
        service
    }

    #[test]
    fn test_add_point_returns_both_ids() {
        let mut service = fresh_service();

        let (primary_id, mirror_id) = service.add_point("Greenwich", 0.0, 51.4779).unwrap();

        assert_eq!(primary_id, 1);
        assert_eq!(mirror_id, 1);
    }

    #[test]
    fn test_empty_name_is_rejected_before_writing() {
        let mut service = fresh_service();

        assert!(matches!(
            service.add_point("", 0.0, 0.0),
            Err(EngineError::InvalidName)
        ));
        assert!(matches!(
            service.add_point("   ", 0.0, 0.0),
            Err(EngineError::InvalidName)
        ));

        let listing = service.list_points(CrsSelection::Both).unwrap();
        assert!(listing.primary.unwrap().is_empty());
        assert!(listing.mirror.unwrap().is_empty());
    }

    #[test]
    fn test_listing_respects_selection() {
        let mut service = fresh_service();
        service.add_point("p", 1.0, 2.0).unwrap();

        let primary_only = service.list_points(CrsSelection::Primary).unwrap();
        assert!(primary_only.primary.is_some());
        assert!(primary_only.mirror.is_none());

        let mirror_only = service.list_points(CrsSelection::Mirror).unwrap();
        assert!(mirror_only.primary.is_none());
        assert!(mirror_only.mirror.is_some());
    }

    #[test]
    fn test_transform_reports_stored_fields() {
        let mut service = fresh_service();
        let (primary_id, _) = service.add_point("spot", 10.0, 20.0).unwrap();

        let view = service
            .transform_point(primary_id)
            .unwrap()
            .expect("record exists");

        assert_eq!(view.id, primary_id);
        assert_eq!(view.name, "spot");
        assert_eq!(view.lon, 10.0);
        assert_eq!(view.lat, 20.0);

        let (x, y) = proj::forward(10.0, 20.0).unwrap();
        assert_eq!(view.x, x);
        assert_eq!(view.y, y);
    }
}
