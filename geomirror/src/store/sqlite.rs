//! SQLite implementation of the store seam.
//!
//! Each collection is a plain table with an `AUTOINCREMENT` primary key, so
//! ids are unique and monotonically increasing and the two tables number
//! their rows independently. The projection itself lives in the engine; the
//! database stores coordinates as ordinary `REAL` columns.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::model::{MirrorRecord, PrimaryRecord};
use crate::store::{PointStore, StorageError, StoreTransaction};

/// Schema reset: drop-and-create both tables as one atomic batch.
const SCHEMA_SQL: &str = "\
BEGIN;
DROP TABLE IF EXISTS points_wgs84;
CREATE TABLE points_wgs84 (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    lon        REAL NOT NULL,
    lat        REAL NOT NULL,
    created_at TEXT NOT NULL
);
DROP TABLE IF EXISTS points_mercator;
CREATE TABLE points_mercator (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    x          REAL NOT NULL,
    y          REAL NOT NULL,
    created_at TEXT NOT NULL
);
COMMIT;";

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

/// SQLite-backed point store.
///
/// Owns its connection; nothing is shared or global. One value per
/// invocation, released when dropped, on every exit path.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file at the given path.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the database cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Create an in-memory store, used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl PointStore for SqliteStore {
    type Tx<'a> = SqliteTransaction<'a>
    where
        Self: 'a;

    fn create_schema(&mut self) -> Result<(), StorageError> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    fn begin(&mut self) -> Result<SqliteTransaction<'_>, StorageError> {
        Ok(SqliteTransaction {
            tx: self.conn.transaction()?,
        })
    }

    fn primary_points(&self) -> Result<Vec<PrimaryRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, lon, lat, created_at FROM points_wgs84 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(PrimaryRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                lon: row.get(2)?,
                lat: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn mirror_points(&self) -> Result<Vec<MirrorRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, x, y, created_at FROM points_mercator ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MirrorRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                x: row.get(2)?,
                y: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn find_primary(&self, id: i64) -> Result<Option<PrimaryRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, lon, lat, created_at FROM points_wgs84 WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(PrimaryRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                lon: row.get(2)?,
                lat: row.get(3)?,
                created_at: row.get(4)?,
            })),
            None => Ok(None),
        }
    }
}

/// Write transaction over a [`SqliteStore`].
///
/// Wraps a rusqlite transaction, which rolls back on drop unless committed.
pub struct SqliteTransaction<'a> {
    tx: rusqlite::Transaction<'a>,
}

impl StoreTransaction for SqliteTransaction<'_> {
    fn insert_primary(
        &mut self,
        name: &str,
        lon: f64,
        lat: f64,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        self.tx.execute(
            "INSERT INTO points_wgs84 (name, lon, lat, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, lon, lat, created_at],
        )?;
        Ok(self.tx.last_insert_rowid())
    }

    fn insert_mirror(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        self.tx.execute(
            "INSERT INTO points_mercator (name, x, y, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, x, y, created_at],
        )?;
        Ok(self.tx.last_insert_rowid())
    }

    fn commit(self) -> Result<(), StorageError> {
        self.tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_store() -> SqliteStore {
        let mut store = SqliteStore::in_memory().expect("in-memory store");
        store.create_schema().expect("schema");
        store
    }

    #[test]
    fn test_schema_starts_empty() {
        let store = fresh_store();
        assert!(store.primary_points().unwrap().is_empty());
        assert!(store.mirror_points().unwrap().is_empty());
    }

    #[test]
    fn test_create_schema_is_idempotent_and_destructive() {
        let mut store = fresh_store();

        let mut tx = store.begin().unwrap();
        tx.insert_primary("a", 1.0, 2.0, Utc::now()).unwrap();
        tx.commit().unwrap();
        assert_eq!(store.primary_points().unwrap().len(), 1);

        store.create_schema().expect("second create_schema");
        assert!(store.primary_points().unwrap().is_empty());
        assert!(store.mirror_points().unwrap().is_empty());
    }

    #[test]
    fn test_ids_are_monotonically_increasing() {
        let mut store = fresh_store();

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let mut tx = store.begin().unwrap();
            ids.push(tx.insert_primary(name, 0.0, 0.0, Utc::now()).unwrap());
            tx.commit().unwrap();
        }

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_mirror_ids_independent_of_primary_ids() {
        let mut store = fresh_store();

        // Two primary-only inserts, then one paired insert: the mirror table
        // numbers its rows on its own.
        let now = Utc::now();
        let mut tx = store.begin().unwrap();
        tx.insert_primary("a", 0.0, 0.0, now).unwrap();
        tx.insert_primary("b", 0.0, 0.0, now).unwrap();
        let primary_id = tx.insert_primary("c", 0.0, 0.0, now).unwrap();
        let mirror_id = tx.insert_mirror("c", 0.0, 0.0, now).unwrap();
        tx.commit().unwrap();

        assert_eq!(primary_id, 3);
        assert_eq!(mirror_id, 1);
    }

    #[test]
    fn test_listing_is_ordered_by_id() {
        let mut store = fresh_store();

        let now = Utc::now();
        let mut tx = store.begin().unwrap();
        tx.insert_primary("first", 1.0, 1.0, now).unwrap();
        tx.insert_primary("second", 2.0, 2.0, now).unwrap();
        tx.commit().unwrap();

        let records = store.primary_points().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].id < records[1].id);
        assert_eq!(records[0].name, "first");
        assert_eq!(records[1].name, "second");
    }

    #[test]
    fn test_coordinates_roundtrip_exactly() {
        let mut store = fresh_store();

        let now = Utc::now();
        let mut tx = store.begin().unwrap();
        tx.insert_mirror("m", 255_422.57162516622, 6_250_868.901479604, now)
            .unwrap();
        tx.commit().unwrap();

        let records = store.mirror_points().unwrap();
        // REAL columns hold IEEE doubles; storage must not perturb them.
        assert_eq!(records[0].x, 255_422.57162516622);
        assert_eq!(records[0].y, 6_250_868.901479604);
        assert_eq!(records[0].created_at, now);
    }

    #[test]
    fn test_find_primary_absent_returns_none() {
        let store = fresh_store();
        assert_eq!(store.find_primary(999_999).unwrap(), None);
    }

    #[test]
    fn test_find_primary_present() {
        let mut store = fresh_store();

        let mut tx = store.begin().unwrap();
        let id = tx.insert_primary("spot", 10.5, -20.25, Utc::now()).unwrap();
        tx.commit().unwrap();

        let record = store.find_primary(id).unwrap().expect("record exists");
        assert_eq!(record.name, "spot");
        assert_eq!(record.lon, 10.5);
        assert_eq!(record.lat, -20.25);
    }

    #[test]
    fn test_dropped_transaction_rolls_back() {
        let mut store = fresh_store();

        {
            let mut tx = store.begin().unwrap();
            tx.insert_primary("doomed", 0.0, 0.0, Utc::now()).unwrap();
            // No commit: dropping the handle must roll the insert back.
        }

        assert!(store.primary_points().unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("points.db");

        let mut store = SqliteStore::open(&path).expect("open with nested path");
        store.create_schema().unwrap();

        assert!(path.exists(), "database file should be created");
    }

    #[test]
    fn test_reopen_preserves_committed_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("points.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.create_schema().unwrap();
            let mut tx = store.begin().unwrap();
            tx.insert_primary("durable", 3.0, 4.0, Utc::now()).unwrap();
            tx.commit().unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let records = store.primary_points().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "durable");
    }
}
