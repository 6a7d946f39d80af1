//! Record types shared by the store and the dual-record service.

use chrono::{DateTime, Utc};

/// A point as stored in the primary (WGS84) collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryRecord {
    /// Store-assigned id, unique and monotonically increasing
    pub id: i64,
    /// Free-text label, not unique
    pub name: String,
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Set once at creation, immutable
    pub created_at: DateTime<Utc>,
}

/// A point as stored in the mirror (Web Mercator) collection.
///
/// Its id is assigned independently of the primary record's; the two are
/// related only by having been written in the same transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorRecord {
    /// Store-assigned id, independent of the primary id
    pub id: i64,
    /// Equals the originating primary record's name
    pub name: String,
    /// Projected x in meters
    pub x: f64,
    /// Projected y in meters
    pub y: f64,
    /// Set once at creation, immutable
    pub created_at: DateTime<Utc>,
}

/// Which collection(s) a list operation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsSelection {
    /// WGS84 collection only
    Primary,
    /// Web Mercator collection only
    Mirror,
    /// Both collections
    Both,
}

impl CrsSelection {
    /// Whether the primary collection is queried under this selection.
    pub fn includes_primary(self) -> bool {
        matches!(self, CrsSelection::Primary | CrsSelection::Both)
    }

    /// Whether the mirror collection is queried under this selection.
    pub fn includes_mirror(self) -> bool {
        matches!(self, CrsSelection::Mirror | CrsSelection::Both)
    }
}

/// Result of a list operation.
///
/// `None` means the collection was not queried under the requested selection,
/// as opposed to queried and found empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PointListing {
    pub primary: Option<Vec<PrimaryRecord>>,
    pub mirror: Option<Vec<MirrorRecord>>,
}

/// Combined view of a primary record and its freshly recomputed projection.
///
/// The mercator fields are computed from the stored geographic fields at read
/// time; the stored mirror record is never consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedPoint {
    /// Primary record id
    pub id: i64,
    pub name: String,
    /// Stored longitude in degrees
    pub lon: f64,
    /// Stored latitude in degrees
    pub lat: f64,
    /// Freshly projected x in meters
    pub x: f64,
    /// Freshly projected y in meters
    pub y: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_primary_only() {
        assert!(CrsSelection::Primary.includes_primary());
        assert!(!CrsSelection::Primary.includes_mirror());
    }

    #[test]
    fn test_selection_mirror_only() {
        assert!(!CrsSelection::Mirror.includes_primary());
        assert!(CrsSelection::Mirror.includes_mirror());
    }

    #[test]
    fn test_selection_both() {
        assert!(CrsSelection::Both.includes_primary());
        assert!(CrsSelection::Both.includes_mirror());
    }
}
