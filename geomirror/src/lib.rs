//! GeoMirror - dual-CRS point registry
//!
//! This library maintains geospatial point records simultaneously in two
//! coordinate reference systems: geographic WGS84 (the primary collection)
//! and Web Mercator (the mirror collection). The two are kept in permanent
//! agreement: every write projects the point and commits both records in a
//! single transaction, so a reader can never observe one without the other.
//!
//! # High-Level API
//!
//! ```ignore
//! use geomirror::model::CrsSelection;
//! use geomirror::service::PointService;
//! use geomirror::store::SqliteStore;
//!
//! let store = SqliteStore::open("points.db")?;
//! let mut service = PointService::new(store);
//!
//! service.initialize()?;
//! let (primary_id, mirror_id) = service.add_point("Eiffel Tower", 2.2945, 48.8584)?;
//! let listing = service.list_points(CrsSelection::Both)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod proj;
pub mod service;
pub mod store;

/// Version of the GeoMirror library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
