//! CLI runner for common setup.
//!
//! Encapsulates configuration loading, logging initialization, and store
//! opening so command handlers share one lifecycle instead of repeating it.

use std::path::{Path, PathBuf};

use tracing::info;

use geomirror::config::ConfigFile;
use geomirror::logging::{init_logging, LoggingGuard};
use geomirror::service::PointService;
use geomirror::store::SqliteStore;

use crate::error::CliError;

/// Options shared by every subcommand.
pub struct GlobalArgs {
    /// Database path override from `--database`
    pub database: Option<PathBuf>,
    /// Debug-level logging from `--debug`
    pub debug: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Resolved database path (override or config default)
    database_path: PathBuf,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new(global: &GlobalArgs) -> Result<Self, CliError> {
        let config = ConfigFile::load().map_err(|e| CliError::Config(e.to_string()))?;

        let logging_guard = init_logging(&config.logging.file, global.debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let database_path = global
            .database
            .clone()
            .unwrap_or_else(|| config.database.path.clone());

        Ok(Self {
            logging_guard,
            database_path,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("GeoMirror v{}", geomirror::VERSION);
        info!("geomirror CLI: {} command", command);
    }

    /// The database path this invocation operates on.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Open the store and wrap it in a service.
    pub fn open_service(&self) -> Result<PointService<SqliteStore>, CliError> {
        let store = SqliteStore::open(&self.database_path).map_err(CliError::StoreOpen)?;
        Ok(PointService::new(store))
    }
}
