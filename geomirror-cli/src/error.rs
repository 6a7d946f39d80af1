//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a non-zero exit status. The engine never terminates the process;
//! translating its errors into messages and exit codes happens here.

use std::fmt;
use std::process;

use geomirror::error::EngineError;
use geomirror::proj::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use geomirror::store::StorageError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to open the database
    StoreOpen(StorageError),
    /// An engine operation failed
    Engine(EngineError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if let CliError::Engine(EngineError::Projection(_)) = self {
            eprintln!();
            eprintln!("Valid coordinate ranges:");
            eprintln!("  longitude: {} to {}", MIN_LON, MAX_LON);
            eprintln!("  latitude:  {} to {} (exclusive)", MIN_LAT, MAX_LAT);
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::StoreOpen(e) => write!(f, "Failed to open database: {}", e),
            CliError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::StoreOpen(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        CliError::Engine(e)
    }
}
