//! Configuration file handling for ~/.geomirror/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. The core never
//! reads configuration itself; the CLI loads it and passes explicit values in.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the config file
    #[error("failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the config file
    #[error("failed to write config file: {0}")]
    Write(String),

    /// Failed to create the config directory
    #[error("failed to create config directory: {0}")]
    Directory(std::io::Error),
}

/// Database settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    /// SQLite database file path
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: config_directory().join("points.db"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join("logs").join("geomirror.log"),
        }
    }
}

/// User configuration, loaded from `~/.geomirror/config.ini`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load configuration from the default path (~/.geomirror/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults. Unknown sections and keys
    /// are ignored.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("database")) {
            if let Some(value) = section.get("path") {
                config.database.path = PathBuf::from(value);
            }
        }
        if let Some(section) = ini.section(Some("logging")) {
            if let Some(value) = section.get("file") {
                config.logging.file = PathBuf::from(value);
            }
        }

        Ok(config)
    }

    /// Save configuration to the default path (~/.geomirror/config.ini).
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Directory)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("database"))
            .set("path", self.database.path.display().to_string());
        ini.with_section(Some("logging"))
            .set("file", self.logging.file.display().to_string());

        ini.write_to_file(path)
            .map_err(|e| ConfigError::Write(e.to_string()))
    }
}

/// Get the path to the config directory (~/.geomirror).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geomirror")
}

/// Get the path to the config file (~/.geomirror/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.database.path.ends_with("points.db"));
        assert!(config.logging.file.ends_with("geomirror.log"));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let config = ConfigFile {
            database: DatabaseSettings {
                path: PathBuf::from("/data/points.db"),
            },
            logging: LoggingSettings {
                file: PathBuf::from("/data/logs/run.log"),
            },
        };
        config.save_to(&config_path).unwrap();

        let reloaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        std::fs::write(
            &config_path,
            "[database]\npath=/tmp/p.db\nflavor=unknown\n\n[future]\nkey=value\n",
        )
        .unwrap();

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.logging, LoggingSettings::default());
    }
}
