//! Configuration management

use crate::error::{FtagError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that marks a tag repository
pub const FTAG_DIR: &str = ".ftag";

const DEFAULT_DATABASE: &str = "ftag.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file name, relative to the .ftag directory
    #[serde(default = "default_database")]
    pub database: String,
    pub created: DateTime<Utc>,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            database: default_database(),
            created: Utc::now(),
        }
    }

    /// Load config from .ftag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(FTAG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FtagError::NotInitialized(path.to_path_buf())
            } else {
                FtagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| FtagError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .ftag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let ftag_dir = path.join(FTAG_DIR);
        let config_path = ftag_dir.join("config.toml");

        if !ftag_dir.exists() {
            fs::create_dir(&ftag_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute location of the database for a repository rooted at `root`
    pub fn database_path(&self, root: &Path) -> PathBuf {
        root.join(FTAG_DIR).join(&self.database)
    }

    fn validate(&self) -> Result<()> {
        let name = Path::new(&self.database);
        if self.database.is_empty() || name.components().count() != 1 || name.is_absolute() {
            return Err(FtagError::Config(format!(
                "Invalid database name '{}': expected a plain file name",
                self.database
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
