//! Tag repository discovery and initialization

use crate::error::{FtagError, Result};
use crate::infrastructure::config::FTAG_DIR;
use crate::infrastructure::{Config, SqliteTagStore};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding a `.ftag` database directory
#[derive(Debug, Clone)]
pub struct Repository {
    pub root: PathBuf,
}

impl Repository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        Repository { root }
    }

    /// Discover the repository root by walking up from the current directory.
    /// First checks FTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_ftag_dir(&path) {
                return Ok(Repository::new(path));
            } else {
                return Err(FtagError::Config(format!(
                    "FTAG_ROOT is set to '{}' but no .ftag directory found. \
                    Run 'ftag init' in that directory or unset FTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the repository root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_ftag_dir(&current) {
                return Ok(Repository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FtagError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_ftag_dir(path: &Path) -> bool {
        path.join(FTAG_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_ftag_dir(&self.root)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Location of the tag database
    pub fn database_path(&self) -> Result<PathBuf> {
        Ok(self.load_config()?.database_path(&self.root))
    }

    /// Create the .ftag directory, its config and an empty database
    pub fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(FtagError::AlreadyInitialized(self.root.clone()));
        }

        fs::create_dir(self.root.join(FTAG_DIR))?;
        let config = Config::new();
        config.save_to_dir(&self.root)?;

        // Opening creates the schema
        SqliteTagStore::open(&config.database_path(&self.root))?;
        Ok(())
    }

    /// Open a store session on this repository's database.
    ///
    /// The database must already exist; a missing file means the .ftag
    /// directory was not created by `ftag init`.
    pub fn open_store(&self) -> Result<SqliteTagStore> {
        let path = self.database_path()?;
        if !path.is_file() {
            return Err(FtagError::Config(format!(
                "Tag database missing: {}",
                path.display()
            )));
        }
        SqliteTagStore::open(&path)
    }
}
