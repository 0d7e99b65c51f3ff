//! Initialize repository use case

use crate::error::Result;
use crate::infrastructure::Repository;
use std::fs;
use std::path::Path;

/// Initialize a new tag repository at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = Repository::new(path.to_path_buf());
    repo.initialize()?;

    println!("Initialized ftag repository at {}", path.display());

    Ok(())
}
