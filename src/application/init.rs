//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::Path;
use tracing::info;

/// Create `.devdiary` and a default config under `path`
pub fn init(path: &Path) -> Result<FileStorage> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let storage = FileStorage::new(path.to_path_buf());
    storage.initialize()?;
    Config::default().save_to_dir(path)?;

    info!(root = %path.display(), "initialized journal");
    Ok(storage)
}
