//! Journal configuration (`.devdiary/config.toml`)

use crate::error::{DiaryError, Result};
use crate::infrastructure::storage::DIARY_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: default_editor(),
            created: Utc::now(),
        }
    }
}

impl Config {
    fn path_in(root: &Path) -> PathBuf {
        root.join(DIARY_DIR).join(CONFIG_FILE)
    }

    /// Load the config of the journal rooted at `root`
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let contents = fs::read_to_string(Self::path_in(root)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(root.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Write the config, creating `.devdiary` when missing
    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        let dir = root.join(DIARY_DIR);
        if !dir.exists() {
            fs::create_dir(&dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(Self::path_in(root), contents)?;
        Ok(())
    }

    /// `$EDITOR`, then `$VISUAL`, then the configured editor
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
