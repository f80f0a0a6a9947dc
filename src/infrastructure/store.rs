//! Persistence of the entry collection and theme preference

use crate::domain::{Entry, Theme};
use crate::error::Result;
use crate::infrastructure::storage::Storage;
use tracing::{debug, warn};

/// Slot holding the JSON array of entries
pub const ENTRIES_KEY: &str = "journal-entries";

/// Slot holding the bare theme string
pub const THEME_KEY: &str = "theme";

/// Serialized mirror of the journal. Every save replaces the whole slot.
#[derive(Debug, Clone)]
pub struct PersistenceStore<S> {
    storage: S,
}

impl<S: Storage> PersistenceStore<S> {
    pub fn new(storage: S) -> Self {
        PersistenceStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Previously saved entries. Missing, unreadable or malformed data all
    /// read as an empty journal.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.storage.read(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = ENTRIES_KEY, "no saved entries");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = ENTRIES_KEY, error = %e, "entries slot unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                debug!(key = ENTRIES_KEY, count = entries.len(), "loaded entries");
                entries
            }
            Err(e) => {
                warn!(key = ENTRIES_KEY, error = %e, "entries slot malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.storage.write(ENTRIES_KEY, &json)?;
        debug!(key = ENTRIES_KEY, count = entries.len(), "saved entries");
        Ok(())
    }

    /// Saved theme, `Light` when absent or unrecognized
    pub fn load_theme(&self) -> Theme {
        match self.storage.read(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
                warn!(key = THEME_KEY, error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(key = THEME_KEY, error = %e, "theme slot unreadable");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.storage.write(THEME_KEY, theme.as_str())
    }
}
