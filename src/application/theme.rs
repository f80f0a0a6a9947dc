//! Theme preference use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::{PersistenceStore, Storage};
use tracing::info;

/// Current theme, saved on every change
pub struct ThemeService<S> {
    store: PersistenceStore<S>,
    current: Theme,
}

impl<S: Storage> ThemeService<S> {
    pub fn open(store: PersistenceStore<S>) -> Self {
        let current = store.load_theme();
        ThemeService { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.save_theme(theme)?;
        self.current = theme;
        info!(theme = %theme, "theme changed");
        Ok(())
    }

    /// Switch light/dark and return the new theme
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
