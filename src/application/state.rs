//! Application state shared with the presentation layer

use crate::application::journal::EntryRepository;
use crate::application::theme::ThemeService;
use crate::domain::{filter_entries, Entry, FilterSpec};
use crate::infrastructure::{PersistenceStore, Storage};

/// Journal and theme, both backed by the same storage
pub struct AppState<S> {
    pub journal: EntryRepository<S>,
    pub theme: ThemeService<S>,
}

/// What a listing should show
#[derive(Debug)]
pub struct Visible<'a> {
    pub entries: Vec<&'a Entry>,
    /// Whether any filter criterion was active; tells an empty journal apart
    /// from a filter that matched nothing
    pub filtered: bool,
}

impl<S: Storage + Clone> AppState<S> {
    pub fn open(storage: S) -> Self {
        AppState {
            journal: EntryRepository::open(PersistenceStore::new(storage.clone())),
            theme: ThemeService::open(PersistenceStore::new(storage)),
        }
    }

    pub fn visible(&self, spec: &FilterSpec) -> Visible<'_> {
        Visible {
            entries: filter_entries(self.journal.entries(), spec),
            filtered: spec.is_active(),
        }
    }
}
