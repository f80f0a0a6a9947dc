//! Entry repository
//!
//! Holds the canonical, newest-first list of entries. Every mutation is
//! followed by exactly one full save of the collection, including mutations
//! that name an id which does not exist.

use crate::domain::{Entry, EntryUpdate, NewEntry};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{PersistenceStore, Storage};
use chrono::{SubsecRound, Utc};
use tracing::{debug, info};
use uuid::Uuid;

pub struct EntryRepository<S> {
    store: PersistenceStore<S>,
    entries: Vec<Entry>,
}

impl<S: Storage> EntryRepository<S> {
    /// Load whatever the store holds; a damaged store opens as empty
    pub fn open(store: PersistenceStore<S>) -> Self {
        let entries = store.load();
        EntryRepository { store, entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Add an entry at the front with a fresh id and the current time
    pub fn create(&mut self, new_entry: NewEntry) -> Result<Entry> {
        let id = self.fresh_id();
        // Stored timestamps carry milliseconds, so keep the in-memory copy equal
        let date = Utc::now().trunc_subsecs(3);
        let entry = new_entry.into_entry(id, date);

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry.clone());
        next.extend(self.entries.iter().cloned());
        self.commit(next)?;
        info!(id = %entry.id, "created entry");
        Ok(entry)
    }

    /// Merge `update` into the entry with `id`. Returns false when no entry
    /// has that id.
    pub fn update(&mut self, id: &str, update: EntryUpdate) -> Result<bool> {
        let mut next = self.entries.clone();
        let found = match next.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                update.apply(entry);
                true
            }
            None => false,
        };
        self.commit(next)?;
        log_outcome("updated entry", id, found);
        Ok(found)
    }

    /// Remove the entry with `id`. Returns false when no entry has that id.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut next = self.entries.clone();
        next.retain(|e| e.id != id);
        let found = next.len() != self.entries.len();
        self.commit(next)?;
        log_outcome("deleted entry", id, found);
        Ok(found)
    }

    /// Flip the favorite flag. Returns false when no entry has that id.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let mut next = self.entries.clone();
        let found = match next.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.favorite = !entry.favorite;
                true
            }
            None => false,
        };
        self.commit(next)?;
        log_outcome("toggled favorite", id, found);
        Ok(found)
    }

    /// Every distinct tag, in the order it is first seen
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.entries.iter().flat_map(|e| e.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Expand an id or an unambiguous id prefix to a full id
    pub fn resolve_id(&self, prefix: &str) -> Result<Option<String>> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Ok(None);
        }
        if let Some(entry) = self.get(prefix) {
            return Ok(Some(entry.id.clone()));
        }

        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(Some(entry.id.clone())),
            (Some(_), Some(_)) => Err(DiaryError::AmbiguousId(prefix.to_string())),
            (None, _) => Ok(None),
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Save `next`, and adopt it only once it is stored
    fn commit(&mut self, next: Vec<Entry>) -> Result<()> {
        self.store.save(&next)?;
        self.entries = next;
        Ok(())
    }
}

fn log_outcome(action: &str, id: &str, found: bool) {
    if found {
        info!(id, "{}", action);
    } else {
        debug!(id, "{}: no such entry", action);
    }
}
