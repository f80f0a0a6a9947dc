//! Key/value slot storage
//!
//! Each slot holds one string value under a fixed key. On disk a slot is a
//! file inside the `.devdiary` directory of the journal root.

use crate::error::{DiaryError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Name of the directory that marks a journal root
pub const DIARY_DIR: &str = ".devdiary";

/// Environment variable that pins the journal root
pub const ROOT_ENV: &str = "DEVDIARY_ROOT";

/// Durable string slots addressed by key
pub trait Storage {
    /// Read a slot, `None` when it was never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot's value
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as files under `<root>/.devdiary/`
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        FileStorage { root }
    }

    /// Locate the journal root: `DEVDIARY_ROOT` first, then the nearest
    /// ancestor of the current directory holding `.devdiary`
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileStorage::new(path));
            }
            return Err(DiaryError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'devdiary init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DIARY_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.devdiary` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_diary_dir(dir))
            .map(|dir| FileStorage::new(dir.to_path_buf()))
            .ok_or_else(|| DiaryError::NotDiaryDirectory(start.to_path_buf()))
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    /// Create the `.devdiary` directory; refuses to run twice
    pub fn initialize(&self) -> Result<()> {
        let dir = self.data_dir();
        if dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }
        fs::create_dir(&dir)?;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DIARY_DIR)
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir().join(key)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }

    /// Write to a sibling temp file, then rename it over the slot.
    ///
    /// On Windows `rename` does not replace an existing file, so the old
    /// slot is removed first.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let dir = self.data_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = self.slot_path(key);
        let tmp_path = dir.join(format!("{}.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        let replaced = if cfg!(windows) && path.exists() {
            fs::remove_file(&path).and_then(|()| fs::rename(&tmp_path, &path))
        } else {
            fs::rename(&tmp_path, &path)
        };
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }
        Ok(())
    }
}

/// In-process slots. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without counting it as a write
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Number of `write` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
