//! Config management use case

use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, FileStorage};

pub struct ConfigService {
    storage: FileStorage,
}

impl ConfigService {
    pub fn new(storage: FileStorage) -> Self {
        ConfigService { storage }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;
        match key {
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;
        match key {
            "editor" => config.editor = value.to_string(),
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ))
            }
            _ => return Err(unknown_key(key)),
        }
        config.save_to_dir(&self.storage.root)
    }

    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.storage.root)
    }
}

fn unknown_key(key: &str) -> DiaryError {
    DiaryError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: editor, created",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_set_and_get_editor() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("editor", "code --wait").unwrap();
        assert_eq!(service.get("editor").unwrap(), "code --wait");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(!service.get("created").unwrap().is_empty());
        assert!(matches!(
            service.set("created", "2020-01-01T00:00:00Z"),
            Err(DiaryError::Config(msg)) if msg.contains("read-only")
        ));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("theme").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
