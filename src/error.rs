//! Error types for devdiary

use crate::domain::FieldErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devdiary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a devdiary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    Validation(FieldErrors),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Ambiguous entry id: {0}")]
    AmbiguousId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<FieldErrors> for DiaryError {
    fn from(errors: FieldErrors) -> Self {
        DiaryError::Validation(errors)
    }
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::Validation(_) => 3,
            DiaryError::InvalidDate(_) => 4,
            DiaryError::AmbiguousId(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a devdiary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'devdiary init' in this directory to start a journal\n\
                    • Navigate to an existing devdiary directory\n\
                    • Set DEVDIARY_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DiaryError::Validation(errors) => {
                let mut msg = String::from("Entry was not saved:");
                for line in errors.messages() {
                    msg.push_str("\n• ");
                    msg.push_str(&line);
                }
                msg
            }
            DiaryError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Accepted dates:\n\
                    • today, yesterday\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-15)\n\n\
                    Example:\n\
                    devdiary list --from 2024-01-01 --to today",
                    input
                )
            }
            DiaryError::AmbiguousId(prefix) => {
                format!(
                    "Entry id prefix '{}' matches more than one entry\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'devdiary list' to see entry ids",
                    prefix
                )
            }
            DiaryError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: devdiary config editor 'vim'\n\
                    • Pass the text directly: devdiary new -t 'Title' -c 'Content'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
