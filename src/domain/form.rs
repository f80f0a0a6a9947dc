//! Entry form validation
//!
//! Input is checked here before anything reaches the repository. Failures
//! come back as per-field messages rather than errors thrown from deep inside
//! the journal.

use crate::domain::entry::{EntryUpdate, NewEntry};
use std::fmt;

/// Longest title accepted, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Messages prefixed with the field they belong to
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(msg) = &self.title {
            out.push(format!("title: {}", msg));
        }
        if let Some(msg) = &self.content {
            out.push(format!("content: {}", msg));
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Raw user input for an entry
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub favorite: Option<bool>,
}

impl EntryForm {
    /// Validate as a brand new entry; title and content are required
    pub fn validate(self) -> Result<NewEntry, FieldErrors> {
        let title = self.title.unwrap_or_default();
        let content = self.content.unwrap_or_default();

        let errors = FieldErrors {
            title: check_title(&title),
            content: check_content(&content),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEntry {
            title,
            content,
            tags: normalize_tags(self.tags.unwrap_or_default()),
            favorite: self.favorite.unwrap_or(false),
        })
    }

    /// Check the title on its own, before any content has been written
    pub fn validate_title(&self) -> Result<(), FieldErrors> {
        match check_title(self.title.as_deref().unwrap_or_default()) {
            Some(msg) => Err(FieldErrors {
                title: Some(msg),
                content: None,
            }),
            None => Ok(()),
        }
    }

    /// Validate as an edit; only the fields that were supplied are checked
    pub fn validate_update(self) -> Result<EntryUpdate, FieldErrors> {
        let errors = FieldErrors {
            title: self.title.as_deref().and_then(check_title),
            content: self.content.as_deref().and_then(check_content),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EntryUpdate {
            title: self.title,
            content: self.content,
            tags: self.tags.map(normalize_tags),
            favorite: self.favorite,
        })
    }
}

fn check_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        Some("Title is required".to_string())
    } else if title.chars().count() > MAX_TITLE_CHARS {
        Some(format!(
            "Title must be less than {} characters",
            MAX_TITLE_CHARS
        ))
    } else {
        None
    }
}

fn check_content(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        Some("Content is required".to_string())
    } else {
        None
    }
}

/// Trim tags, drop blanks and keep only the first occurrence of each
pub fn normalize_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() || out.iter().any(|t| t == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, content: &str) -> EntryForm {
        EntryForm {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let entry = form("Feature", "Added dark mode").validate().unwrap();
        assert_eq!(entry.title, "Feature");
        assert_eq!(entry.content, "Added dark mode");
        assert!(entry.tags.is_empty());
        assert!(!entry.favorite);
    }

    #[test]
    fn test_blank_title_and_content() {
        let errors = form("   ", "\n\t").validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.content.as_deref(), Some("Content is required"));
    }

    #[test]
    fn test_title_length_boundary() {
        let exactly = "a".repeat(100);
        assert!(form(&exactly, "body").validate().is_ok());

        let over = "a".repeat(101);
        let errors = form(&over, "body").validate().unwrap_err();
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be less than 100 characters")
        );
        assert!(errors.content.is_none());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let title = "é".repeat(100);
        assert!(form(&title, "body").validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_required_on_create() {
        let errors = EntryForm::default().validate().unwrap_err();
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
    }

    #[test]
    fn test_validate_title_ignores_missing_content() {
        let errors = EntryForm::default().validate_title().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert!(errors.content.is_none());

        let draft = EntryForm {
            title: Some("Draft".to_string()),
            ..Default::default()
        };
        assert!(draft.validate_title().is_ok());
        assert!(form(&"x".repeat(101), "").validate_title().is_err());
    }

    #[test]
    fn test_update_checks_only_supplied_fields() {
        let update = EntryForm {
            favorite: Some(true),
            ..Default::default()
        }
        .validate_update()
        .unwrap();
        assert_eq!(update.favorite, Some(true));
        assert!(update.title.is_none());

        let errors = EntryForm {
            content: Some("  ".to_string()),
            ..Default::default()
        }
        .validate_update()
        .unwrap_err();
        assert!(errors.title.is_none());
        assert_eq!(errors.content.as_deref(), Some("Content is required"));
    }

    #[test]
    fn test_normalize_tags() {
        let tags = normalize_tags([" rust", "bug", "", "rust", "  ", "Bug"]);
        assert_eq!(tags, vec!["rust", "bug", "Bug"]);
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = form("", "").validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "title: Title is required; content: Content is required"
        );
    }
}
