//! Domain layer - Journal entries, validation and filtering

pub mod display;
pub mod entry;
pub mod filter;
pub mod form;
pub mod theme;

pub use entry::{Entry, EntryUpdate, NewEntry};
pub use filter::{filter_entries, filter_entries_in, parse_day, DateRange, FilterSpec};
pub use form::{normalize_tags, EntryForm, FieldErrors};
pub use theme::Theme;
