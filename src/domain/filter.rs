//! Entry filtering
//!
//! A [`FilterSpec`] combines a free-text search, a tag selection, an optional
//! day range and a favorites switch. An entry is kept only when it satisfies
//! every active criterion; inactive criteria never exclude anything.
//!
//! # Examples
//!
//! ```
//! use devdiary::domain::{filter_entries_in, Entry, FilterSpec};
//! use chrono::{TimeZone, Utc};
//!
//! let entry = Entry {
//!     id: "1".to_string(),
//!     title: "Feature".to_string(),
//!     content: "Added dark mode".to_string(),
//!     date: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
//!     tags: vec!["feature".to_string()],
//!     favorite: true,
//! };
//! let spec = FilterSpec {
//!     search_term: "DARK".to_string(),
//!     ..Default::default()
//! };
//! let entries = [entry];
//! assert_eq!(filter_entries_in(&entries, &spec, &Utc).len(), 1);
//! ```

use crate::domain::entry::Entry;
use crate::error::{DiaryError, Result};
use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};

/// Inclusive calendar-day bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// The active search, tag, date and favorite criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_term: String,
    pub tags: Vec<String>,
    pub date_range: DateRange,
    pub favorites_only: bool,
}

impl FilterSpec {
    /// True when at least one criterion can exclude entries
    pub fn is_active(&self) -> bool {
        self.search_query().is_some()
            || !self.tags.is_empty()
            || self.date_range.start.is_some()
            || self.date_range.end.is_some()
            || self.favorites_only
    }

    /// Lowercased, trimmed search term, or `None` when blank
    fn search_query(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

/// Filter using the local timezone for day boundaries
pub fn filter_entries<'a>(entries: &'a [Entry], spec: &FilterSpec) -> Vec<&'a Entry> {
    filter_entries_in(entries, spec, &Local)
}

/// Filter using `tz` for day boundaries. Relative order is preserved.
pub fn filter_entries_in<'a, Tz: TimeZone>(
    entries: &'a [Entry],
    spec: &FilterSpec,
    tz: &Tz,
) -> Vec<&'a Entry> {
    let query = spec.search_query();
    let not_before = spec.date_range.start.map(|day| start_of_day(day, tz));
    let not_after = spec.date_range.end.and_then(|day| end_of_day(day, tz));

    entries
        .iter()
        .filter(|entry| {
            if let Some(q) = &query {
                if !entry.title.to_lowercase().contains(q.as_str())
                    && !entry.content.to_lowercase().contains(q.as_str())
                {
                    return false;
                }
            }

            if !spec.tags.is_empty() && !spec.tags.iter().any(|tag| entry.has_tag(tag)) {
                return false;
            }

            if not_before.is_some_and(|bound| entry.date < bound) {
                return false;
            }
            if not_after.is_some_and(|bound| entry.date > bound) {
                return false;
            }

            !spec.favorites_only || entry.favorite
        })
        .collect()
}

fn start_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let local = day.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => gap_transition(local, tz),
    }
}

fn end_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let local = day.and_hms_milli_opt(23, 59, 59, 999)?;
    Some(match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(_, latest) => latest.with_timezone(&Utc),
        LocalResult::None => gap_transition(local, tz) - Duration::milliseconds(1),
    })
}

/// First instant after the forward jump that skipped `local`.
fn gap_transition<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    let offset_at = |utc: &NaiveDateTime| tz.offset_from_utc_datetime(utc).fix();
    let before = offset_at(&(local - Duration::days(1)));
    let after = offset_at(&(local + Duration::days(1)));

    // `lo` still carries the old offset, `hi` already carries the new one
    let mut lo = local - after;
    let mut hi = local - before;
    if lo >= hi {
        return Utc.from_utc_datetime(&hi);
    }
    while hi - lo > Duration::milliseconds(1) {
        let mid = lo + (hi - lo) / 2;
        if offset_at(&mid) == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Utc.from_utc_datetime(&hi)
}

/// Parse a day bound relative to the local calendar
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    parse_day_from(input, Local::now().date_naive())
}

/// Parse `YYYY-MM-DD`, `today` or `yesterday` relative to `today`
pub fn parse_day_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => today
            .pred_opt()
            .ok_or_else(|| DiaryError::InvalidDate(input.to_string())),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| DiaryError::InvalidDate(input.to_string())),
    }
}
