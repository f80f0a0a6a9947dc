//! Output formatting utilities

use crate::domain::display::{format_date, format_time, relative_time};
use crate::domain::Entry;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const PREVIEW_CHARS: usize = 72;

/// Leading characters of an id, enough to type back as a prefix
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Message for an empty listing; wording depends on whether filters hid
/// the entries
pub fn empty_message(filtered: bool) -> &'static str {
    if filtered {
        "No matching entries found\n\
        Try changing your search terms or filters to find what you're looking for."
    } else {
        "Your journal is empty\n\
        Start documenting your coding journey with 'devdiary new'."
    }
}

/// One block per entry: title line, content preview, tags and age
pub fn format_entry_list<Tz: TimeZone>(entries: &[&Entry], now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let mut output = String::new();
    for entry in entries {
        let star = if entry.favorite { "★" } else { " " };
        output.push_str(&format!(
            "{} {}  [{}]\n",
            star,
            entry.title,
            short_id(&entry.id)
        ));
        output.push_str(&format!("    {}\n", preview(&entry.content)));

        let age = relative_time(&entry.date.with_timezone(&now.timezone()), now);
        if entry.tags.is_empty() {
            output.push_str(&format!("    {}\n", age));
        } else {
            output.push_str(&format!("    {}  ·  {}\n", format_tags(&entry.tags), age));
        }
    }
    output
}

/// Full view of a single entry
pub fn format_entry_detail<Tz: TimeZone>(entry: &Entry, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let local = entry.date.with_timezone(tz);
    let mut output = format!("{}\n", entry.title);
    output.push_str(&format!("id:       {}\n", entry.id));
    output.push_str(&format!(
        "date:     {} at {}\n",
        format_date(&local),
        format_time(&local)
    ));
    if !entry.tags.is_empty() {
        output.push_str(&format!("tags:     {}\n", format_tags(&entry.tags)));
    }
    if entry.favorite {
        output.push_str("favorite: yes\n");
    }
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[&str]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }
    output
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First line of the content, cut to a readable width
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim_end();
    let more_lines = content.trim_end().lines().count() > 1;

    if first_line.chars().count() > PREVIEW_CHARS {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else if more_lines {
        format!("{} …", first_line)
    } else {
        first_line.to_string()
    }
}
