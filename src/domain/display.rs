//! Human-readable timestamps

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// "Monday, January 1, 2024"
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%A, %B %-d, %Y").to_string()
}

/// "09:05 AM"
pub fn format_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%I:%M %p").to_string()
}

/// UTC calendar day as `YYYY-MM-DD`
pub fn format_date_for_input<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Coarse age of `date` as seen from `now`; anything a week or older falls
/// back to the full date.
pub fn relative_time<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let seconds = now
        .clone()
        .signed_duration_since(date.clone())
        .num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }

    match hours / 24 {
        1 => "Yesterday".to_string(),
        days if days < 7 => format!("{} days ago", days),
        _ => format_date(date),
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at(2024, 1, 1, 9, 5)), "Monday, January 1, 2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&at(2024, 1, 1, 9, 5)), "09:05 AM");
        assert_eq!(format_time(&at(2024, 1, 1, 21, 45)), "09:45 PM");
    }

    #[test]
    fn test_format_date_for_input() {
        assert_eq!(format_date_for_input(&at(2024, 2, 29, 23, 0)), "2024-02-29");
    }

    #[test]
    fn test_relative_time_steps() {
        let now = at(2024, 3, 20, 12, 0);
        let cases = [
            (Duration::seconds(30), "Just now"),
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::hours(30), "Yesterday"),
            (Duration::days(2), "2 days ago"),
            (Duration::days(6), "6 days ago"),
        ];
        for (age, expected) in cases {
            assert_eq!(relative_time(&(now - age), &now), expected);
        }
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = at(2024, 3, 20, 12, 0);
        assert_eq!(
            relative_time(&(now - Duration::days(7)), &now),
            "Wednesday, March 13, 2024"
        );
    }

    #[test]
    fn test_future_dates_read_as_just_now() {
        let now = at(2024, 3, 20, 12, 0);
        assert_eq!(relative_time(&(now + Duration::hours(2)), &now), "Just now");
    }
}
