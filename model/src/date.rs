//! Display dates in the admin UI's ko-KR locale form.
//!
//! Timestamps arrive as ISO-8601 local date-times (`2024-01-05T09:30:00`).
//! Only the calendar date is shown, taken as written without any time-zone
//! shift.

use time::{Date, Month};

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Parse the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let prefix = raw.get(..10)?;
    if !matches!(raw.as_bytes().get(10), None | Some(b'T' | b't' | b' ')) {
        return None;
    }
    let mut parts = prefix.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// `YYYY. M. D.`
#[must_use]
pub fn format_long(date: Date) -> String {
    format!("{}. {}. {}.", date.year(), u8::from(date.month()), date.day())
}

/// `M. D.`
#[must_use]
pub fn format_short(date: Date) -> String {
    format!("{}. {}.", u8::from(date.month()), date.day())
}

/// Long display form of an optional raw timestamp.
///
/// Missing timestamps render empty; unparseable ones are shown verbatim.
#[must_use]
pub fn display_long(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(raw) => parse_calendar_date(raw).map_or_else(|| raw.to_owned(), format_long),
    }
}

/// Short display form of an optional raw timestamp, falling back to `today`.
#[must_use]
pub fn display_short(raw: Option<&str>, today: Date) -> String {
    match raw {
        None => format_short(today),
        Some(raw) => parse_calendar_date(raw).map_or_else(|| raw.to_owned(), format_short),
    }
}
