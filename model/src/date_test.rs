use super::*;

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid date")
}

#[test]
fn parses_local_date_time() {
    assert_eq!(parse_calendar_date("2024-01-05T09:30:00"), Some(date(2024, Month::January, 5)));
}

#[test]
fn parses_offset_and_fractional_timestamps() {
    assert_eq!(parse_calendar_date("2023-12-31T23:59:59.123+09:00"), Some(date(2023, Month::December, 31)));
    assert_eq!(parse_calendar_date("2023-12-31 23:59"), Some(date(2023, Month::December, 31)));
}

#[test]
fn parses_bare_date() {
    assert_eq!(parse_calendar_date("2022-02-28"), Some(date(2022, Month::February, 28)));
}

#[test]
fn rejects_invalid_calendar_dates() {
    assert_eq!(parse_calendar_date("2023-02-30T00:00:00"), None);
    assert_eq!(parse_calendar_date("2023-13-01"), None);
    assert_eq!(parse_calendar_date("yesterday"), None);
    assert_eq!(parse_calendar_date("2023-01-012"), None);
}

#[test]
fn long_form_matches_locale_layout() {
    assert_eq!(format_long(date(2024, Month::March, 7)), "2024. 3. 7.");
}

#[test]
fn short_form_drops_year() {
    assert_eq!(format_short(date(2024, Month::November, 21)), "11. 21.");
}

#[test]
fn display_long_handles_missing_and_garbage() {
    assert_eq!(display_long(None), "");
    assert_eq!(display_long(Some("not a date")), "not a date");
    assert_eq!(display_long(Some("2024-10-16T12:00:00")), "2024. 10. 16.");
}

#[test]
fn display_short_falls_back_to_today() {
    let today = date(2026, Month::October, 16);
    assert_eq!(display_short(None, today), "10. 16.");
    assert_eq!(display_short(Some("2025-01-02T00:00:00"), today), "1. 2.");
}
