//! Thin wrappers over browser APIs with SSR fallbacks.

use time::Date;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking alert. No-op during SSR.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("alert: {message}");
    }
}

/// Today's date in the browser's local time zone (UTC during SSR).
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        local_date(now.get_full_year(), now.get_month(), now.get_date())
            .unwrap_or_else(|| time::OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Build a date from JS `Date` parts (`month0` is zero-based).
#[cfg(any(test, feature = "hydrate"))]
fn local_date(year: u32, month0: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = time::Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}
