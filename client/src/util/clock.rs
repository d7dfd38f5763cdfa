//! Wall-clock helpers that work in both the browser and SSR.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Proleptic Gregorian (UTC) `(year, month, day)` containing `ms`.
#[must_use]
pub fn civil_from_unix_ms(ms: i64) -> (i64, i64, i64) {
    let days = ms.div_euclid(86_400_000);
    // Civil-from-days: shift the epoch to 0000-03-01 so leap days end each era.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[must_use]
pub fn year_from_unix_ms(ms: i64) -> i64 {
    civil_from_unix_ms(ms).0
}

/// `YYYY-MM-DD HH:MM` in UTC, used for contest and submission tables.
#[must_use]
pub fn format_utc_minutes(ms: i64) -> String {
    let (year, month, day) = civil_from_unix_ms(ms);
    let minute_of_day = ms.rem_euclid(86_400_000) / 60_000;
    format!("{year:04}-{month:02}-{day:02} {:02}:{:02} UTC", minute_of_day / 60, minute_of_day % 60)
}

pub fn current_year() -> i64 {
    year_from_unix_ms(now_ms())
}
