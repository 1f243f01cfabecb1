//! Date arithmetic for due-date checks
//!
//! Day counts are derived from the raw millisecond difference, rounded up.
//! There is no midnight alignment: a due date of `2026-05-10` checked at
//! `2026-05-09T09:00Z` is 15 hours away, which rounds up to 1 day.
//!
//! Calendar-day comparisons use the UTC date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

pub const MS_PER_DAY: i64 = 86_400_000;

/// Parse a stored date or timestamp.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as
/// UTC) and bare `YYYY-MM-DD` dates (UTC midnight). Anything else is `None`.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days from `now` until `target`, rounded up.
///
/// Negative values mean the target has passed by that many days.
pub fn days_between(now: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    let ms = (target - now).num_milliseconds();
    let days = ms.div_euclid(MS_PER_DAY);
    if ms.rem_euclid(MS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Days until a stored due date, or `None` when there is no usable date.
///
/// A missing date means there is no obligation; an unparseable one is treated
/// the same way so the caller can skip the check and carry on.
pub fn days_until(target: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    target
        .and_then(parse_instant)
        .map(|target| days_between(now, target))
}

/// Whether two instants fall on the same UTC calendar date.
///
/// The day rolls over at 00:00 UTC, not local midnight: at UTC+10 a check
/// done at 09:00 local time still counts toward the previous day.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Strictly inside the trailing window: `at > now - window_days`.
///
/// A window reaching past the representable calendar covers everything
/// (or nothing, when negative).
pub fn within_window(at: DateTime<Utc>, now: DateTime<Utc>, window_days: i64) -> bool {
    match TimeDelta::try_days(window_days).and_then(|w| now.checked_sub_signed(w)) {
        Some(start) => at > start,
        None => window_days > 0,
    }
}
