//! Date arithmetic between calendar dates and the absolute day line.
//!
//! Every year of a calendar has the same length, so a date maps to a day
//! count by pure integer arithmetic. Day 0 is year 1, month 1, day 1.
//! Negative absolute days address years before year 1 and use Euclidean
//! division throughout, so the mapping is exact in both directions.
//!
//! These functions assume a non-degenerate meta (at least one month, a
//! positive year length) and a month index inside the month list. The
//! almanac facade checks both once per query; nothing here re-checks.

use crate::calendar::meta::CalendarMeta;
use crate::core::types::{AbsoluteDay, InternalDate};

/// 1-based ordinal of a date's day within its year.
pub fn day_of_year(meta: &CalendarMeta, month: usize, day: u32) -> i64 {
    debug_assert!(month < meta.month_count());
    meta.month_starts[month] + (day as i64 - 1) + 1
}

/// Days since year 1, month 1, day 1. Negative for earlier dates.
pub fn to_absolute_day(meta: &CalendarMeta, date: InternalDate) -> AbsoluteDay {
    debug_assert!(!meta.is_degenerate());
    (date.year - 1) * meta.days_per_year + (day_of_year(meta, date.month, date.day) - 1)
}

/// Inverse of [`to_absolute_day`]. The month is the last one starting at or
/// before the day-of-year, so days inside a festival block land in the
/// preceding month with a day number past that month's length.
pub fn from_absolute_day(meta: &CalendarMeta, abs: AbsoluteDay) -> InternalDate {
    debug_assert!(!meta.is_degenerate());
    let year = abs.div_euclid(meta.days_per_year) + 1;
    let doy0 = abs.rem_euclid(meta.days_per_year);

    let mut month = meta.month_count() - 1;
    while month > 0 && meta.month_starts[month] > doy0 {
        month -= 1;
    }

    let day = (doy0 - meta.month_starts[month] + 1) as u32;
    InternalDate::new(year, month, day)
}
