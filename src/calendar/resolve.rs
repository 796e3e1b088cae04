//! Weekday, season, and time-of-day lookups.
//!
//! These are the small presentation-side resolvers: pure functions over a
//! calendar description and an already-normalized date. Festival days sit
//! outside the week, so weekday progress counts month days only.

use serde::{Deserialize, Serialize};

use crate::calendar::description::{CalendarDescription, IntercalaryDef, SeasonDef};
use crate::core::types::{InternalDate, TimeOfDay};

/// Time of day periods used when a calendar defines no hour blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,   // 06:00-12:00
    Afternoon, // 12:00-18:00
    Evening,   // 18:00-22:00
    Night,     // 22:00-06:00
}

impl TimePeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=17 => TimePeriod::Afternoon,
            18..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night, // 22-23, 0-5
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }
}

/// Weekday index for a date. An explicit index supplied with the date is
/// trusted as-is; otherwise the index advances one step per month day from
/// the calendar's starting offset. Festival days contribute no steps.
pub fn weekday_index(
    calendar: &CalendarDescription,
    date: InternalDate,
    explicit: Option<u32>,
) -> Option<usize> {
    let count = calendar.weekdays.len();
    if count == 0 {
        return None;
    }
    if let Some(index) = explicit {
        return Some(index as usize);
    }
    let earlier_months = calendar.months.get(..date.month)?;
    let progress: i64 =
        earlier_months.iter().map(|m| m.day_count()).sum::<i64>() + (date.day as i64 - 1);
    Some((calendar.start_day_offset + progress).rem_euclid(count as i64) as usize)
}

/// Weekday name for a date, when the calendar has a week and the index
/// lands inside it.
pub fn weekday_name<'a>(
    calendar: &'a CalendarDescription,
    date: InternalDate,
    explicit: Option<u32>,
) -> Option<&'a str> {
    let index = weekday_index(calendar, date, explicit)?;
    calendar.weekdays.get(index).map(String::as_str)
}

/// First season containing a 1-based month. Wrapping ranges are handled by
/// the season itself.
pub fn season_for_month(calendar: &CalendarDescription, month: u32) -> Option<&SeasonDef> {
    calendar.seasons.iter().find(|s| s.contains_month(month))
}

/// Festival block a date falls in, with the 1-based day inside the block.
/// A date whose day number runs past its month's length lands in the blocks
/// following that month, taken in declaration order. Days beyond every
/// block belong to nothing.
pub fn festival_for_date<'a>(
    calendar: &'a CalendarDescription,
    date: InternalDate,
) -> Option<(&'a IntercalaryDef, i64)> {
    let month = calendar.months.get(date.month)?;
    let mut overflow = date.day as i64 - month.day_count();
    if overflow <= 0 {
        return None;
    }
    for block in calendar.intercalary.iter().filter(|b| b.after == month.name) {
        if overflow <= block.day_count() {
            return Some((block, overflow));
        }
        overflow -= block.day_count();
    }
    None
}

/// Named stretch of the day for a clock time. Calendars with hour blocks
/// answer from the first matching block; everything else falls back to the
/// built-in table. A time no block covers also falls back.
pub fn time_period<'a>(calendar: &'a CalendarDescription, time: TimeOfDay) -> &'a str {
    let hour = time.fractional_hour();
    for block in &calendar.hour_blocks {
        if block.contains_hour(hour) {
            return &block.name;
        }
    }
    TimePeriod::from_hour(time.hour).name()
}
