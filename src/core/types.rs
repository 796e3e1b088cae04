//! Core date types shared across the engine

use serde::{Deserialize, Serialize};

/// Day count on the absolute timeline. Day 0 is year 1, month 1, day 1;
/// values may be negative when scanning before the epoch.
pub type AbsoluteDay = i64;

/// Clock time within a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// Hour of day including the minute fraction, e.g. 7:30 -> 7.5.
    pub fn fractional_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

/// A date as it appears in calendar files and on the query surface.
/// Month and day are 1-based. Time and weekday ride along when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u32>,
}

impl WireDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day, time: None, weekday: None }
    }

    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    /// Parses a `YYYY-M-D` literal: 1-6 digit year, 1-2 digit month and day.
    /// Anything else, including zero month or day, yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        fn field(part: &str, max_len: usize) -> Option<i64> {
            if part.is_empty() || part.len() > max_len {
                return None;
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        }

        let mut parts = input.trim().split('-');
        let year = field(parts.next()?, 6)?;
        let month = field(parts.next()?, 2)?;
        let day = field(parts.next()?, 2)?;
        if parts.next().is_some() || month == 0 || day == 0 {
            return None;
        }
        Some(Self::new(year, month as u32, day as u32))
    }

    /// Shifts the month to its 0-based index. `None` when the month field
    /// is 0, which no calendar can contain.
    pub fn to_internal(&self) -> Option<InternalDate> {
        let month = (self.month as usize).checked_sub(1)?;
        Some(InternalDate { year: self.year, month, day: self.day })
    }
}

impl std::fmt::Display for WireDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// A date in the engine's working form: month is a 0-based index into the
/// calendar's month list. Conversion from [`WireDate`] happens exactly once,
/// at the query boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternalDate {
    pub year: i64,
    pub month: usize,
    pub day: u32,
}

impl InternalDate {
    pub fn new(year: i64, month: usize, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Back to the 1-based wire form. Time and weekday do not survive the
    /// round trip; they are presentation-side fields.
    pub fn to_wire(&self) -> WireDate {
        WireDate::new(self.year, self.month as u32 + 1, self.day)
    }
}
