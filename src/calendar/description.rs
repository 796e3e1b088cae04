//! Calendar description types for TOML deserialization.
//!
//! A description is the host-authored shape of a world's calendar: its month
//! list, festival blocks between months, week, seasons, moons, and named
//! stretches of the day. Descriptions are data, not behavior; derived
//! arithmetic lives in [`crate::calendar::meta`].

use serde::{Deserialize, Serialize};

use crate::core::types::WireDate;

/// Complete calendar definition as authored in a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarDescription {
    /// Human-readable name of the calendar or world
    pub name: String,
    /// Ordered month list; order defines the year
    #[serde(default)]
    pub months: Vec<MonthDef>,
    /// Festival blocks inserted after named months
    #[serde(default)]
    pub intercalary: Vec<IntercalaryDef>,
    /// Ordered weekday names; empty means the world has no week
    #[serde(default)]
    pub weekdays: Vec<String>,
    /// Seasons spanning inclusive month ranges
    #[serde(default)]
    pub seasons: Vec<SeasonDef>,
    /// Moons tracked by the world
    #[serde(default)]
    pub moons: Vec<MoonDef>,
    /// Named stretches of the day, replacing the built-in table when present
    #[serde(default)]
    pub hour_blocks: Vec<HourBlockDef>,
    /// Weekday-cycle offset of year 1, day 1
    #[serde(default)]
    pub start_day_offset: i64,
}

impl CalendarDescription {
    /// Position of a month by exact name, if present.
    pub fn month_index(&self, name: &str) -> Option<usize> {
        self.months.iter().position(|m| m.name == name)
    }
}

/// A single month. Day counts are clamped to zero when negative, so a
/// malformed month contributes no days rather than failing the calendar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthDef {
    /// Month name, unique within the calendar
    pub name: String,
    /// Number of days; 0 is allowed and means the month never holds a date
    #[serde(default)]
    pub days: i64,
}

impl MonthDef {
    /// Day count with negatives treated as zero.
    pub fn day_count(&self) -> i64 {
        self.days.max(0)
    }
}

/// A festival block of days sitting between months. The days belong to the
/// year but to no month and to no weekday.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntercalaryDef {
    /// Festival name
    #[serde(default)]
    pub name: String,
    /// Name of the month this block follows; blocks naming an unknown
    /// month are ignored
    pub after: String,
    /// Length in days
    #[serde(default)]
    pub days: i64,
}

impl IntercalaryDef {
    pub fn day_count(&self) -> i64 {
        self.days.max(0)
    }
}

/// A season covering an inclusive, possibly wrapping month range (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeasonDef {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,
}

impl SeasonDef {
    /// Whether a 1-based month falls inside this season. A range with
    /// start > end wraps across the year boundary.
    pub fn contains_month(&self, month: u32) -> bool {
        if self.start_month <= self.end_month {
            month >= self.start_month && month <= self.end_month
        } else {
            month >= self.start_month || month <= self.end_month
        }
    }
}

/// A moon with a fixed synodic cycle, anchored to a known new-moon date.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoonDef {
    pub name: String,
    /// Cycle length in days; fractional lengths are common
    pub cycle_length: f64,
    /// Reference date on which this moon was new
    pub first_new_moon: WireDate,
    /// Author-defined phase segments. When empty, phases come from the
    /// eighth-fraction model instead.
    #[serde(default)]
    pub phases: Vec<PhaseSegmentDef>,
}

impl MoonDef {
    /// A moon with no positive cycle length cannot be computed against.
    pub fn is_degenerate(&self) -> bool {
        !(self.cycle_length > 0.0)
    }
}

/// One named stretch of a moon's cycle, measured in days.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhaseSegmentDef {
    pub name: String,
    pub length: f64,
}

impl PhaseSegmentDef {
    pub fn length_days(&self) -> f64 {
        self.length.max(0.0)
    }
}

/// A named stretch of the day, matched as [start_hour, end_hour).
/// An end at or past 24 runs through the end of the day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HourBlockDef {
    pub name: String,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl HourBlockDef {
    /// Whether a fractional hour of day falls inside this block.
    pub fn contains_hour(&self, hour: f64) -> bool {
        hour >= self.start_hour && (self.end_hour >= 24.0 || hour < self.end_hour)
    }
}
