//! Shared moon-phase machinery: cycle anchoring, phase names, and the
//! record type both phase models produce.
//!
//! A moon is defined by a cycle length in days and one known new-moon date.
//! Once that date is resolved to an absolute day, the moon's age anywhere
//! on the timeline is a single Euclidean remainder, valid before and after
//! the reference date alike.

use serde::{Deserialize, Serialize};

use crate::calendar::convert;
use crate::calendar::description::MoonDef;
use crate::calendar::meta::CalendarMeta;
use crate::core::types::AbsoluteDay;

// ============================================================================
// Phase names
// ============================================================================

/// The eight phases of a lunar cycle, assigned by fraction breakpoints at
/// eighths: New below 1/8, then onward around the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    /// Phase for a cycle fraction in [0, 1).
    pub fn from_fraction(frac: f64) -> Self {
        if frac < 0.125 {
            LunarPhase::New
        } else if frac < 0.25 {
            LunarPhase::WaxingCrescent
        } else if frac < 0.375 {
            LunarPhase::FirstQuarter
        } else if frac < 0.5 {
            LunarPhase::WaxingGibbous
        } else if frac < 0.625 {
            LunarPhase::Full
        } else if frac < 0.75 {
            LunarPhase::WaningGibbous
        } else if frac < 0.875 {
            LunarPhase::LastQuarter
        } else {
            LunarPhase::WaningCrescent
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LunarPhase::New => "New Moon",
            LunarPhase::WaxingCrescent => "Waxing Crescent",
            LunarPhase::FirstQuarter => "First Quarter",
            LunarPhase::WaxingGibbous => "Waxing Gibbous",
            LunarPhase::Full => "Full Moon",
            LunarPhase::WaningGibbous => "Waning Gibbous",
            LunarPhase::LastQuarter => "Last Quarter",
            LunarPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

// ============================================================================
// Phase records
// ============================================================================

/// One moon's phase on one date. Recomputed fresh per query; cycle lengths
/// are independent and often fractional, so nothing here is cacheable by
/// date alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonPhaseRecord {
    /// Moon's display name
    pub moon: String,
    /// Cycle length in days
    pub cycle_length: f64,
    /// Days into the current cycle, in [0, cycle_length)
    pub age: f64,
    /// Display name of the current phase
    pub phase: String,
    /// Model-specific payload
    pub detail: PhaseDetail,
    /// Whole days until the next new moon, when the model can say
    pub days_until_new: Option<f64>,
    /// Whole days until the next full moon, when the model can say
    pub days_until_full: Option<f64>,
}

/// What else a phase model knows beyond the phase name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseDetail {
    /// Index of the current authored segment
    Segment { index: usize },
    /// Illuminated share of the disc as a whole percentage
    Illumination { percent: u32 },
}

// ============================================================================
// Cycle anchoring
// ============================================================================

/// A moon's cycle pinned to the absolute day line: everything phase
/// arithmetic needs, resolved once so day-by-day scans stay cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCycle {
    /// Cycle length in days, always positive
    pub cycle_length: f64,
    /// Absolute day of the reference new moon
    pub ref_abs: AbsoluteDay,
}

impl MoonCycle {
    /// Pins a moon to a calendar layout. Moons that cannot be computed
    /// against resolve to `None`: a non-positive cycle length, a reference
    /// date with month 0, or a reference month outside the month list.
    pub fn resolve(meta: &CalendarMeta, moon: &MoonDef) -> Option<Self> {
        if moon.is_degenerate() {
            return None;
        }
        let reference = moon.first_new_moon.to_internal()?;
        if reference.month >= meta.month_count() {
            return None;
        }
        Some(Self {
            cycle_length: moon.cycle_length,
            ref_abs: convert::to_absolute_day(meta, reference),
        })
    }

    /// Pins every usable moon of a list, keeping declared order.
    pub fn resolve_all(meta: &CalendarMeta, moons: &[MoonDef]) -> Vec<Self> {
        moons.iter().filter_map(|moon| Self::resolve(meta, moon)).collect()
    }

    /// Days into the cycle at an absolute day, in [0, cycle_length).
    /// Holds on both sides of the reference date.
    pub fn age_at(&self, abs: AbsoluteDay) -> f64 {
        ((abs - self.ref_abs) as f64).rem_euclid(self.cycle_length)
    }

    /// Cycle fraction in [0, 1): 0 is new, 0.5 is full.
    pub fn fraction_at(&self, abs: AbsoluteDay) -> f64 {
        self.age_at(abs) / self.cycle_length
    }

    /// Position on the cycle as an angle in [0, 360) degrees.
    pub fn angle_at(&self, abs: AbsoluteDay) -> f64 {
        self.fraction_at(abs) * 360.0
    }

    /// Phase by the eighth-fraction breakpoints.
    pub fn phase_at(&self, abs: AbsoluteDay) -> LunarPhase {
        LunarPhase::from_fraction(self.fraction_at(abs))
    }
}

// ============================================================================
// Tests
// ============================================================================
