//! Eighth-fraction phase model.
//!
//! Moons configured with only a cycle length get their phases from fixed
//! fraction breakpoints. This model is closed-form, so it also backs the
//! event scanner: phase distances come from fraction arithmetic instead of
//! stepping through segments.

use crate::calendar::convert;
use crate::calendar::description::MoonDef;
use crate::calendar::meta::CalendarMeta;
use crate::core::types::InternalDate;

use super::phase::{LunarPhase, MoonCycle, MoonPhaseRecord, PhaseDetail};

/// How close to a target fraction, in cycles, counts as already there.
/// Keeps a date exactly at new or full from reporting a full cycle of wait.
pub const PHASE_EPSILON_CYCLES: f64 = 0.001;

/// Cycle fraction of a full moon.
const FULL_FRACTION: f64 = 0.5;

/// Phase record for a moon by fraction breakpoints. `None` when the moon
/// cannot be pinned to the calendar.
pub fn compute_phase(
    meta: &CalendarMeta,
    date: InternalDate,
    moon: &MoonDef,
) -> Option<MoonPhaseRecord> {
    let cycle = MoonCycle::resolve(meta, moon)?;
    let age = cycle.age_at(convert::to_absolute_day(meta, date));
    let frac = age / cycle.cycle_length;

    Some(MoonPhaseRecord {
        moon: moon.name.clone(),
        cycle_length: moon.cycle_length,
        age,
        phase: LunarPhase::from_fraction(frac).name().to_string(),
        detail: PhaseDetail::Illumination { percent: illumination_percent(frac) },
        days_until_new: Some(days_until_fraction(frac, 0.0, cycle.cycle_length)),
        days_until_full: Some(days_until_fraction(frac, FULL_FRACTION, cycle.cycle_length)),
    })
}

/// Illuminated share of the disc as a whole percentage: 0 at new, 100 at
/// full, cosine-shaped in between.
pub fn illumination_percent(frac: f64) -> u32 {
    (50.0 * (1.0 + (std::f64::consts::TAU * (frac - FULL_FRACTION)).cos())).round() as u32
}

/// Whole days until the cycle next reaches `target` (0 for new, 0.5 for
/// full). A fraction within [`PHASE_EPSILON_CYCLES`] of the target on
/// either side reports 0.
pub fn days_until_fraction(frac: f64, target: f64, cycle_length: f64) -> f64 {
    let ahead = (target - frac).rem_euclid(1.0);
    if ahead < PHASE_EPSILON_CYCLES || ahead > 1.0 - PHASE_EPSILON_CYCLES {
        return 0.0;
    }
    (ahead * cycle_length).ceil()
}
