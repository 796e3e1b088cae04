//! Authored-segment phase model.
//!
//! Some moons come with an explicit, ordered list of named phase stretches
//! measured in days. The current phase is found by walking that list from
//! the cycle age, and distances to a named phase walk forward through the
//! segments with wraparound. Segment lengths are author data: they may not
//! sum to the cycle length, and single segments may be zero or negative.
//! Both are tolerated rather than rejected.

use crate::calendar::convert;
use crate::calendar::description::{MoonDef, PhaseSegmentDef};
use crate::calendar::meta::CalendarMeta;
use crate::core::types::InternalDate;

use super::phase::{MoonCycle, MoonPhaseRecord, PhaseDetail};

/// Phase record for a moon with authored segments. `None` when the moon has
/// no segments or cannot be pinned to the calendar.
pub fn compute_phase(
    meta: &CalendarMeta,
    date: InternalDate,
    moon: &MoonDef,
) -> Option<MoonPhaseRecord> {
    if moon.phases.is_empty() {
        return None;
    }
    let cycle = MoonCycle::resolve(meta, moon)?;
    let age = cycle.age_at(convert::to_absolute_day(meta, date));
    let (index, offset) = locate_segment(&moon.phases, age);

    Some(MoonPhaseRecord {
        moon: moon.name.clone(),
        cycle_length: moon.cycle_length,
        age,
        phase: moon.phases[index].name.clone(),
        detail: PhaseDetail::Segment { index },
        days_until_new: days_until_phase(&moon.phases, index, offset, "new"),
        days_until_full: days_until_phase(&moon.phases, index, offset, "full"),
    })
}

/// Segment containing `age`, plus the offset into it. When the listed
/// lengths undershoot the cycle, ages past their sum clamp to the last
/// segment rather than failing.
fn locate_segment(phases: &[PhaseSegmentDef], age: f64) -> (usize, f64) {
    let mut start = 0.0;
    for (index, segment) in phases.iter().enumerate() {
        let end = start + segment.length_days();
        if age < end {
            return (index, age - start);
        }
        start = end;
    }
    let last = phases.len() - 1;
    (last, age - (start - phases[last].length_days()))
}

/// Forward distance in days to the next segment matching `target`. A date
/// already inside a matching segment is 0 days away. One full pass over the
/// segment list bounds the walk; `None` when no name matches.
pub fn days_until_phase(
    phases: &[PhaseSegmentDef],
    current: usize,
    offset: f64,
    target: &str,
) -> Option<f64> {
    if phases.is_empty() {
        return None;
    }
    if matches_phase_name(&phases[current].name, target) {
        return Some(0.0);
    }
    let mut distance = (phases[current].length_days() - offset).max(0.0);
    for step in 1..phases.len() {
        let index = (current + step) % phases.len();
        if matches_phase_name(&phases[index].name, target) {
            return Some(distance);
        }
        distance += phases[index].length_days();
    }
    None
}

/// Case-insensitive match, with an optional " moon" suffix on either side,
/// so "New", "new moon", and "New Moon" all name the same phase.
fn matches_phase_name(name: &str, target: &str) -> bool {
    canonical(name) == canonical(target)
}

fn canonical(name: &str) -> String {
    let lower = name.trim().to_ascii_lowercase();
    match lower.strip_suffix(" moon") {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}
