//! Alignment events across every moon: all new at once, or all full.
//!
//! Worlds read meaning into the nights when every moon goes dark together
//! and the ones when every moon is full. Detection runs on the fraction
//! model for all moons regardless of how their phases are authored, so a
//! day's verdict never depends on segment naming.

use serde::Serialize;

use crate::astronomy::phase::{LunarPhase, MoonCycle};
use crate::calendar::convert;
use crate::calendar::description::CalendarDescription;
use crate::calendar::meta::CalendarMeta;
use crate::core::types::{AbsoluteDay, WireDate};

use super::scan::{self, ScanDirection};

/// Which way the moons aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EclipseKind {
    /// Every moon new on the same day
    Darkest,
    /// Every moon full on the same day
    Brightest,
}

impl EclipseKind {
    pub fn name(&self) -> &'static str {
        match self {
            EclipseKind::Darkest => "Darkest",
            EclipseKind::Brightest => "Brightest",
        }
    }
}

/// One alignment found by a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EclipseEvent {
    pub date: WireDate,
    pub kind: EclipseKind,
}

/// Verdict for a single day. Requires at least two usable moons; a world
/// with one moon has no alignments to speak of.
fn classify_day(cycles: &[MoonCycle], abs: AbsoluteDay) -> Option<EclipseKind> {
    if cycles.len() < 2 {
        return None;
    }
    let mut all_new = true;
    let mut all_full = true;
    for cycle in cycles {
        match cycle.phase_at(abs) {
            LunarPhase::New => all_full = false,
            LunarPhase::Full => all_new = false,
            _ => return None,
        }
    }
    if all_new {
        Some(EclipseKind::Darkest)
    } else if all_full {
        Some(EclipseKind::Brightest)
    } else {
        None
    }
}

/// Every alignment in an inclusive absolute-day range, in day order.
pub fn search_eclipses(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    from: AbsoluteDay,
    to: AbsoluteDay,
) -> Vec<EclipseEvent> {
    let cycles = MoonCycle::resolve_all(meta, &calendar.moons);
    scan::scan_range(from, to, |abs| classify_day(&cycles, abs))
        .into_iter()
        .map(|(abs, kind)| EclipseEvent {
            date: convert::from_absolute_day(meta, abs).to_wire(),
            kind,
        })
        .collect()
}

/// First alignment of `kind` at or after (or before, scanning backward) the
/// start day, within the default ten-year horizon.
pub fn next_eclipse(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    start: AbsoluteDay,
    kind: EclipseKind,
    direction: ScanDirection,
) -> Option<EclipseEvent> {
    let cycles = MoonCycle::resolve_all(meta, &calendar.moons);
    let horizon = scan::default_horizon_days(meta);
    let (abs, kind) = scan::scan_days(start, direction, horizon, |abs| {
        classify_day(&cycles, abs).filter(|found| *found == kind)
    })?;
    Some(EclipseEvent { date: convert::from_absolute_day(meta, abs).to_wire(), kind })
}
