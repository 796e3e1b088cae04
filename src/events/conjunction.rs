//! Close approaches of two moons on the cycle circle.
//!
//! Each moon's cycle fraction maps to an angle, 360 degrees per cycle, and
//! a conjunction is any day the two designated moons sit within a tolerance
//! of each other. The pair is chosen by name when the configuration names
//! two moons the calendar actually has; otherwise the calendar's first two
//! moons are compared.

use serde::Serialize;

use crate::astronomy::phase::MoonCycle;
use crate::calendar::convert;
use crate::calendar::description::{CalendarDescription, MoonDef};
use crate::calendar::meta::CalendarMeta;
use crate::core::types::{AbsoluteDay, WireDate};

use super::scan::{self, ScanDirection};

/// Default separation tolerance in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 5.0;

/// How a conjunction scan picks and judges its pair of moons.
#[derive(Debug, Clone)]
pub struct ConjunctionConfig {
    /// Largest angular separation that still counts, in degrees
    pub tolerance_deg: f64,
    /// Names of the two moons to compare; the calendar's first two when
    /// absent or not both present
    pub moons: Option<(String, String)>,
}

impl Default for ConjunctionConfig {
    fn default() -> Self {
        Self { tolerance_deg: DEFAULT_TOLERANCE_DEG, moons: None }
    }
}

/// One close approach found by a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConjunctionEvent {
    pub date: WireDate,
    /// The two moons compared, in comparison order
    pub moons: [String; 2],
    /// Angular separation on the cycle circle, in [0, 180] degrees
    pub separation_deg: f64,
    /// True when either moon is lit enough for the approach to be seen,
    /// meaning its fraction lies strictly between first and last quarter
    pub visible: bool,
}

/// Separation of two cycle angles, the short way around, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

fn is_watchable(frac: f64) -> bool {
    frac > 0.25 && frac < 0.75
}

/// The two moons a scan compares, pinned to the calendar. `None` when the
/// calendar cannot field a usable pair.
fn designated_pair<'a>(
    calendar: &'a CalendarDescription,
    meta: &CalendarMeta,
    config: &ConjunctionConfig,
) -> Option<[(&'a MoonDef, MoonCycle); 2]> {
    let (first, second) = match &config.moons {
        Some((a, b)) => {
            let first = calendar.moons.iter().find(|m| &m.name == a);
            let second = calendar.moons.iter().find(|m| &m.name == b);
            match (first, second) {
                (Some(first), Some(second)) => (first, second),
                _ => positional_pair(calendar)?,
            }
        }
        None => positional_pair(calendar)?,
    };
    let first_cycle = MoonCycle::resolve(meta, first)?;
    let second_cycle = MoonCycle::resolve(meta, second)?;
    Some([(first, first_cycle), (second, second_cycle)])
}

fn positional_pair(calendar: &CalendarDescription) -> Option<(&MoonDef, &MoonDef)> {
    match calendar.moons.as_slice() {
        [first, second, ..] => Some((first, second)),
        _ => None,
    }
}

fn probe_day(
    pair: &[(&MoonDef, MoonCycle); 2],
    tolerance_deg: f64,
    abs: AbsoluteDay,
) -> Option<(f64, bool)> {
    let [(_, first), (_, second)] = pair;
    let separation = angular_separation(first.angle_at(abs), second.angle_at(abs));
    if separation > tolerance_deg {
        return None;
    }
    let visible = is_watchable(first.fraction_at(abs)) || is_watchable(second.fraction_at(abs));
    Some((separation, visible))
}

fn event_at(
    meta: &CalendarMeta,
    pair: &[(&MoonDef, MoonCycle); 2],
    abs: AbsoluteDay,
    separation_deg: f64,
    visible: bool,
) -> ConjunctionEvent {
    ConjunctionEvent {
        date: convert::from_absolute_day(meta, abs).to_wire(),
        moons: [pair[0].0.name.clone(), pair[1].0.name.clone()],
        separation_deg,
        visible,
    }
}

/// Every conjunction in an inclusive absolute-day range, in day order.
pub fn search_conjunctions(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    from: AbsoluteDay,
    to: AbsoluteDay,
    config: &ConjunctionConfig,
) -> Vec<ConjunctionEvent> {
    let Some(pair) = designated_pair(calendar, meta, config) else {
        return Vec::new();
    };
    scan::scan_range(from, to, |abs| probe_day(&pair, config.tolerance_deg, abs))
        .into_iter()
        .map(|(abs, (separation, visible))| event_at(meta, &pair, abs, separation, visible))
        .collect()
}

/// First conjunction from the start day outward, within the default
/// ten-year horizon.
pub fn next_conjunction(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    start: AbsoluteDay,
    direction: ScanDirection,
    config: &ConjunctionConfig,
) -> Option<ConjunctionEvent> {
    let pair = designated_pair(calendar, meta, config)?;
    let horizon = scan::default_horizon_days(meta);
    let (abs, (separation, visible)) =
        scan::scan_days(start, direction, horizon, |abs| probe_day(&pair, config.tolerance_deg, abs))?;
    Some(event_at(meta, &pair, abs, separation, visible))
}
