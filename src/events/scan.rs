//! Bounded day-by-day search over the absolute timeline.
//!
//! Event queries are day-granular, so the scanner is a plain linear walk:
//! probe each day with a predicate, stop at the first hit or after a fixed
//! horizon. There is no cooperative yield inside a scan; callers wanting a
//! tighter budget pass a smaller horizon.

use tracing::trace;

use crate::calendar::meta::CalendarMeta;
use crate::core::types::AbsoluteDay;

/// Search direction along the day line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

impl ScanDirection {
    fn step(self) -> i64 {
        match self {
            ScanDirection::Forward => 1,
            ScanDirection::Backward => -1,
        }
    }
}

/// Default single-direction horizon, in years of daily steps.
pub const DEFAULT_HORIZON_YEARS: i64 = 10;

/// Default horizon in days for a calendar's year length.
pub fn default_horizon_days(meta: &CalendarMeta) -> i64 {
    DEFAULT_HORIZON_YEARS * meta.days_per_year
}

/// Walks from `start` (inclusive) one day at a time, probing each day, for
/// at most `max_days` steps past the start. First hit wins.
pub fn scan_days<T>(
    start: AbsoluteDay,
    direction: ScanDirection,
    max_days: i64,
    mut probe: impl FnMut(AbsoluteDay) -> Option<T>,
) -> Option<(AbsoluteDay, T)> {
    let step = direction.step();
    let mut abs = start;
    for _ in 0..=max_days.max(0) {
        if let Some(hit) = probe(abs) {
            return Some((abs, hit));
        }
        abs += step;
    }
    trace!(start, ?direction, max_days, "scan exhausted its horizon");
    None
}

/// Probes every day of the inclusive range, collecting all hits in day
/// order. Reversed bounds are swapped first.
pub fn scan_range<T>(
    from: AbsoluteDay,
    to: AbsoluteDay,
    mut probe: impl FnMut(AbsoluteDay) -> Option<T>,
) -> Vec<(AbsoluteDay, T)> {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let mut matches = Vec::new();
    for abs in lo..=hi {
        if let Some(hit) = probe(abs) {
            matches.push((abs, hit));
        }
    }
    matches
}
