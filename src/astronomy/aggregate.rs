//! Per-date phase records across all of a calendar's moons.

use tracing::debug;

use crate::calendar::description::{CalendarDescription, MoonDef};
use crate::calendar::meta::CalendarMeta;
use crate::core::types::InternalDate;

use super::phase::MoonPhaseRecord;
use super::{fraction, segment};

/// Phase record for one moon, using the model its configuration selects:
/// authored segments when the moon lists any, fraction breakpoints
/// otherwise. The two models are never mixed for one moon.
pub fn compute_phase(
    meta: &CalendarMeta,
    date: InternalDate,
    moon: &MoonDef,
) -> Option<MoonPhaseRecord> {
    if moon.phases.is_empty() {
        fraction::compute_phase(meta, date, moon)
    } else {
        segment::compute_phase(meta, date, moon)
    }
}

/// Records for every usable moon, in the calendar's declared order. Moons
/// that cannot be computed against are skipped, not errors.
pub fn phases_for_date(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    date: InternalDate,
) -> Vec<MoonPhaseRecord> {
    calendar
        .moons
        .iter()
        .filter_map(|moon| {
            let record = compute_phase(meta, date, moon);
            if record.is_none() {
                debug!(moon = %moon.name, "moon configuration is unusable, skipping");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astronomy::phase::PhaseDetail;
    use crate::calendar::description::{MonthDef, PhaseSegmentDef};
    use crate::core::types::WireDate;

    fn two_moon_calendar() -> (CalendarDescription, CalendarMeta) {
        let calendar = CalendarDescription {
            name: "Test".to_string(),
            months: vec![MonthDef { name: "Only".to_string(), days: 360 }],
            intercalary: Vec::new(),
            weekdays: Vec::new(),
            seasons: Vec::new(),
            moons: vec![
                MoonDef {
                    name: "Segmented".to_string(),
                    cycle_length: 28.0,
                    first_new_moon: WireDate::new(1, 1, 1),
                    phases: vec![
                        PhaseSegmentDef { name: "New Moon".to_string(), length: 14.0 },
                        PhaseSegmentDef { name: "Full Moon".to_string(), length: 14.0 },
                    ],
                },
                MoonDef {
                    name: "Fractional".to_string(),
                    cycle_length: 40.0,
                    first_new_moon: WireDate::new(1, 1, 1),
                    phases: Vec::new(),
                },
            ],
            hour_blocks: Vec::new(),
            start_day_offset: 0,
        };
        let meta = CalendarMeta::build(&calendar);
        (calendar, meta)
    }

    #[test]
    fn test_each_moon_uses_its_own_model() {
        let (calendar, meta) = two_moon_calendar();
        let records = phases_for_date(&calendar, &meta, InternalDate::new(1, 0, 1));
        assert_eq!(records.len(), 2);

        // Declared order is preserved
        assert_eq!(records[0].moon, "Segmented");
        assert_eq!(records[1].moon, "Fractional");
        assert!(matches!(records[0].detail, PhaseDetail::Segment { .. }));
        assert!(matches!(records[1].detail, PhaseDetail::Illumination { .. }));
    }

    #[test]
    fn test_broken_moon_is_dropped_not_fatal() {
        let (mut calendar, _) = two_moon_calendar();
        calendar.moons[0].cycle_length = -1.0;
        let meta = CalendarMeta::build(&calendar);
        let records = phases_for_date(&calendar, &meta, InternalDate::new(1, 0, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].moon, "Fractional");
    }

    #[test]
    fn test_no_moons_no_records() {
        let (mut calendar, _) = two_moon_calendar();
        calendar.moons.clear();
        let meta = CalendarMeta::build(&calendar);
        assert!(phases_for_date(&calendar, &meta, InternalDate::new(1, 0, 1)).is_empty());
    }
}
