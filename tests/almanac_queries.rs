//! End-to-end facade queries against the bundled Veiled Reach calendar.
//!
//! These exercise the whole stack the way the CLI does: TOML file in,
//! provider, almanac, rendered records out.

use std::path::Path;

use cindersky::almanac::Almanac;
use cindersky::astronomy::PhaseDetail;
use cindersky::core::error::AlmanacError;
use cindersky::core::types::{TimeOfDay, WireDate};
use cindersky::format;
use cindersky::provider::StaticProvider;

fn veiled_reach() -> StaticProvider {
    StaticProvider::from_path(Path::new("calendars/veiled_reach.toml"))
        .expect("bundled calendar should load")
}

#[test]
fn test_today_summary_from_the_file() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    // today is 190-5-14, the 14th of Emberwane
    let summary = almanac.day_summary(None).unwrap();
    assert_eq!(summary.date, WireDate::new(190, 5, 14));
    assert_eq!(summary.month.as_deref(), Some("Emberwane"));
    assert!(summary.festival.is_none());
    assert_eq!(summary.weekday.as_deref(), Some("Kinday"));
    assert_eq!(summary.season.as_deref(), Some("High Sun"));
    assert!(summary.time_period.is_none());

    assert_eq!(summary.year.year, 190);
    assert_eq!(summary.year.era, 3);
    assert_eq!(summary.year.year_in_era, 36);
    assert_eq!(summary.year.era_name, "Desert's Fury");

    let names: Vec<&str> = summary.moons.iter().map(|m| m.moon.as_str()).collect();
    assert_eq!(names, ["Argent", "Sanguine"]);
}

#[test]
fn test_each_moon_keeps_its_own_model() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    let records = almanac.moon_phases(None).unwrap();
    assert!(matches!(records[0].detail, PhaseDetail::Segment { .. }));
    assert!(matches!(records[1].detail, PhaseDetail::Illumination { .. }));

    for record in &records {
        assert!(record.age >= 0.0 && record.age < record.cycle_length);
    }
}

#[test]
fn test_argent_segments_at_and_after_reference() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    // 1-1-5 is Argent's recorded new moon
    let at_reference = almanac.moon_phases(Some(WireDate::new(1, 1, 5))).unwrap();
    let argent = &at_reference[0];
    assert_eq!(argent.age, 0.0);
    assert_eq!(argent.phase, "New Moon");
    assert_eq!(argent.detail, PhaseDetail::Segment { index: 0 });
    assert_eq!(argent.days_until_new, Some(0.0));

    // One day later the 1-day New segment is already over
    let next_day = almanac.moon_phases(Some(WireDate::new(1, 1, 6))).unwrap();
    let argent = &next_day[0];
    assert_eq!(argent.age, 1.0);
    assert_eq!(argent.phase, "Waxing Crescent");
    assert_eq!(argent.detail, PhaseDetail::Segment { index: 1 });
    // 6 crescent days remain, then 1 + 6 more to the full segment
    assert_eq!(argent.days_until_full, Some(13.0));
    assert_eq!(argent.days_until_new, Some(28.0));
}

#[test]
fn test_sanguine_fraction_at_reference() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    // 1-2-11 is Sanguine's recorded new moon
    let records = almanac.moon_phases(Some(WireDate::new(1, 2, 11))).unwrap();
    let sanguine = &records[1];
    assert_eq!(sanguine.age, 0.0);
    assert_eq!(sanguine.phase, "New Moon");
    assert_eq!(sanguine.detail, PhaseDetail::Illumination { percent: 0 });
    assert_eq!(sanguine.days_until_new, Some(0.0));
    // Half of the 83-day cycle, rounded up
    assert_eq!(sanguine.days_until_full, Some(42.0));
}

#[test]
fn test_festival_days_stand_outside_the_week() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    // Longlight has 31 days; days 32-34 are Veilfall
    let festival = almanac.day_summary(Some(WireDate::new(190, 4, 32))).unwrap();
    let block = festival.festival.expect("day 32 overflows into Veilfall");
    assert_eq!(block.name, "Veilfall");
    assert_eq!(block.day, 1);
    assert!(festival.weekday.is_none());

    // Still Days trail the last month of the year
    let year_end = almanac.day_summary(Some(WireDate::new(190, 12, 33))).unwrap();
    let block = year_end.festival.expect("day 33 overflows into Still Days");
    assert_eq!(block.name, "Still Days");
    assert_eq!(block.day, 2);

    // One past the festival tail is no date at all
    assert!(matches!(
        almanac.day_summary(Some(WireDate::new(190, 4, 35))),
        Err(AlmanacError::MalformedDate(_, _))
    ));
}

#[test]
fn test_weekdays_skip_festival_days() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    // Last day of Longlight, then first of Emberwane with Veilfall between:
    // the week continues as if the festival were not there.
    let before = almanac.day_summary(Some(WireDate::new(190, 4, 31))).unwrap();
    let after = almanac.day_summary(Some(WireDate::new(190, 5, 1))).unwrap();
    assert_eq!(before.weekday.as_deref(), Some("Lawday"));
    assert_eq!(after.weekday.as_deref(), Some("Restday"));
}

#[test]
fn test_seasons_wrap_the_turn_of_the_year() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    for month in [11, 12, 1] {
        let summary = almanac.day_summary(Some(WireDate::new(190, month, 10))).unwrap();
        assert_eq!(summary.season.as_deref(), Some("Veil"), "month {month}");
    }
    let thaw = almanac.day_summary(Some(WireDate::new(190, 2, 10))).unwrap();
    assert_eq!(thaw.season.as_deref(), Some("Thaw"));
}

#[test]
fn test_time_of_day_resolves_through_hour_blocks() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    let date = WireDate::new(190, 5, 14).with_time(TimeOfDay::new(13, 30, 0));
    let summary = almanac.day_summary(Some(date)).unwrap();
    assert_eq!(summary.time_period.as_deref(), Some("High Glare"));

    let date = WireDate::new(190, 5, 14).with_time(TimeOfDay::new(2, 0, 0));
    let summary = almanac.day_summary(Some(date)).unwrap();
    assert_eq!(summary.time_period.as_deref(), Some("Graywatch"));
}

#[test]
fn test_repeated_queries_answer_identically() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    let first = almanac.moon_phases(None).unwrap();
    let second = almanac.moon_phases(None).unwrap();
    assert_eq!(first, second);

    let summary_a = format::to_json(&almanac.day_summary(None).unwrap()).unwrap();
    let summary_b = format::to_json(&almanac.day_summary(None).unwrap()).unwrap();
    assert_eq!(summary_a, summary_b);
}

#[test]
fn test_date_literal_parsing_at_the_boundary() {
    assert_eq!(Almanac::parse_date_literal("190-5-14"), Some(WireDate::new(190, 5, 14)));
    assert_eq!(Almanac::parse_date_literal("1-12-31"), Some(WireDate::new(1, 12, 31)));
    assert_eq!(Almanac::parse_date_literal("14656-3-05"), Some(WireDate::new(14656, 3, 5)));

    for bad in ["", "190", "190-5", "190-5-14-2", "1234567-1-1", "190-0-4", "190-5-0", "a-b-c"] {
        assert_eq!(Almanac::parse_date_literal(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn test_summary_serializes_to_json() {
    let provider = veiled_reach();
    let almanac = Almanac::new(&provider);

    let json = format::to_json(&almanac.day_summary(None).unwrap()).unwrap();
    assert!(json.contains("\"era_name\": \"Desert's Fury\""));
    assert!(json.contains("\"moon\": \"Argent\""));
    assert!(json.contains("\"season\": \"High Sun\""));
}

#[test]
fn test_missing_file_surfaces_an_io_error() {
    let err = StaticProvider::from_path(Path::new("calendars/no_such_world.toml")).unwrap_err();
    assert!(matches!(err, AlmanacError::Io(_)));
}
