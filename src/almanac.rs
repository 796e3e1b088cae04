//! Query facade over a calendar provider.
//!
//! [`Almanac`] is the entry point hosts embed: it borrows a provider,
//! caches derived month layouts, and answers every query in wire-date
//! terms. Context checks and wire-to-internal normalization happen here,
//! once per query; the engines underneath assume checked input.

use std::sync::Arc;

use serde::Serialize;

use crate::astronomy::{self, MoonPhaseRecord};
use crate::calendar::convert;
use crate::calendar::description::CalendarDescription;
use crate::calendar::era::{self, YearInfo};
use crate::calendar::meta::{CalendarMeta, MetaCache};
use crate::calendar::resolve;
use crate::core::error::{AlmanacError, Result};
use crate::core::types::{InternalDate, WireDate};
use crate::events::conjunction::{self, ConjunctionConfig, ConjunctionEvent};
use crate::events::eclipse::{self, EclipseEvent, EclipseKind};
use crate::events::scan::ScanDirection;
use crate::provider::CalendarProvider;

/// Everything known about one day, bundled for display.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: WireDate,
    pub year: YearInfo,
    pub month: Option<String>,
    /// Festival the day falls in, when it overflows its month
    pub festival: Option<FestivalDay>,
    /// Weekday name; festival days stand outside the week
    pub weekday: Option<String>,
    pub season: Option<String>,
    /// Named stretch of the day, when the date carries a time
    pub time_period: Option<String>,
    pub moons: Vec<MoonPhaseRecord>,
}

/// A day inside a festival block.
#[derive(Debug, Clone, Serialize)]
pub struct FestivalDay {
    pub name: String,
    /// 1-based day within the block
    pub day: i64,
}

/// Query surface over one provider.
pub struct Almanac<'p> {
    provider: &'p dyn CalendarProvider,
    metas: MetaCache,
}

impl<'p> Almanac<'p> {
    pub fn new(provider: &'p dyn CalendarProvider) -> Self {
        Self { provider, metas: MetaCache::new() }
    }

    /// Parses a `YYYY-M-D` date literal. Forwards to [`WireDate::parse`].
    pub fn parse_date_literal(input: &str) -> Option<WireDate> {
        WireDate::parse(input)
    }

    /// Era reckoning for a year, or the provider's current year when
    /// omitted. Needs no calendar; eras are fixed 77-year cycles.
    pub fn year_info(&self, year: Option<i64>) -> Result<YearInfo> {
        let year = match year {
            Some(year) => year,
            None => self.resolve_date(None)?.year,
        };
        Ok(era::year_info(year))
    }

    /// Phase records for every usable moon on a date.
    pub fn moon_phases(&self, date: Option<WireDate>) -> Result<Vec<MoonPhaseRecord>> {
        let (calendar, meta) = self.context()?;
        let wire = self.resolve_date(date)?;
        let internal = normalize(&calendar, &meta, wire)?;
        Ok(astronomy::phases_for_date(&calendar, &meta, internal))
    }

    /// Era, month or festival, weekday, season, time period, and moons for
    /// one day.
    pub fn day_summary(&self, date: Option<WireDate>) -> Result<DaySummary> {
        let (calendar, meta) = self.context()?;
        let wire = self.resolve_date(date)?;
        let internal = normalize(&calendar, &meta, wire)?;

        let festival = resolve::festival_for_date(&calendar, internal)
            .map(|(block, day)| FestivalDay { name: block.name.clone(), day });
        let weekday = if festival.is_some() {
            None
        } else {
            resolve::weekday_name(&calendar, internal, wire.weekday).map(str::to_string)
        };

        Ok(DaySummary {
            date: wire,
            year: era::year_info(wire.year),
            month: calendar.months.get(internal.month).map(|m| m.name.clone()),
            festival,
            weekday,
            season: resolve::season_for_month(&calendar, wire.month).map(|s| s.name.clone()),
            time_period: wire.time.map(|t| resolve::time_period(&calendar, t).to_string()),
            moons: astronomy::phases_for_date(&calendar, &meta, internal),
        })
    }

    /// Eclipses in an inclusive date range. Reversed bounds are swapped.
    pub fn eclipses_in(&self, from: WireDate, to: WireDate) -> Result<Vec<EclipseEvent>> {
        let (calendar, meta) = self.context()?;
        let from = convert::to_absolute_day(&meta, normalize(&calendar, &meta, from)?);
        let to = convert::to_absolute_day(&meta, normalize(&calendar, &meta, to)?);
        Ok(eclipse::search_eclipses(&calendar, &meta, from, to))
    }

    /// Conjunctions of the designated pair in an inclusive date range.
    pub fn conjunctions_in(
        &self,
        from: WireDate,
        to: WireDate,
        config: &ConjunctionConfig,
    ) -> Result<Vec<ConjunctionEvent>> {
        let (calendar, meta) = self.context()?;
        let from = convert::to_absolute_day(&meta, normalize(&calendar, &meta, from)?);
        let to = convert::to_absolute_day(&meta, normalize(&calendar, &meta, to)?);
        Ok(conjunction::search_conjunctions(&calendar, &meta, from, to, config))
    }

    /// First eclipse of a kind from a starting date outward, within the
    /// ten-year horizon. The start day itself counts.
    pub fn find_eclipse(
        &self,
        kind: EclipseKind,
        direction: ScanDirection,
        from: Option<WireDate>,
    ) -> Result<Option<EclipseEvent>> {
        let (calendar, meta) = self.context()?;
        let wire = self.resolve_date(from)?;
        let start = convert::to_absolute_day(&meta, normalize(&calendar, &meta, wire)?);
        Ok(eclipse::next_eclipse(&calendar, &meta, start, kind, direction))
    }

    /// Next day with every moon new at once.
    pub fn next_darkest(&self, from: Option<WireDate>) -> Result<Option<EclipseEvent>> {
        self.find_eclipse(EclipseKind::Darkest, ScanDirection::Forward, from)
    }

    /// Next day with every moon full at once.
    pub fn next_brightest(&self, from: Option<WireDate>) -> Result<Option<EclipseEvent>> {
        self.find_eclipse(EclipseKind::Brightest, ScanDirection::Forward, from)
    }

    /// First conjunction from a starting date outward, within the ten-year
    /// horizon.
    pub fn find_conjunction(
        &self,
        direction: ScanDirection,
        from: Option<WireDate>,
        config: &ConjunctionConfig,
    ) -> Result<Option<ConjunctionEvent>> {
        let (calendar, meta) = self.context()?;
        let wire = self.resolve_date(from)?;
        let start = convert::to_absolute_day(&meta, normalize(&calendar, &meta, wire)?);
        Ok(conjunction::next_conjunction(&calendar, &meta, start, direction, config))
    }

    /// Next conjunction of the designated pair.
    pub fn next_conjunction(
        &self,
        from: Option<WireDate>,
        config: &ConjunctionConfig,
    ) -> Result<Option<ConjunctionEvent>> {
        self.find_conjunction(ScanDirection::Forward, from, config)
    }

    /// Active calendar and derived layout. The layout is checked once here;
    /// everything past this point assumes a usable calendar.
    fn context(&self) -> Result<(Arc<CalendarDescription>, Arc<CalendarMeta>)> {
        let calendar = self.provider.active_calendar().ok_or(AlmanacError::MissingCalendar)?;
        let meta = self.metas.meta_for(&calendar);
        if meta.is_degenerate() {
            return Err(AlmanacError::DegenerateCalendar(calendar.name.clone()));
        }
        Ok((calendar, meta))
    }

    fn resolve_date(&self, date: Option<WireDate>) -> Result<WireDate> {
        date.or_else(|| self.provider.current_date()).ok_or(AlmanacError::MissingDate)
    }
}

/// Wire-to-internal shift plus existence check: the month must be on the
/// calendar and the day must fit within the month plus its festival tail.
fn normalize(
    calendar: &CalendarDescription,
    meta: &CalendarMeta,
    wire: WireDate,
) -> Result<InternalDate> {
    let reject = || AlmanacError::MalformedDate(wire.to_string(), calendar.name.clone());
    let date = wire.to_internal().ok_or_else(reject)?;
    if date.day == 0 {
        return Err(reject());
    }
    let span = meta.month_span(date.month).ok_or_else(reject)?;
    if date.day as i64 > span {
        return Err(reject());
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;

    const RIM_CALENDAR: &str = r#"
name = "Rim"
weekdays = ["Ash", "Ember", "Smoke"]
today = { year = 2, month = 1, day = 4 }

[[months]]
name = "Kindle"
days = 6

[[months]]
name = "Char"
days = 6

[[intercalary]]
name = "Stoking"
after = "Kindle"
days = 2

[[seasons]]
name = "Burn"
start_month = 1
end_month = 1

[[moons]]
name = "Cinder"
cycle_length = 8.0
first_new_moon = { year = 1, month = 1, day = 1 }
"#;

    fn rim_provider() -> StaticProvider {
        StaticProvider::from_toml_str(RIM_CALENDAR).unwrap()
    }

    #[test]
    fn test_empty_provider_reports_missing_calendar() {
        let provider = StaticProvider::empty();
        let almanac = Almanac::new(&provider);
        assert!(matches!(almanac.moon_phases(None), Err(AlmanacError::MissingCalendar)));
        assert!(matches!(almanac.next_darkest(None), Err(AlmanacError::MissingCalendar)));
    }

    #[test]
    fn test_no_date_anywhere_reports_missing_date() {
        let provider = StaticProvider::from_toml_str("name = \"Bare\"\n[[months]]\nname = \"M\"\ndays = 10").unwrap();
        let almanac = Almanac::new(&provider);
        assert!(matches!(almanac.moon_phases(None), Err(AlmanacError::MissingDate)));
        assert!(matches!(almanac.year_info(None), Err(AlmanacError::MissingDate)));
        // An explicit year needs neither calendar nor provider date
        assert_eq!(almanac.year_info(Some(78)).unwrap().era, 2);
    }

    #[test]
    fn test_nonexistent_dates_are_rejected() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);

        for bad in [
            WireDate::new(1, 0, 1),  // month 0
            WireDate::new(1, 3, 1),  // month off the calendar
            WireDate::new(1, 1, 0),  // day 0
            WireDate::new(1, 1, 9),  // past Kindle's 6 days + 2 festival days
            WireDate::new(1, 2, 7),  // past Char, which has no festival tail
        ] {
            let err = almanac.moon_phases(Some(bad)).unwrap_err();
            assert!(
                matches!(&err, AlmanacError::MalformedDate(date, cal) if date == &bad.to_string() && cal == "Rim"),
                "expected MalformedDate for {bad}, got {err}"
            );
        }

        // Festival overflow days are real days
        assert!(almanac.moon_phases(Some(WireDate::new(1, 1, 8))).is_ok());
    }

    #[test]
    fn test_degenerate_calendar_is_reported() {
        let provider =
            StaticProvider::from_toml_str("name = \"Husk\"\n[[months]]\nname = \"M\"\ndays = 0").unwrap();
        let almanac = Almanac::new(&provider);
        let err = almanac.moon_phases(Some(WireDate::new(1, 1, 1))).unwrap_err();
        assert!(matches!(err, AlmanacError::DegenerateCalendar(name) if name == "Husk"));
    }

    #[test]
    fn test_day_summary_on_a_month_day() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);

        // No date supplied: falls back to the provider's today (2-1-4)
        let summary = almanac.day_summary(None).unwrap();
        assert_eq!(summary.date, WireDate::new(2, 1, 4));
        assert_eq!(summary.month.as_deref(), Some("Kindle"));
        assert!(summary.festival.is_none());
        // progress = 3 days into the year's months, week of 3: back to Ash
        assert_eq!(summary.weekday.as_deref(), Some("Ash"));
        assert_eq!(summary.season.as_deref(), Some("Burn"));
        assert!(summary.time_period.is_none());
        assert_eq!(summary.moons.len(), 1);
        assert_eq!(summary.moons[0].moon, "Cinder");
        assert_eq!(summary.year.era, 1);
    }

    #[test]
    fn test_day_summary_on_a_festival_day() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);

        let summary = almanac.day_summary(Some(WireDate::new(2, 1, 8))).unwrap();
        let festival = summary.festival.unwrap();
        assert_eq!(festival.name, "Stoking");
        assert_eq!(festival.day, 2);
        // Festival days stand outside the week
        assert!(summary.weekday.is_none());
        assert_eq!(summary.month.as_deref(), Some("Kindle"));
    }

    #[test]
    fn test_day_summary_carries_time_period() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);

        let date = WireDate::new(2, 1, 4).with_time(crate::core::types::TimeOfDay::new(14, 0, 0));
        let summary = almanac.day_summary(Some(date)).unwrap();
        assert_eq!(summary.time_period.as_deref(), Some("Afternoon"));
    }

    #[test]
    fn test_year_info_from_provider_date() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);
        let info = almanac.year_info(None).unwrap();
        assert_eq!(info.year, 2);
        assert_eq!(info.year_in_era, 2);
    }

    #[test]
    fn test_event_queries_share_date_checks() {
        let provider = rim_provider();
        let almanac = Almanac::new(&provider);

        let bad = WireDate::new(1, 9, 1);
        let good = WireDate::new(1, 1, 1);
        assert!(matches!(
            almanac.eclipses_in(bad, good),
            Err(AlmanacError::MalformedDate(_, _))
        ));
        assert!(matches!(
            almanac.conjunctions_in(good, bad, &ConjunctionConfig::default()),
            Err(AlmanacError::MalformedDate(_, _))
        ));
        // One moon: ranges are searchable but never match
        assert!(almanac.eclipses_in(good, WireDate::new(1, 2, 6)).unwrap().is_empty());
    }
}
