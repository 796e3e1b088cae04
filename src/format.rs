//! Plain-text rendering of query results.

use serde::Serialize;

use crate::almanac::DaySummary;
use crate::astronomy::{MoonPhaseRecord, PhaseDetail};
use crate::calendar::description::CalendarDescription;
use crate::calendar::era::YearInfo;
use crate::calendar::meta::CalendarMeta;
use crate::core::error::Result;
use crate::events::conjunction::ConjunctionEvent;
use crate::events::eclipse::EclipseEvent;

/// Pretty JSON for any serializable query result.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// English ordinal suffix form: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn ordinal(n: i64) -> String {
    let suffix = match (n.abs() % 10, n.abs() % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

pub fn format_year_info(info: &YearInfo) -> String {
    format!(
        "Year {}: {}, {} year of the {} era",
        info.year,
        info.era_name,
        ordinal(info.year_in_era),
        ordinal(info.era)
    )
}

/// One line per moon: name, phase, cycle position, model detail, and
/// distances to new and full where the model knows them.
pub fn format_moon(record: &MoonPhaseRecord) -> String {
    let mut line = format!(
        "{}: {} (day {} of {})",
        record.moon,
        record.phase,
        trim_days(record.age),
        trim_days(record.cycle_length)
    );
    match record.detail {
        PhaseDetail::Segment { index } => {
            line.push_str(&format!(", segment {}", index + 1));
        }
        PhaseDetail::Illumination { percent } => {
            line.push_str(&format!(", {percent}% lit"));
        }
    }
    if let Some(days) = record.days_until_full {
        line.push_str(&format!(", full in {} days", trim_days(days)));
    }
    if let Some(days) = record.days_until_new {
        line.push_str(&format!(", new in {} days", trim_days(days)));
    }
    line
}

pub fn format_eclipse(event: &EclipseEvent) -> String {
    format!("{}  {}", event.date, event.kind.name())
}

pub fn format_conjunction(event: &ConjunctionEvent) -> String {
    let visibility = if event.visible { "visible" } else { "lost in the glare" };
    format!(
        "{}  {} and {} {:.1} degrees apart ({})",
        event.date, event.moons[0], event.moons[1], event.separation_deg, visibility
    )
}

/// Multi-line calendar overview: months with their trailing festival
/// blocks, week, seasons, and moons. Totals come from the derived layout,
/// so blocks naming an unknown month are not counted.
pub fn format_calendar_info(calendar: &CalendarDescription) -> String {
    let meta = CalendarMeta::build(calendar);
    let total_month: i64 = calendar.months.iter().map(|m| m.day_count()).sum();

    let mut lines = vec![calendar.name.clone()];
    lines.push(format!(
        "  {} months, {} days ({} in months, {} in festivals)",
        calendar.months.len(),
        meta.days_per_year,
        total_month,
        meta.days_per_year - total_month
    ));

    for month in &calendar.months {
        lines.push(format!("    {} ({} days)", month.name, month.day_count()));
        for block in calendar.intercalary.iter().filter(|b| b.after == month.name) {
            lines.push(format!("      + {} ({} days)", block.name, block.day_count()));
        }
    }

    if !calendar.weekdays.is_empty() {
        lines.push(format!("  Week: {}", calendar.weekdays.join(", ")));
    }
    for season in &calendar.seasons {
        lines.push(format!(
            "  Season {}: months {} to {}",
            season.name, season.start_month, season.end_month
        ));
    }
    for moon in &calendar.moons {
        let model = if moon.phases.is_empty() { "fraction model" } else { "authored segments" };
        lines.push(format!("  Moon {}: {} day cycle, {}", moon.name, moon.cycle_length, model));
    }

    lines.join("\n")
}

pub fn format_summary(summary: &DaySummary) -> String {
    let mut lines = Vec::new();

    let place = match (&summary.festival, &summary.month) {
        (Some(festival), _) => format!("{} of {}, a festival day", ordinal(festival.day), festival.name),
        (None, Some(month)) => format!("{} of {}", ordinal(summary.date.day as i64), month),
        (None, None) => "an unplaced day".to_string(),
    };
    lines.push(format!("{}: {}", summary.date, place));
    lines.push(format!("  {}", format_year_info(&summary.year)));

    if let Some(weekday) = &summary.weekday {
        lines.push(format!("  Weekday: {weekday}"));
    }
    if let Some(season) = &summary.season {
        lines.push(format!("  Season: {season}"));
    }
    if let Some(period) = &summary.time_period {
        lines.push(format!("  Time: {period}"));
    }
    for moon in &summary.moons {
        lines.push(format!("  {}", format_moon(moon)));
    }

    lines.join("\n")
}

/// Day counts print as integers when whole, one decimal otherwise.
fn trim_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as i64)
    } else {
        format!("{days:.1}")
    }
}
