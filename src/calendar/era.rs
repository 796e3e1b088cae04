//! Era reckoning: 77-year cycles with composed year names.
//!
//! Years group into eras of 77. Each year within an era carries a name
//! composed from two shorter cycles, eleven patrons and seven aspects,
//! giving 77 distinct names before the pattern repeats. Year 1 of every
//! era is the first patron's first aspect.

use serde::Serialize;

/// Years in one era. Also the period of the composed name cycle, since the
/// patron and aspect list lengths are coprime.
pub const ERA_LENGTH_YEARS: i64 = 77;

/// Patron names, cycling every 11 years.
pub const ERA_PATRONS: [&str; 11] = [
    "Argent", "Friend", "Desert", "Priest", "Wind", "Dragon", "Mountain", "King", "Silt",
    "Enemy", "Sanguine",
];

/// Aspect names, cycling every 7 years.
pub const ERA_ASPECTS: [&str; 7] = [
    "Fury", "Contemplation", "Vengeance", "Slumber", "Defiance", "Reverence", "Agitation",
];

/// Where a year sits in the era cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearInfo {
    /// The absolute year as asked
    pub year: i64,
    /// 1-based era number; year 1 opens era 1
    pub era: i64,
    /// 1-based position within the era, 1..=77
    pub year_in_era: i64,
    /// Composed name of this year within its era
    pub era_name: String,
}

/// Era placement for an absolute year. Total over all of `i64`; years at or
/// before 0 simply land in era 0 and below.
pub fn year_info(year: i64) -> YearInfo {
    let era = (year - 1).div_euclid(ERA_LENGTH_YEARS) + 1;
    let year_in_era = (year - 1).rem_euclid(ERA_LENGTH_YEARS) + 1;
    YearInfo { year, era, year_in_era, era_name: era_year_name(year_in_era) }
}

/// Composed name for a 1-based year of an era: the patron and aspect lists
/// advance together, one step per year.
pub fn era_year_name(year_in_era: i64) -> String {
    let patron = ERA_PATRONS[(year_in_era - 1).rem_euclid(ERA_PATRONS.len() as i64) as usize];
    let aspect = ERA_ASPECTS[(year_in_era - 1).rem_euclid(ERA_ASPECTS.len() as i64) as usize];
    format!("{}'s {}", patron, aspect)
}
