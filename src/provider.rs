//! Where calendars come from.
//!
//! The engine never reaches for an ambient "the calendar"; every query runs
//! against a provider the caller passes in. Hosts embedding the engine
//! implement [`CalendarProvider`] over whatever owns their world state; the
//! bundled [`StaticProvider`] serves one calendar loaded from a TOML file.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::calendar::description::CalendarDescription;
use crate::core::error::Result;
use crate::core::types::WireDate;

pub trait CalendarProvider {
    /// The calendar queries run against, when one is configured.
    fn active_calendar(&self) -> Option<Arc<CalendarDescription>>;

    /// The world's current date, for queries that omit one.
    fn current_date(&self) -> Option<WireDate> {
        None
    }
}

/// On-disk form: the calendar plus an optional top-level `today` date.
#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(flatten)]
    calendar: CalendarDescription,
    #[serde(default)]
    today: Option<WireDate>,
}

/// Provider over one fixed calendar.
#[derive(Debug, Default)]
pub struct StaticProvider {
    calendar: Option<Arc<CalendarDescription>>,
    today: Option<WireDate>,
}

impl StaticProvider {
    pub fn new(calendar: CalendarDescription) -> Self {
        Self { calendar: Some(Arc::new(calendar)), today: None }
    }

    /// A provider with nothing configured. Queries against it report the
    /// missing-calendar condition.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_today(mut self, today: WireDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Parses a calendar file.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CalendarFile = toml::from_str(text)?;
        debug!(
            calendar = %file.calendar.name,
            months = file.calendar.months.len(),
            moons = file.calendar.moons.len(),
            "calendar loaded"
        );
        Ok(Self { calendar: Some(Arc::new(file.calendar)), today: file.today })
    }

    /// Reads and parses a calendar file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl CalendarProvider for StaticProvider {
    fn active_calendar(&self) -> Option<Arc<CalendarDescription>> {
        self.calendar.clone()
    }

    fn current_date(&self) -> Option<WireDate> {
        self.today
    }
}
