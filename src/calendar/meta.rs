//! Derived month layout and its per-calendar cache.
//!
//! Calendars are authored as month lists with festival blocks wedged between
//! them. Everything the arithmetic needs is two derived facts: where each
//! month starts within the year, and how long the year is. Building those is
//! cheap but happens on every query path, so metas are cached per calendar.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use crate::calendar::description::CalendarDescription;

/// Immutable layout facts derived from a calendar description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMeta {
    /// 0-based day-of-year on which each month begins
    pub month_starts: Vec<i64>,
    /// Total days in one year, festival blocks included
    pub days_per_year: i64,
}

impl CalendarMeta {
    /// Walks the month list once, accumulating day counts. Festival blocks
    /// extend the stretch after the month they name; blocks naming a month
    /// that does not exist contribute nothing.
    pub fn build(calendar: &CalendarDescription) -> Self {
        let mut month_starts = Vec::with_capacity(calendar.months.len());
        let mut offset: i64 = 0;

        for month in &calendar.months {
            month_starts.push(offset);
            offset += month.day_count();
            for block in &calendar.intercalary {
                if block.after == month.name {
                    offset += block.day_count();
                }
            }
        }

        for block in &calendar.intercalary {
            if calendar.month_index(&block.after).is_none() {
                warn!(
                    block = %block.name,
                    after = %block.after,
                    "intercalary block names an unknown month, ignoring"
                );
            }
        }

        Self { month_starts, days_per_year: offset }
    }

    pub fn month_count(&self) -> usize {
        self.month_starts.len()
    }

    /// A calendar with no months or no days supports no date arithmetic.
    pub fn is_degenerate(&self) -> bool {
        self.month_starts.is_empty() || self.days_per_year <= 0
    }

    /// Days addressable under a month: its own days plus any festival
    /// blocks trailing it. The highest valid day number of the month.
    pub fn month_span(&self, month: usize) -> Option<i64> {
        let start = *self.month_starts.get(month)?;
        let end = match self.month_starts.get(month + 1) {
            Some(next) => *next,
            None => self.days_per_year,
        };
        Some(end - start)
    }
}

type CacheEntry = (Arc<CalendarDescription>, Arc<CalendarMeta>);

/// Cache of built metas, keyed by the identity of the description they were
/// built from. Two providers sharing one `Arc<CalendarDescription>` share
/// one meta; a reloaded description gets a fresh entry. Each entry holds
/// its description, so a cached key's allocation is never reused by a
/// later description landing at the same address.
#[derive(Debug, Default)]
pub struct MetaCache {
    inner: Mutex<HashMap<usize, CacheEntry>>,
}

impl MetaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached meta for this description, building it first if
    /// absent. Racing builders produce identical metas, so whichever entry
    /// lands first wins.
    pub fn meta_for(&self, calendar: &Arc<CalendarDescription>) -> Arc<CalendarMeta> {
        let key = Arc::as_ptr(calendar) as usize;
        if let Some((_, meta)) = self.lock().get(&key) {
            return Arc::clone(meta);
        }
        let built = Arc::new(CalendarMeta::build(calendar));
        let mut entries = self.lock();
        let (_, meta) = entries.entry(key).or_insert((Arc::clone(calendar), built));
        Arc::clone(meta)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<usize, CacheEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
