//! Cindersky - deterministic calendar arithmetic and moon tracking for
//! invented worlds.
//!
//! The library answers questions about a host-authored fantasy calendar:
//! where a date falls on the absolute day line, which 77-year era a year
//! belongs to, what phase each moon shows, and when the sky next aligns.
//! Everything is computed on demand from a [`provider::CalendarProvider`];
//! nothing is global and nothing does I/O past the provider boundary.

pub mod almanac;
pub mod astronomy;
pub mod calendar;
pub mod cli;
pub mod core;
pub mod events;
pub mod format;
pub mod provider;

pub use almanac::{Almanac, DaySummary};
pub use provider::{CalendarProvider, StaticProvider};
pub use self::core::error::{AlmanacError, Result};
pub use self::core::types::{AbsoluteDay, InternalDate, TimeOfDay, WireDate};
