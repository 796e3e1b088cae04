//! Sky-event detection: bounded day scans for eclipses and conjunctions.

pub mod conjunction;
pub mod eclipse;
pub mod scan;

pub use conjunction::{ConjunctionConfig, ConjunctionEvent, DEFAULT_TOLERANCE_DEG};
pub use eclipse::{EclipseEvent, EclipseKind};
pub use scan::{ScanDirection, DEFAULT_HORIZON_YEARS};
