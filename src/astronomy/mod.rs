//! Moon-phase computation: cycle anchoring and the two phase models.

pub mod aggregate;
pub mod fraction;
pub mod phase;
pub mod segment;

pub use aggregate::phases_for_date;
pub use phase::{LunarPhase, MoonCycle, MoonPhaseRecord, PhaseDetail};
