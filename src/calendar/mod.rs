//! Calendar structure: authored descriptions, derived layout, date
//! arithmetic, era reckoning, and the small presentation resolvers.

pub mod convert;
pub mod description;
pub mod era;
pub mod meta;
pub mod resolve;

pub use description::CalendarDescription;
pub use era::YearInfo;
pub use meta::{CalendarMeta, MetaCache};
