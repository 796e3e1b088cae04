pub mod error;
pub mod types;

pub use error::{AlmanacError, Result};
pub use types::{AbsoluteDay, InternalDate, TimeOfDay, WireDate};
