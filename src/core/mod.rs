pub mod calendar;
pub mod diff;
pub mod format;

pub use crate::domain::model::{CalendarDifference, Timestamp};
pub use crate::domain::ports::CalendarFields;
pub use crate::utils::error::Result;
