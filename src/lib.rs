pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::calendar::{days_in_month, is_leap_year};
pub use crate::core::diff::{diff, diff_fields};
pub use crate::core::format::FormatOptions;
pub use crate::domain::model::{CalendarDifference, DiffReport, Timestamp};
pub use crate::domain::ports::CalendarFields;
pub use crate::utils::error::{DiffError, Result};
