//! Calendar engine: lunisolar conversion, the sexagenary cycle, solar terms
//! and day-quality lore, surfaced through the [`Oracle`] seam.
//!
//! Everything is table-driven over 1900-2100 (China Standard Time); no
//! astronomy happens at runtime.

mod cycle;
mod data;
mod gods;
mod lunar;
mod officers;
mod oracle;
mod solar;
mod terms;

pub use cycle::{EarthlyBranch, Element, HeavenlyStem, StemBranch};
pub use gods::Position;
pub use lunar::LunarDay;
pub use officers::Officer;
pub use oracle::{BirthSheet, DaySheet, Lunisolar, Oracle};
pub use solar::{looks_like_date, SolarDay};
pub use terms::SolarTerm;

use thiserror::Error;

/// Errors from date parsing and calendar-table lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Invalid date format: expected YYYY-MM-DD, got '{0}'")]
    Unparseable(String),

    #[error("No such calendar date: {0:04}-{1:02}-{2:02}")]
    Nonexistent(i32, u32, u32),

    #[error("Date {0} is outside the supported range 1900-01-31 to 2100-12-31")]
    OutOfRange(SolarDay),
}
