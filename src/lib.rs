//! Academic calendar classification for a two-campus university.
//!
//! Given a civil date and a campus, decide what kind of academic day it is
//! (class day, Sunday, cancelled, makeup, exam, or one of the three breaks),
//! and lay out the six-week grid a month view renders.
//!
//! ```
//! use academic_calendar::{CalendarRouter, Campus, DayCategory};
//! use chrono::NaiveDate;
//!
//! let router = CalendarRouter::builtin();
//! let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
//! assert_eq!(router.categorize(date, Campus::Aoyama).unwrap(), DayCategory::SummerBreak);
//! ```

mod classify;
mod consts;
mod grid;
mod prelude;
mod range;
mod router;
mod rules;
mod types;
mod year;
pub mod years;

pub use classify::{Classification, Resolution, categorize, classify};
pub use consts::*;
pub use grid::{month_grid, month_grid_rows};
pub use range::{DateRange, DateSet, RangeError};
pub use router::{CalendarRouter, RouterConfig, RouterError, YearFallback};
pub use rules::{Breaks, CampusDateSets, RuleSet, RuleSetError, Tier, TierOrder};
pub use types::{Campus, DayCategory};
pub use year::{academic_year, civil_date};

use crate::prelude::*;

/// Error parsing a campus or category name
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unknown campus: {_0}")]
    UnknownCampus(String),
    #[display(fmt = "Unknown day category: {_0}")]
    UnknownCategory(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
