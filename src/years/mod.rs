//! Compiled-in rule tables, one module per academic year.
//!
//! Dates are written as `const` items so that an impossible literal such as
//! February 30 fails the build instead of surfacing at runtime.

pub mod ay2025;
pub mod ay2026;

use chrono::NaiveDate;

use crate::{DateSet, RuleSet};

/// Every rule set shipped with the crate, oldest first
pub fn builtin_rule_sets() -> Vec<RuleSet> {
    vec![ay2025::rule_set(), ay2026::rule_set()]
}

pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date literal"),
    }
}

pub(crate) fn date_set(dates: &[NaiveDate]) -> DateSet {
    dates.iter().copied().collect()
}
