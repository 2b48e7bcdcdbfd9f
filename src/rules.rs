//! Per-academic-year rule tables.
//!
//! A [`RuleSet`] is pure data: term, break and exam ranges, the cancelled and
//! makeup day sets, and the ordered list of tiers the classifier walks. It is
//! built once and only ever read afterwards.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{Campus, DateRange, DateSet, DayCategory, academic_year};

/// One precedence tier between the unconditional Sunday check and the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    /// Summer, winter and spring breaks
    #[display(fmt = "break")]
    Break,
    #[display(fmt = "exam")]
    Exam,
    /// Holidays on which classes are still held
    #[display(fmt = "forcedClassDay")]
    ForcedClassDay,
    #[display(fmt = "makeup")]
    Makeup,
    /// Cancelled classes, including observed national holidays
    #[display(fmt = "kyuko")]
    Kyuko,
    /// Ordinary instruction inside a term
    #[display(fmt = "term")]
    Term,
}

/// Order in which a rule set's tiers are evaluated. First match wins.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierOrder(Vec<Tier>);

impl TierOrder {
    pub fn new(tiers: impl Into<Vec<Tier>>) -> Self {
        Self(tiers.into())
    }
}

/// The three long breaks of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breaks {
    pub summer: DateRange,
    pub winter: DateRange,
    pub spring: DateRange,
}

impl Breaks {
    /// Break category for the date, if it falls in one of the breaks
    pub fn category_for(&self, date: NaiveDate) -> Option<DayCategory> {
        if self.summer.contains(date) {
            Some(DayCategory::SummerBreak)
        } else if self.winter.contains(date) {
            Some(DayCategory::WinterBreak)
        } else if self.spring.contains(date) {
            Some(DayCategory::SpringBreak)
        } else {
            None
        }
    }

    fn ranges(&self) -> [DateRange; 3] {
        [self.summer, self.winter, self.spring]
    }
}

/// Dates that apply to every campus, plus dates that apply to one campus only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusDateSets {
    #[serde(default)]
    pub common:    DateSet,
    #[serde(default)]
    pub by_campus: BTreeMap<Campus, DateSet>,
}

impl CampusDateSets {
    /// Whether the date is in the common set
    pub fn contains_common(&self, date: NaiveDate) -> bool {
        self.common.contains(date)
    }

    /// Whether the date is in the set for this campus only
    pub fn contains_for_campus(&self, date: NaiveDate, campus: Campus) -> bool {
        self.by_campus.get(&campus).is_some_and(|set| set.contains(date))
    }

    fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.common.iter().chain(self.by_campus.values().flat_map(DateSet::iter))
    }
}

/// Error type for malformed rule tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    #[error("Invalid range in academic year {academic_year}: {range} starts after it ends")]
    InvalidRange { academic_year: i32, range: DateRange },

    #[error("Date {date} lies outside academic year {academic_year}")]
    OutOfAcademicYear { academic_year: i32, date: NaiveDate },

    #[error("Tier '{0}' appears more than once in the tier order")]
    DuplicateTier(Tier),

    #[error("Tier '{0}' has rule data but is missing from the tier order")]
    MissingTier(Tier),

    #[error("Fallback category must be classDay or kyuko, found {0}")]
    InvalidFallback(DayCategory),
}

/// Hand-curated calendar facts for one academic year (April 1 to March 31).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub(crate) academic_year:     i32,
    pub(crate) terms:             Vec<DateRange>,
    pub(crate) breaks:            Breaks,
    pub(crate) exams:             Vec<DateRange>,
    pub(crate) kyuko:             CampusDateSets,
    pub(crate) makeup:            CampusDateSets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) forced_class_days: Option<DateSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) national_holidays: Option<DateSet>,
    pub(crate) tiers:             TierOrder,
    pub(crate) fallback:          DayCategory,
}

impl RuleSet {
    pub const fn academic_year(&self) -> i32 {
        self.academic_year
    }

    /// Class-term ranges, in calendar order
    pub fn terms(&self) -> &[DateRange] {
        &self.terms
    }

    pub const fn breaks(&self) -> &Breaks {
        &self.breaks
    }

    pub fn exams(&self) -> &[DateRange] {
        &self.exams
    }

    pub const fn kyuko(&self) -> &CampusDateSets {
        &self.kyuko
    }

    pub const fn makeup(&self) -> &CampusDateSets {
        &self.makeup
    }

    /// Holidays explicitly designated as normal instructional days, if modeled for this year
    pub const fn forced_class_days(&self) -> Option<&DateSet> {
        self.forced_class_days.as_ref()
    }

    /// Observed national holidays that cancel classes, if modeled separately for this year
    pub const fn national_holidays(&self) -> Option<&DateSet> {
        self.national_holidays.as_ref()
    }

    pub const fn tiers(&self) -> &TierOrder {
        &self.tiers
    }

    /// Category used when no tier matches
    pub const fn fallback(&self) -> DayCategory {
        self.fallback
    }

    /// Checks the table for authoring mistakes.
    ///
    /// # Errors
    /// Returns the first problem found: an unordered range, a date outside the
    /// academic year, a duplicated or missing tier, or a fallback other than
    /// `classDay`/`kyuko`.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        let ranges = self.terms.iter().chain(self.exams.iter()).copied().chain(self.breaks.ranges());
        for range in ranges {
            if !range.is_ordered() {
                return Err(RuleSetError::InvalidRange {
                    academic_year: self.academic_year,
                    range,
                });
            }
            self.check_in_year(range.start())?;
            self.check_in_year(range.end())?;
        }

        let optional_dates = self
            .forced_class_days
            .iter()
            .chain(self.national_holidays.iter())
            .flat_map(DateSet::iter);
        for date in self.kyuko.dates().chain(self.makeup.dates()).chain(optional_dates) {
            self.check_in_year(date)?;
        }

        let mut seen = HashSet::new();
        for tier in self.tiers.iter() {
            if !seen.insert(*tier) {
                return Err(RuleSetError::DuplicateTier(*tier));
            }
        }
        for tier in self.required_tiers() {
            if !seen.contains(&tier) {
                return Err(RuleSetError::MissingTier(tier));
            }
        }

        if !matches!(self.fallback, DayCategory::ClassDay | DayCategory::Kyuko) {
            return Err(RuleSetError::InvalidFallback(self.fallback));
        }
        Ok(())
    }

    fn check_in_year(&self, date: NaiveDate) -> Result<(), RuleSetError> {
        if academic_year(date) == self.academic_year {
            Ok(())
        } else {
            Err(RuleSetError::OutOfAcademicYear {
                academic_year: self.academic_year,
                date,
            })
        }
    }

    /// Tiers whose data would be unreachable if left out of the order
    fn required_tiers(&self) -> Vec<Tier> {
        let mut required = vec![Tier::Break, Tier::Exam, Tier::Makeup, Tier::Kyuko, Tier::Term];
        if self.forced_class_days.is_some() {
            required.push(Tier::ForcedClassDay);
        }
        required
    }
}
