//! Selects the rule set for a date's academic year.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    Campus, DayCategory, GRID_CELLS, RuleSet, RuleSetError, academic_year, categorize, civil_date, month_grid,
    years,
};

/// What the router does when no rule set is registered for a date's academic year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearFallback {
    /// Report [`RouterError::UnsupportedAcademicYear`]
    #[default]
    Strict,
    /// Use the earliest registered rule set and log a warning
    EarliestKnown,
}

/// Router settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouterConfig {
    pub fallback: YearFallback,
}

/// Error type for routing and registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("No rule set registered for academic year {academic_year} (date {date})")]
    UnsupportedAcademicYear { academic_year: i32, date: NaiveDate },

    #[error("A rule set for academic year {0} is already registered")]
    DuplicateAcademicYear(i32),

    #[error(transparent)]
    InvalidRuleSet(#[from] RuleSetError),
}

/// Owns one rule set per academic year and dispatches dates to them.
///
/// Immutable once built, so a shared reference can serve any number of
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct CalendarRouter {
    rule_sets: BTreeMap<i32, RuleSet>,
    config:    RouterConfig,
}

impl CalendarRouter {
    /// Creates an empty router
    pub fn new(config: RouterConfig) -> Self {
        Self {
            rule_sets: BTreeMap::new(),
            config,
        }
    }

    /// Router holding every compiled-in academic year, with strict routing
    pub fn builtin() -> Self {
        Self::with_builtin_years(RouterConfig::default())
    }

    /// Router holding every compiled-in academic year
    pub fn with_builtin_years(config: RouterConfig) -> Self {
        let rule_sets = years::builtin_rule_sets()
            .into_iter()
            .map(|rules| (rules.academic_year(), rules))
            .collect();
        Self { rule_sets, config }
    }

    /// Adds a rule set after validating it.
    ///
    /// # Errors
    /// Returns `RouterError::InvalidRuleSet` if the table is malformed, or
    /// `RouterError::DuplicateAcademicYear` if its year is already covered.
    pub fn register(&mut self, rules: RuleSet) -> Result<(), RouterError> {
        rules.validate()?;
        let year = rules.academic_year();
        if self.rule_sets.contains_key(&year) {
            return Err(RouterError::DuplicateAcademicYear(year));
        }
        info!(academic_year = year, "registered rule set");
        self.rule_sets.insert(year, rules);
        Ok(())
    }

    pub const fn config(&self) -> RouterConfig {
        self.config
    }

    /// Registered academic years, ascending
    pub fn academic_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rule_sets.keys().copied()
    }

    /// Returns the rule set governing the date.
    ///
    /// # Errors
    /// Returns `RouterError::UnsupportedAcademicYear` when the date's academic
    /// year has no rule set and the fallback policy is `Strict` (or nothing is
    /// registered at all).
    pub fn route(&self, date: NaiveDate) -> Result<&RuleSet, RouterError> {
        let year = academic_year(date);
        if let Some(rules) = self.rule_sets.get(&year) {
            debug!(academic_year = year, %date, "routed date");
            return Ok(rules);
        }

        let unsupported = RouterError::UnsupportedAcademicYear {
            academic_year: year,
            date,
        };
        match self.config.fallback {
            YearFallback::Strict => Err(unsupported),
            YearFallback::EarliestKnown => {
                let (&fallback_year, rules) = self.rule_sets.first_key_value().ok_or(unsupported)?;
                warn!(
                    academic_year = year,
                    fallback_year,
                    %date,
                    "no rule set for academic year, using earliest known"
                );
                Ok(rules)
            },
        }
    }

    /// Classifies a date for a campus under its academic year's rules.
    ///
    /// # Errors
    /// See [`CalendarRouter::route`].
    pub fn categorize(&self, date: NaiveDate, campus: Campus) -> Result<DayCategory, RouterError> {
        let rules = self.route(date)?;
        Ok(categorize(date, campus, rules))
    }

    /// Classifies the campus civil date of an instant.
    ///
    /// # Errors
    /// See [`CalendarRouter::route`].
    pub fn categorize_instant<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        campus: Campus,
    ) -> Result<DayCategory, RouterError> {
        self.categorize(civil_date(instant), campus)
    }

    /// The 42-day grid for the month containing `reference`. Routing plays
    /// no part in the layout, so this is [`month_grid`] under the router's name.
    pub fn grid_days(reference: NaiveDate) -> [NaiveDate; GRID_CELLS] {
        month_grid(reference)
    }

    /// Grid days paired with their categories. Each cell is routed on its
    /// own, so a grid spanning March and April draws on two rule sets, and a
    /// cell outside every registered year carries its own error while the
    /// rest of the grid still classifies.
    pub fn categorize_grid(
        &self,
        reference: NaiveDate,
        campus: Campus,
    ) -> [(NaiveDate, Result<DayCategory, RouterError>); GRID_CELLS] {
        month_grid(reference).map(|date| (date, self.categorize(date, campus)))
    }
}
