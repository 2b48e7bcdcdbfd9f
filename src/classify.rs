//! Day classification.
//!
//! Sundays are decided before anything else. Every other date walks the rule
//! set's own tier order and stops at the first tier that matches, falling back
//! to the rule set's default category when none does.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::trace;

use crate::prelude::*;
use crate::{Campus, DayCategory, RuleSet, Tier};

/// What decided a date's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "tier")]
pub enum Resolution {
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "tier:{_0}")]
    Tier(Tier),
    #[display(fmt = "fallback")]
    Fallback,
}

/// A category together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category:   DayCategory,
    pub resolution: Resolution,
}

/// Classifies a date for a campus under one academic year's rules.
///
/// Total: every date yields exactly one category, whether or not it lies in
/// the rule set's academic year.
pub fn categorize(date: NaiveDate, campus: Campus, rules: &RuleSet) -> DayCategory {
    classify(date, campus, rules).category
}

/// Like [`categorize`], but also reports which rule decided.
pub fn classify(date: NaiveDate, campus: Campus, rules: &RuleSet) -> Classification {
    let classification = if date.weekday() == Weekday::Sun {
        Classification {
            category:   DayCategory::Sunday,
            resolution: Resolution::Sunday,
        }
    } else {
        rules
            .tiers()
            .iter()
            .find_map(|tier| {
                evaluate(*tier, date, campus, rules).map(|category| Classification {
                    category,
                    resolution: Resolution::Tier(*tier),
                })
            })
            .unwrap_or(Classification {
                category:   rules.fallback(),
                resolution: Resolution::Fallback,
            })
    };

    trace!(
        %date,
        %campus,
        academic_year = rules.academic_year(),
        category = %classification.category,
        resolution = %classification.resolution,
        "classified day"
    );
    classification
}

fn evaluate(tier: Tier, date: NaiveDate, campus: Campus, rules: &RuleSet) -> Option<DayCategory> {
    match tier {
        Tier::Break => rules.breaks().category_for(date),
        Tier::Exam => rules
            .exams()
            .iter()
            .any(|range| range.contains(date))
            .then_some(DayCategory::Exam),
        Tier::ForcedClassDay => rules
            .forced_class_days()
            .is_some_and(|set| set.contains(date))
            .then_some(DayCategory::ClassDay),
        Tier::Makeup => {
            let makeup = rules.makeup();
            (makeup.contains_common(date) || makeup.contains_for_campus(date, campus)).then_some(DayCategory::Makeup)
        },
        Tier::Kyuko => {
            let kyuko = rules.kyuko();
            let cancelled = kyuko.contains_common(date)
                || rules.national_holidays().is_some_and(|set| set.contains(date))
                || kyuko.contains_for_campus(date, campus);
            cancelled.then_some(DayCategory::Kyuko)
        },
        Tier::Term => rules
            .terms()
            .iter()
            .any(|range| range.contains(date))
            .then_some(DayCategory::ClassDay),
    }
}
