//! Academic year 2025 (2025-04-01 to 2026-03-31).
//!
//! National holidays are folded into the common cancellation set, makeup days
//! are checked before cancellations, and dates outside every rule count as
//! class days.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{date_set, ymd};
use crate::{Breaks, Campus, CampusDateSets, DateRange, DayCategory, RuleSet, Tier, TierOrder};

pub const ACADEMIC_YEAR: i32 = 2025;

const TERMS: [DateRange; 3] = [
    // spring term
    DateRange::literal(ymd(2025, 4, 7), ymd(2025, 7, 21)),
    // autumn term, up to winter break
    DateRange::literal(ymd(2025, 9, 22), ymd(2025, 12, 24)),
    // autumn term, resumed after winter break
    DateRange::literal(ymd(2026, 1, 8), ymd(2026, 1, 21)),
];

const EXAMS: [DateRange; 2] = [
    DateRange::literal(ymd(2025, 7, 22), ymd(2025, 8, 4)),
    DateRange::literal(ymd(2026, 1, 22), ymd(2026, 2, 4)),
];

const SUMMER_BREAK: DateRange = DateRange::literal(ymd(2025, 8, 5), ymd(2025, 9, 20));
const WINTER_BREAK: DateRange = DateRange::literal(ymd(2025, 12, 25), ymd(2026, 1, 7));
const SPRING_BREAK: DateRange = DateRange::literal(ymd(2026, 2, 5), ymd(2026, 3, 31));

const KYUKO_COMMON: [NaiveDate; 13] = [
    ymd(2025, 4, 29),
    ymd(2025, 5, 3),
    ymd(2025, 5, 4),
    ymd(2025, 5, 5),
    ymd(2025, 5, 6),
    ymd(2025, 7, 21),
    ymd(2025, 9, 23),
    ymd(2025, 10, 13),
    ymd(2025, 11, 3),
    ymd(2025, 11, 23),
    ymd(2025, 11, 24),
    ymd(2026, 1, 12),
    // entrance examination preparation
    ymd(2026, 1, 16),
];

// campus festivals
const KYUKO_AOYAMA: [NaiveDate; 2] = [ymd(2025, 10, 31), ymd(2025, 11, 1)];
const KYUKO_SAGAMIHARA: [NaiveDate; 2] = [ymd(2025, 10, 10), ymd(2025, 10, 11)];

const MAKEUP_COMMON: [NaiveDate; 2] = [ymd(2025, 7, 19), ymd(2025, 12, 20)];
const MAKEUP_SAGAMIHARA: [NaiveDate; 1] = [ymd(2025, 10, 18)];

const TIERS: [Tier; 5] = [Tier::Break, Tier::Exam, Tier::Makeup, Tier::Kyuko, Tier::Term];

/// Builds the 2025 rule set
pub fn rule_set() -> RuleSet {
    RuleSet {
        academic_year:     ACADEMIC_YEAR,
        terms:             TERMS.to_vec(),
        breaks:            Breaks {
            summer: SUMMER_BREAK,
            winter: WINTER_BREAK,
            spring: SPRING_BREAK,
        },
        exams:             EXAMS.to_vec(),
        kyuko:             CampusDateSets {
            common:    date_set(&KYUKO_COMMON),
            by_campus: BTreeMap::from([
                (Campus::Aoyama, date_set(&KYUKO_AOYAMA)),
                (Campus::Sagamihara, date_set(&KYUKO_SAGAMIHARA)),
            ]),
        },
        makeup:            CampusDateSets {
            common:    date_set(&MAKEUP_COMMON),
            by_campus: BTreeMap::from([(Campus::Sagamihara, date_set(&MAKEUP_SAGAMIHARA))]),
        },
        forced_class_days: None,
        national_holidays: None,
        tiers:             TierOrder::new(TIERS),
        fallback:          DayCategory::ClassDay,
    }
}
