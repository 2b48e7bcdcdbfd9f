//! Academic year 2026 (2026-04-01 to 2027-03-31).
//!
//! National holidays are kept in their own set and some of them are marked as
//! days on which classes are still held. Overrides are checked before
//! cancellations, cancellations before makeup days, and dates outside every
//! rule count as cancelled.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{date_set, ymd};
use crate::{Breaks, Campus, CampusDateSets, DateRange, DayCategory, RuleSet, Tier, TierOrder};

pub const ACADEMIC_YEAR: i32 = 2026;

const TERMS: [DateRange; 3] = [
    // spring term
    DateRange::literal(ymd(2026, 4, 6), ymd(2026, 7, 25)),
    // autumn term, up to winter break
    DateRange::literal(ymd(2026, 9, 21), ymd(2026, 12, 24)),
    // autumn term, resumed after winter break
    DateRange::literal(ymd(2027, 1, 7), ymd(2027, 1, 22)),
];

const EXAMS: [DateRange; 2] = [
    DateRange::literal(ymd(2026, 7, 27), ymd(2026, 8, 6)),
    DateRange::literal(ymd(2027, 1, 23), ymd(2027, 2, 5)),
];

const SUMMER_BREAK: DateRange = DateRange::literal(ymd(2026, 8, 7), ymd(2026, 9, 20));
const WINTER_BREAK: DateRange = DateRange::literal(ymd(2026, 12, 25), ymd(2027, 1, 6));
const SPRING_BREAK: DateRange = DateRange::literal(ymd(2027, 2, 6), ymd(2027, 3, 31));

const NATIONAL_HOLIDAYS: [NaiveDate; 19] = [
    ymd(2026, 4, 29),
    ymd(2026, 5, 3),
    ymd(2026, 5, 4),
    ymd(2026, 5, 5),
    ymd(2026, 5, 6),
    ymd(2026, 7, 20),
    ymd(2026, 8, 11),
    ymd(2026, 9, 21),
    ymd(2026, 9, 22),
    ymd(2026, 9, 23),
    ymd(2026, 10, 12),
    ymd(2026, 11, 3),
    ymd(2026, 11, 23),
    ymd(2027, 1, 1),
    ymd(2027, 1, 11),
    ymd(2027, 2, 11),
    ymd(2027, 2, 23),
    ymd(2027, 3, 21),
    ymd(2027, 3, 22),
];

// holidays on which classes are still held
const FORCED_CLASS_DAYS: [NaiveDate; 2] = [ymd(2026, 7, 20), ymd(2026, 10, 12)];

// entrance examination preparation and sitting
const KYUKO_COMMON: [NaiveDate; 2] = [ymd(2027, 1, 15), ymd(2027, 1, 16)];

// campus festivals
const KYUKO_AOYAMA: [NaiveDate; 2] = [ymd(2026, 10, 30), ymd(2026, 10, 31)];
const KYUKO_SAGAMIHARA: [NaiveDate; 2] = [ymd(2026, 10, 9), ymd(2026, 10, 10)];

const MAKEUP_COMMON: [NaiveDate; 2] = [ymd(2026, 7, 25), ymd(2026, 12, 19)];
const MAKEUP_SAGAMIHARA: [NaiveDate; 1] = [ymd(2026, 10, 17)];

const TIERS: [Tier; 6] = [
    Tier::Break,
    Tier::Exam,
    Tier::ForcedClassDay,
    Tier::Kyuko,
    Tier::Makeup,
    Tier::Term,
];

/// Builds the 2026 rule set
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
        forced_class_days: Some(date_set(&FORCED_CLASS_DAYS)),
        national_holidays: Some(date_set(&NATIONAL_HOLIDAYS)),
        tiers:             TierOrder::new(TIERS),
        fallback:          DayCategory::Kyuko,
    }
}
