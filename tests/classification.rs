use academic_calendar::{CalendarRouter, Campus, DateRange, DayCategory, RuleSet, categorize, years};
use chrono::{Datelike, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every day of the academic year starting in April of `year`
fn academic_year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    DateRange::new(date(year, 4, 1), date(year + 1, 3, 31)).unwrap().days()
}

fn modeled_years() -> Vec<RuleSet> {
    years::builtin_rule_sets()
}

#[test]
fn test_concrete_scenarios_2025() {
    let router = CalendarRouter::builtin();

    assert_eq!(router.categorize(date(2025, 8, 15), Campus::Aoyama).unwrap(), DayCategory::SummerBreak);
    assert_eq!(router.categorize(date(2025, 5, 4), Campus::Aoyama).unwrap(), DayCategory::Sunday);
    assert_eq!(router.categorize(date(2025, 10, 11), Campus::Sagamihara).unwrap(), DayCategory::Kyuko);
    assert_eq!(router.categorize(date(2025, 10, 11), Campus::Aoyama).unwrap(), DayCategory::ClassDay);
}

#[test]
fn test_concrete_scenarios_2026() {
    let router = CalendarRouter::builtin();

    assert_eq!(router.categorize(date(2026, 10, 12), Campus::Aoyama).unwrap(), DayCategory::ClassDay);
    assert_eq!(router.categorize(date(2026, 11, 23), Campus::Aoyama).unwrap(), DayCategory::Kyuko);
}

#[test]
fn test_router_boundary() {
    let router = CalendarRouter::builtin();

    assert_eq!(router.route(date(2026, 3, 31)).unwrap().academic_year(), 2025);
    assert_eq!(router.route(date(2026, 4, 1)).unwrap().academic_year(), 2026);
}

#[test]
fn test_every_modeled_day_classifies() {
    let router = CalendarRouter::builtin();
    for rules in modeled_years() {
        for day in academic_year_days(rules.academic_year()) {
            for campus in Campus::ALL {
                let category = router.categorize(day, campus).unwrap();
                assert!(DayCategory::ALL.contains(&category), "{day} at {campus}");
            }
        }
    }
}

#[test]
fn test_sundays_are_always_sunday() {
    for rules in modeled_years() {
        let sundays = academic_year_days(rules.academic_year()).filter(|day| day.weekday() == Weekday::Sun);
        for day in sundays {
            for campus in Campus::ALL {
                assert_eq!(
                    categorize(day, campus, &rules),
                    DayCategory::Sunday,
                    "{day} at {campus} in {}",
                    rules.academic_year()
                );
            }
        }
    }
}

#[test]
fn test_non_sunday_break_days_report_their_break() {
    for rules in modeled_years() {
        let breaks = *rules.breaks();
        let ranges = [
            (breaks.summer, DayCategory::SummerBreak),
            (breaks.winter, DayCategory::WinterBreak),
            (breaks.spring, DayCategory::SpringBreak),
        ];
        for (range, expected) in ranges {
            for day in range.days().filter(|day| day.weekday() != Weekday::Sun) {
                for campus in Campus::ALL {
                    assert_eq!(categorize(day, campus, &rules), expected, "{day} at {campus}");
                }
            }
        }
    }
}

#[test]
fn test_non_sunday_exam_days_are_exams() {
    for rules in modeled_years() {
        for range in rules.exams() {
            for day in range.days().filter(|day| day.weekday() != Weekday::Sun) {
                for campus in Campus::ALL {
                    assert_eq!(categorize(day, campus, &rules), DayCategory::Exam, "{day} at {campus}");
                }
            }
        }
    }
}

#[test]
fn test_classification_is_repeatable() {
    let router = CalendarRouter::builtin();
    for day in academic_year_days(2026) {
        for campus in Campus::ALL {
            assert_eq!(router.categorize(day, campus), router.categorize(day, campus));
        }
    }
}

#[test]
fn test_campuses_differ_only_on_campus_specific_days() {
    for rules in modeled_years() {
        for day in academic_year_days(rules.academic_year()) {
            let aoyama = categorize(day, Campus::Aoyama, &rules);
            let sagamihara = categorize(day, Campus::Sagamihara, &rules);
            if aoyama != sagamihara {
                let campus_specific = Campus::ALL.into_iter().any(|campus| {
                    rules.kyuko().contains_for_campus(day, campus) || rules.makeup().contains_for_campus(day, campus)
                });
                assert!(campus_specific, "{day} differs between campuses without a campus rule");
            }
        }
    }
}

#[test]
fn test_shared_router_classifies_across_threads() {
    let router = CalendarRouter::builtin();
    let expected: Vec<_> = academic_year_days(2025)
        .map(|day| router.categorize(day, Campus::Sagamihara).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    academic_year_days(2025)
                        .map(|day| router.categorize(day, Campus::Sagamihara).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
