//! Academic-year keys and civil-date conversion.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone};

use crate::consts::{ACADEMIC_YEAR_START_MONTH, CIVIL_UTC_OFFSET_SECS};

const CIVIL_OFFSET: FixedOffset = match FixedOffset::east_opt(CIVIL_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("civil UTC offset out of range"),
};

/// Returns the academic year a date belongs to.
///
/// Academic years run from April 1 to March 31 and are named after the
/// calendar year in which they start.
///
/// ```
/// use academic_calendar::academic_year;
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// let april = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
/// assert_eq!(academic_year(march), 2025);
/// assert_eq!(academic_year(april), 2026);
/// ```
pub fn academic_year(date: NaiveDate) -> i32 {
    if date.month() >= ACADEMIC_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Converts an instant into the campus civil date (UTC+9).
///
/// Weekday and academic-year decisions are made on this date, never on the
/// caller's local calendar.
pub fn civil_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&CIVIL_OFFSET).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_april_through_december_keep_calendar_year() {
        for month in 4..=12 {
            assert_eq!(academic_year(date(2025, month, 1)), 2025, "month {month}");
        }
    }

    #[test]
    fn test_january_through_march_belong_to_previous_year() {
        for month in 1..=3 {
            assert_eq!(academic_year(date(2026, month, 15)), 2025, "month {month}");
        }
    }

    #[test]
    fn test_boundary_days() {
        assert_eq!(academic_year(date(2026, 3, 31)), 2025);
        assert_eq!(academic_year(date(2026, 4, 1)), 2026);
        assert_eq!(academic_year(date(2025, 12, 31)), 2025);
        assert_eq!(academic_year(date(2026, 1, 1)), 2025);
    }

    #[test]
    fn test_civil_date_rolls_over_at_fifteen_utc() {
        let before = Utc.with_ymd_and_hms(2026, 3, 31, 14, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 3, 31, 15, 0, 0).unwrap();

        assert_eq!(civil_date(&before), date(2026, 3, 31));
        assert_eq!(civil_date(&after), date(2026, 4, 1));
    }

    #[test]
    fn test_civil_date_ignores_caller_offset() {
        // 2025-05-03 20:00 in New York is 2025-05-04 09:00 in Tokyo.
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        let instant = new_york.with_ymd_and_hms(2025, 5, 3, 20, 0, 0).unwrap();

        assert_eq!(civil_date(&instant), date(2025, 5, 4));
    }

    #[test]
    fn test_civil_date_cases() {
        struct TestCase {
            instant:     DateTime<FixedOffset>,
            expected:    NaiveDate,
            description: &'static str,
        }

        let tokyo = FixedOffset::east_opt(CIVIL_UTC_OFFSET_SECS).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();
        let cases = [
            TestCase {
                instant:     tokyo.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap(),
                expected:    date(2026, 4, 1),
                description: "campus midnight is already the new day",
            },
            TestCase {
                instant:     utc.with_ymd_and_hms(2025, 12, 31, 15, 0, 0).unwrap(),
                expected:    date(2026, 1, 1),
                description: "new year arrives on campus before UTC",
            },
            TestCase {
                instant:     honolulu.with_ymd_and_hms(2025, 5, 3, 19, 0, 0).unwrap(),
                expected:    date(2025, 5, 4),
                description: "caller nineteen hours behind campus",
            },
            TestCase {
                instant:     honolulu.with_ymd_and_hms(2025, 5, 3, 4, 59, 59).unwrap(),
                expected:    date(2025, 5, 3),
                description: "same calendar day as the caller",
            },
        ];

        for case in &cases {
            assert_eq!(civil_date(&case.instant), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_civil_date_near_end_of_range() {
        let last = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap().and_utc();
        assert_eq!(civil_date(&last), NaiveDate::MAX);
    }
}
