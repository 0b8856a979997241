//! Calendar arithmetic behind every panel.
//!
//! Works on the proleptic Gregorian calendar with no time of day and no time
//! zone. Weekdays are numbered Sunday = 0 through Saturday = 6, matching the
//! column order of a day grid.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::CalendarDate;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

fn naive(year: u16, month: u8, day: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
}

fn first_of_month(year: u16, month: u8) -> Option<NaiveDate> {
    naive(year, month, MIN_DAY)
}

/// `date` as a chrono date. Every `CalendarDate` is a real date.
pub(crate) fn to_naive(date: CalendarDate) -> Option<NaiveDate> {
    naive(date.year(), date.month(), date.day())
}

/// Converts back from chrono, saturating at `0001-01-01` and `9999-12-31`.
pub(crate) fn from_naive(date: NaiveDate) -> CalendarDate {
    if date.year() > i32::from(MAX_YEAR) {
        return CalendarDate::saturating(i64::from(MAX_YEAR), DECEMBER, MAX_DAY);
    }
    if date.year() < 1 {
        return CalendarDate::saturating(1, JANUARY, MIN_DAY);
    }
    CalendarDate::saturating(
        i64::from(date.year()),
        u8::try_from(date.month()).unwrap_or(JANUARY),
        u8::try_from(date.day()).unwrap_or(MIN_DAY),
    )
}

fn checked_shift(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Moves `(year, month)` by `delta` months. Saturates at `0001-01` and `9999-12`.
pub fn shift_month(year: u16, month: u8, delta: i32) -> (u16, u8) {
    let fallback = if delta >= 0 { (MAX_YEAR, DECEMBER) } else { (1, JANUARY) };
    let Some(shifted) = first_of_month(year, month).and_then(|first| checked_shift(first, delta))
    else {
        return fallback;
    };
    let shifted = from_naive(shifted);
    (shifted.year(), shifted.month())
}

/// Weekday of the first day of the month, 0 (Sunday) through 6 (Saturday).
/// This is also the number of leading blank cells in the month's grid.
pub fn first_weekday_of_month(year: u16, month: u8) -> u8 {
    first_of_month(year, month)
        .and_then(|first| u8::try_from(first.weekday().num_days_from_sunday()).ok())
        .unwrap_or(0)
}

/// Blank cells needed after the last day so the grid fills whole weeks.
pub const fn trailing_blank_count(first_weekday: u8, days_in_month: u8) -> u8 {
    let used = (first_weekday + days_in_month) % DAYS_PER_WEEK;
    if used == 0 { 0 } else { DAYS_PER_WEEK - used }
}

/// Day-of-month of `(year, month, offset)` once normalized into a real date.
///
/// Offsets outside the month spill into its neighbours: `0` is the last day
/// of the previous month, `days + 1` is the first of the next one.
pub fn adjacent_day(year: u16, month: u8, offset: i32) -> u8 {
    let steps = i64::from(offset) - 1;
    let days = Days::new(steps.unsigned_abs());
    first_of_month(year, month)
        .and_then(|first| {
            if steps >= 0 {
                first.checked_add_days(days)
            } else {
                first.checked_sub_days(days)
            }
        })
        .and_then(|date| u8::try_from(date.day()).ok())
        .unwrap_or(MIN_DAY)
}

/// Adds `delta` months to `date`, clamping the day to the target month.
pub fn add_months(date: CalendarDate, delta: i32) -> CalendarDate {
    match to_naive(date).and_then(|naive| checked_shift(naive, delta)) {
        Some(shifted) => from_naive(shifted),
        None => date,
    }
}

/// Mirror of [`add_months`].
pub fn sub_months(date: CalendarDate, delta: i32) -> CalendarDate {
    add_months(date, delta.saturating_neg())
}

/// Panel header text: `"<day> <full month name> <year>"`.
pub fn format_header(date: CalendarDate) -> String {
    format!("{} {} {}", date.day(), date.month_typed().name(), date.year())
}

/// Current UTC date from the system clock.
pub fn today() -> CalendarDate {
    from_naive(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_in_month_matches_next_month_minus_one_day() {
        for year in [1999_u16, 2000, 2023, 2024] {
            for month in 1..=12_u8 {
                let (next_year, next_month) = shift_month(year, month, 1);
                assert_eq!(
                    days_in_month(year, month),
                    adjacent_day(next_year, next_month, 0),
                    "{year}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2023-06-01 was a Thursday, 2024-09-01 a Sunday, 2023-07-01 a Saturday.
        assert_eq!(first_weekday_of_month(2023, 6), 4);
        assert_eq!(first_weekday_of_month(2024, 9), 0);
        assert_eq!(first_weekday_of_month(2023, 7), 6);
        assert_eq!(first_weekday_of_month(1970, 1), 4);
        assert_eq!(first_weekday_of_month(1, 1), 1);
        assert_eq!(first_weekday_of_month(2000, 3), 3);
    }

    #[test]
    fn test_trailing_blank_count() {
        // June 2023: Thursday start, 30 days -> ends Friday, one blank.
        assert_eq!(trailing_blank_count(4, 30), 1);
        // February 2015: Sunday start, 28 days -> exactly four weeks.
        assert_eq!(trailing_blank_count(0, 28), 0);
        // July 2023: Saturday start, 31 days -> ends Monday, five blanks.
        assert_eq!(trailing_blank_count(6, 31), 5);
    }

    #[test]
    fn test_grid_always_fills_whole_weeks() {
        for year in 2020..=2026_u16 {
            for month in 1..=12_u8 {
                let lead = first_weekday_of_month(year, month);
                let days = days_in_month(year, month);
                let trail = trailing_blank_count(lead, days);
                assert_eq!((lead + days + trail) % 7, 0, "{year}-{month:02}");
                assert!(trail < 7);
            }
        }
    }

    #[test]
    fn test_adjacent_day_spills_into_neighbours() {
        // Leading blanks of June 2023 show May 28..=31.
        assert_eq!(adjacent_day(2023, 6, -3), 28);
        assert_eq!(adjacent_day(2023, 6, 0), 31);
        // Trailing blank of June 2023 shows July 1.
        assert_eq!(adjacent_day(2023, 6, 31), 1);
        // March 2024 looks back into a leap February.
        assert_eq!(adjacent_day(2024, 3, 0), 29);
        // January looks back into December of the previous year.
        assert_eq!(adjacent_day(2024, 1, 0), 31);
    }

    #[test]
    fn test_add_twelve_months_keeps_month() {
        for month in 1..=12_u8 {
            let start = date(2023, month, 1);
            let later = add_months(start, 12);
            assert_eq!(later.year(), 2024, "month {month}");
            assert_eq!(later.month(), month);
            assert_eq!(later.day(), 1);
        }
    }

    #[test]
    fn test_add_months_rolls_december_into_january() {
        assert_eq!(add_months(date(2023, 12, 15), 1), date(2024, 1, 15));
        assert_eq!(sub_months(date(2024, 1, 15), 1), date(2023, 12, 15));
        assert_eq!(add_months(date(2023, 6, 10), -18), date(2021, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(sub_months(date(2023, 3, 31), 1), date(2023, 2, 28));
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header(date(2023, 6, 10)), "10 June 2023");
        assert_eq!(format_header(date(1999, 12, 1)), "1 December 1999");
    }

    #[test]
    fn test_add_months_saturates_at_calendar_limits() {
        assert_eq!(add_months(date(9999, 11, 30), 3), date(9999, 12, 31));
        assert_eq!(sub_months(date(1, 2, 10), 5), date(1, 1, 1));
        assert_eq!(shift_month(9999, 12, 1), (9999, 12));
        assert_eq!(shift_month(1, 1, -1), (1, 1));
    }

    #[test]
    fn test_naive_conversion_keeps_components() {
        let naive = to_naive(date(2024, 2, 29)).expect("real date");
        assert_eq!((naive.year(), naive.month(), naive.day()), (2024, 2, 29));
        assert_eq!(from_naive(naive), date(2024, 2, 29));

        let beyond = NaiveDate::from_ymd_opt(10_000, 3, 1).expect("chrono supports year 10000");
        assert_eq!(from_naive(beyond), date(9999, 12, 31));
    }

    #[test]
    fn test_today_is_a_real_date() {
        let now = today();
        assert!(now.year() >= 2024);
        assert!(now.day() <= days_in_month(now.year(), now.month()));
    }
}
