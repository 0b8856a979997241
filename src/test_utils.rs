//! Fixtures shared by the unit tests.

use crate::{CalendarConfig, CalendarDate, RangeCalendar, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn year_month(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).expect("test month should be valid")
}

/// Fixed reference date so year grids are deterministic.
pub fn reference_today() -> CalendarDate {
    date(2024, 3, 15)
}

pub fn calendar(config: CalendarConfig) -> RangeCalendar {
    RangeCalendar::new(config.with_today(reference_today())).expect("test config should be valid")
}
