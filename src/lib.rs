//! A headless, multi-panel date-range calendar picker.
//!
//! [`RangeCalendar`] owns the navigation state (year grid, month grid, day
//! grids) and the range selection, and turns both into a [`Frame`] of fully
//! classified cells on every render. Painting is left to the host through the
//! [`Surface`] trait.
//!
//! ```
//! use range_calendar::{CalendarConfig, CalendarDate, DrillLevel, Interaction, RangeCalendar};
//!
//! let today: CalendarDate = "2024-03-15".parse()?;
//! let config = CalendarConfig::default().with_panel_count(2).with_today(today);
//! let mut calendar = RangeCalendar::new(config)?;
//!
//! calendar.handle(Interaction::SelectYear(2023));
//! calendar.handle(Interaction::SelectMonth(6));
//! assert_eq!(calendar.view().level(), DrillLevel::Days);
//!
//! calendar.handle(Interaction::SelectDay { day: 10, panel: 0 });
//! calendar.handle(Interaction::SelectDay { day: 5, panel: 1 });
//! let range = calendar.selected_range().ok_or("range should be complete")?;
//! assert_eq!(range.to_string(), "2023-06-10/2023-07-05");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod calendar;
mod config;
mod consts;
pub mod date_math;
mod prelude;
mod render;
mod selection;
mod surface;
mod types;
mod view;

#[cfg(test)]
mod test_utils;

pub use calendar::{Interaction, RangeCalendar};
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use render::{
    CellStyle, CellStyles, DayCell, Frame, MonthGrid, NavBar, NavButton, PanelGrid, PresetRange,
    YearGrid, render_panel,
};
pub use selection::{Endpoint, RangeSelection, SelectOutcome, SelectedRange};
pub use surface::{Icon, Surface};
pub use types::{Day, Month, Year, YearMonth};
pub use view::{DrillLevel, ViewState, YearWindow};

use crate::prelude::*;
use std::str::FromStr;

/// A concrete calendar day.
///
/// Displays and parses as ISO `YYYY-MM-DD`; serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid day of month: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, validating every component against the calendar.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Builds a date from arithmetic results, clamping each component.
    pub(crate) fn saturating(year: i64, month: u8, day: u8) -> Self {
        let year = Year::saturating(year);
        let month = Month::saturating(month);
        let day = Day::saturating(day, year.get(), month.get());
        Self { year, month, day }
    }

    /// The same day-of-month in another month, clamped to its length.
    pub fn with_year_month(&self, target: YearMonth) -> Self {
        Self::saturating(i64::from(target.year()), target.month(), self.day.get())
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The month this date falls in.
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// Today's UTC date.
    pub fn today() -> Self {
        date_math::today()
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        };

        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
