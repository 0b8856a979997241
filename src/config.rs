use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DEFAULT_PANEL_COUNT, DEFAULT_YEAR_WINDOW, Day, ParseError};

/// Construction options of a [`RangeCalendar`](crate::RangeCalendar).
///
/// Deserializes from the host's camelCase option names:
///
/// ```
/// # use range_calendar::CalendarConfig;
/// let config: CalendarConfig =
///     serde_json::from_str(r#"{ "fixedStartDay": 5, "fixedEndDay": 13 }"#)?;
/// assert_eq!(config.panel_count(), 1);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CalendarConfig {
    panel_count:      u8,
    fixed_start_day:  Option<Day>,
    fixed_end_day:    Option<Day>,
    year_window_size: u16,
    today:            Option<CalendarDate>,
}

/// Error type for rejected configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// At least one panel must be shown.
    #[error("Invalid panel count: {0} (must be at least 1)")]
    InvalidPanelCount(u8),

    /// The year grid needs at least one year.
    #[error("Invalid year window size: {0} (must be at least 1)")]
    InvalidYearWindow(u16),

    /// Preset start lies after the preset end.
    #[error("Invalid preset range: start day {start} is after end day {end}")]
    InvalidPreset { start: Day, end: Day },

    /// A day value could not be converted.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            panel_count:      DEFAULT_PANEL_COUNT,
            fixed_start_day:  None,
            fixed_end_day:    None,
            year_window_size: DEFAULT_YEAR_WINDOW,
            today:            None,
        }
    }
}

impl CalendarConfig {
    #[must_use]
    pub const fn with_panel_count(mut self, panel_count: u8) -> Self {
        self.panel_count = panel_count;
        self
    }

    #[must_use]
    pub const fn with_year_window_size(mut self, years: u16) -> Self {
        self.year_window_size = years;
        self
    }

    /// Sets a preset range highlighted independently of interactive selection.
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` if either day is outside `1..=31`.
    pub fn with_fixed_range(mut self, start: u8, end: u8) -> Result<Self, ConfigError> {
        self.fixed_start_day = Some(Day::try_from(start)?);
        self.fixed_end_day = Some(Day::try_from(end)?);
        Ok(self)
    }

    /// Sets only the preset start day.
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` if the day is outside `1..=31`.
    pub fn with_fixed_start_day(mut self, start: u8) -> Result<Self, ConfigError> {
        self.fixed_start_day = Some(Day::try_from(start)?);
        Ok(self)
    }

    /// Sets only the preset end day.
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` if the day is outside `1..=31`.
    pub fn with_fixed_end_day(mut self, end: u8) -> Result<Self, ConfigError> {
        self.fixed_end_day = Some(Day::try_from(end)?);
        Ok(self)
    }

    /// Pins the reference date instead of reading the system clock.
    #[must_use]
    pub const fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn panel_count(&self) -> u8 {
        self.panel_count
    }

    pub fn fixed_start_day(&self) -> Option<u8> {
        self.fixed_start_day.map(Day::get)
    }

    pub fn fixed_end_day(&self) -> Option<u8> {
        self.fixed_end_day.map(Day::get)
    }

    pub const fn year_window_size(&self) -> u16 {
        self.year_window_size
    }

    pub const fn today(&self) -> Option<CalendarDate> {
        self.today
    }

    /// Two or more panels enable interactive range styling.
    pub const fn is_multi_panel(&self) -> bool {
        self.panel_count >= 2
    }

    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_count == 0 {
            return Err(ConfigError::InvalidPanelCount(self.panel_count));
        }
        if self.year_window_size == 0 {
            return Err(ConfigError::InvalidYearWindow(self.year_window_size));
        }
        if let (Some(start), Some(end)) = (self.fixed_start_day, self.fixed_end_day) {
            if start > end {
                return Err(ConfigError::InvalidPreset { start, end });
            }
        }
        Ok(())
    }
}
