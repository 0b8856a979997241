//! Drill-level navigation: which grid is showing and which months the panels display.

use serde::{Deserialize, Serialize};

use crate::consts::YEAR_PAGE_SIZE;
use crate::date_math::{add_months, sub_months};
use crate::{CalendarDate, Month, Year, YearMonth};

/// Granularity of the grid currently offered to the user.
///
/// Moves forward only through a selection (`Years` → `Months` → `Days`);
/// the header affordance moves back (see [`ViewState::toggle_years_months`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrillLevel {
    #[default]
    Years,
    Months,
    Days,
}

/// The list of selectable years, newest first, paged [`YEAR_PAGE_SIZE`] at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    newest: Year,
    total:  usize,
    offset: usize,
}

impl YearWindow {
    /// Offers `size` years counting back from `newest`, stopping at year 1.
    pub fn new(newest: Year, size: u16) -> Self {
        let available = usize::from(newest.get());
        Self {
            newest,
            total: usize::from(size).min(available),
            offset: 0,
        }
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    /// Index of the first year on the current page.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Highest offset a page may start at.
    pub const fn max_offset(&self) -> usize {
        self.total.saturating_sub(YEAR_PAGE_SIZE)
    }

    /// Year at `index` of the full list (0 is the newest).
    fn year_at(&self, index: usize) -> Option<u16> {
        if index >= self.total {
            return None;
        }
        let back = u16::try_from(index).ok()?;
        self.newest.get().checked_sub(back)
    }

    /// Years on the current page, newest first.
    pub fn page(&self) -> Vec<u16> {
        (self.offset..self.offset + YEAR_PAGE_SIZE)
            .map_while(|index| self.year_at(index))
            .collect()
    }

    pub fn contains(&self, year: u16) -> bool {
        let newest = self.newest.get();
        year <= newest && usize::from(newest - year) < self.total
    }

    pub const fn can_advance(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn can_retreat(&self) -> bool {
        self.offset > 0
    }

    /// Moves one page toward older years. Returns `false` at the last page.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.offset = (self.offset + YEAR_PAGE_SIZE).min(self.max_offset());
        true
    }

    /// Moves one page toward newer years. Returns `false` at the first page.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.offset = self.offset.saturating_sub(YEAR_PAGE_SIZE);
        true
    }
}

/// Navigation state shared by every panel.
///
/// Panel `i` always shows `anchor + i` months; nothing per-panel is stored,
/// so panels cannot drift out of sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    level:          DrillLevel,
    years:          YearWindow,
    anchor:         CalendarDate,
    selected_year:  Option<Year>,
    selected_month: Option<Month>,
}

impl ViewState {
    pub fn new(today: CalendarDate, year_window_size: u16) -> Self {
        Self {
            level:          DrillLevel::Years,
            years:          YearWindow::new(today.year_typed(), year_window_size),
            anchor:         today,
            selected_year:  None,
            selected_month: None,
        }
    }

    pub const fn level(&self) -> DrillLevel {
        self.level
    }

    pub const fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    pub const fn year_window(&self) -> &YearWindow {
        &self.years
    }

    /// Years on the current page of the year grid.
    pub fn displayed_years(&self) -> Vec<u16> {
        self.years.page()
    }

    pub fn selected_year(&self) -> Option<u16> {
        self.selected_year.map(Year::get)
    }

    pub fn selected_month(&self) -> Option<u8> {
        self.selected_month.map(Month::get)
    }

    /// Picks a year from the year grid and opens the month grid.
    ///
    /// Ignored outside [`DrillLevel::Years`] or for a year not on offer.
    pub fn select_year(&mut self, year: u16) -> bool {
        if self.level != DrillLevel::Years || !self.years.contains(year) {
            return false;
        }
        let Ok(year) = Year::new(year) else {
            return false;
        };
        let target = YearMonth::from_parts(year, self.anchor.month_typed());
        self.anchor = self.anchor.with_year_month(target);
        self.selected_year = Some(year);
        self.level = DrillLevel::Months;
        true
    }

    /// Picks a month (1-12) from the month grid and opens the day grids.
    ///
    /// Ignored outside [`DrillLevel::Months`] or for a month outside 1-12.
    pub fn select_month(&mut self, month: u8) -> bool {
        if self.level != DrillLevel::Months {
            return false;
        }
        let Ok(month) = Month::new(month) else {
            return false;
        };
        let year = self.selected_year.unwrap_or(self.anchor.year_typed());
        self.anchor = self.anchor.with_year_month(YearMonth::from_parts(year, month));
        self.selected_month = Some(month);
        self.level = DrillLevel::Days;
        true
    }

    /// Header affordance: flips between the month and year grids, and jumps
    /// back from the day grids to the month grid.
    pub const fn toggle_years_months(&mut self) -> DrillLevel {
        self.level = match self.level {
            DrillLevel::Years | DrillLevel::Days => DrillLevel::Months,
            DrillLevel::Months => DrillLevel::Years,
        };
        self.level
    }

    /// The header label is inert while the year grid is showing.
    pub fn header_clickable(&self) -> bool {
        self.level != DrillLevel::Years
    }

    /// Whether the navigation arrows page through years rather than months.
    pub fn arrows_page_years(&self) -> bool {
        self.level == DrillLevel::Years
    }

    pub const fn can_advance(&self, year_grid: bool) -> bool {
        if year_grid {
            self.years.can_advance()
        } else {
            self.anchor.year() < crate::MAX_YEAR || self.anchor.month() < crate::DECEMBER
        }
    }

    pub const fn can_retreat(&self, year_grid: bool) -> bool {
        if year_grid {
            self.years.can_retreat()
        } else {
            self.anchor.year() > 1 || self.anchor.month() > crate::JANUARY
        }
    }

    /// Next page of years, or the next month for every panel.
    pub fn advance(&mut self, year_grid: bool) -> bool {
        if year_grid {
            return self.years.advance();
        }
        if !self.can_advance(false) {
            return false;
        }
        self.anchor = add_months(self.anchor, 1);
        true
    }

    /// Previous page of years, or the previous month for every panel.
    pub fn retreat(&mut self, year_grid: bool) -> bool {
        if year_grid {
            return self.years.retreat();
        }
        if !self.can_retreat(false) {
            return false;
        }
        self.anchor = sub_months(self.anchor, 1);
        true
    }

    /// Month displayed by `panel`.
    pub fn panel_month(&self, panel: usize) -> YearMonth {
        self.anchor.year_month().add_months(panel_offset(panel))
    }

    /// Anchor date carried into `panel`'s month, used for its header.
    pub fn panel_date(&self, panel: usize) -> CalendarDate {
        add_months(self.anchor, panel_offset(panel))
    }

    /// Remembers the month a new range start was picked in.
    pub fn record_selection_context(&mut self, month: YearMonth) {
        self.selected_year = Some(month.year_typed());
        self.selected_month = Some(month.month_typed());
    }
}

fn panel_offset(panel: usize) -> i32 {
    i32::try_from(panel).unwrap_or(i32::MAX)
}
