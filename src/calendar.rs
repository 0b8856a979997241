use tracing::{debug, trace};

use crate::render::{MonthGrid, PanelGrid, PresetRange, YearGrid};
use crate::{
    CalendarConfig, ConfigError, DrillLevel, Frame, RangeSelection, SelectOutcome, SelectedRange,
    Surface, ViewState, date_math,
};

/// A user action on the widget, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// A year in the year grid was clicked.
    SelectYear(u16),
    /// A month (1-12) in the month grid was clicked.
    SelectMonth(u8),
    /// A day of `panel`'s month was clicked.
    SelectDay { day: u8, panel: usize },
    /// The date label between the arrows was clicked.
    HeaderClicked,
    /// The left arrow was clicked.
    Previous,
    /// The right arrow was clicked.
    Next,
}

/// The date-range picker widget.
///
/// Owns the navigation and selection state exclusively. Every
/// [`handle`](Self::handle) call runs to completion, and every
/// [`render`](Self::render) rebuilds the frame from scratch.
#[derive(Debug, Clone)]
pub struct RangeCalendar {
    config:    CalendarConfig,
    view:      ViewState,
    selection: RangeSelection,
}

impl RangeCalendar {
    /// # Errors
    /// Returns `ConfigError` if the configuration does not validate.
    pub fn new(config: CalendarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let today = config.today().unwrap_or_else(date_math::today);
        debug!(
            panel_count = config.panel_count(),
            year_window = config.year_window_size(),
            %today,
            "calendar created"
        );
        Ok(Self {
            config,
            view: ViewState::new(today, config.year_window_size()),
            selection: RangeSelection::Empty,
        })
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    /// The completed range as the user sees it: each endpoint's day in the
    /// month its panel shows right now.
    pub fn selected_range(&self) -> Option<SelectedRange> {
        self.selection.resolve_range(|panel| self.view.panel_month(panel))
    }

    fn panel_count(&self) -> usize {
        usize::from(self.config.panel_count())
    }

    fn preset(&self) -> PresetRange {
        PresetRange {
            start: self.config.fixed_start_day(),
            end:   self.config.fixed_end_day(),
        }
    }

    /// Applies one interaction. Returns whether any state changed; rejected
    /// interactions are silent no-ops.
    pub fn handle(&mut self, interaction: Interaction) -> bool {
        let changed = match interaction {
            Interaction::SelectYear(year) => self.view.select_year(year),
            Interaction::SelectMonth(month) => self.view.select_month(month),
            Interaction::SelectDay { day, panel } => {
                self.select_day(day, panel) != SelectOutcome::Ignored
            },
            Interaction::HeaderClicked => self.click_header(),
            Interaction::Previous => self.retreat(),
            Interaction::Next => self.advance(),
        };

        if changed {
            debug!(?interaction, level = ?self.view.level(), "interaction applied");
        } else {
            debug!(?interaction, level = ?self.view.level(), "interaction ignored");
        }
        changed
    }

    /// Picks a day in `panel`. Only the day grids accept clicks.
    pub fn select_day(&mut self, day: u8, panel: usize) -> SelectOutcome {
        if self.view.level() != DrillLevel::Days || panel >= self.panel_count() {
            return SelectOutcome::Ignored;
        }

        let month = self.view.panel_month(panel);
        let outcome = self.selection.select_day(day, month, panel);
        if outcome == SelectOutcome::Started {
            self.view.record_selection_context(month);
        }
        debug!(day, panel, %month, ?outcome, "day selected");
        outcome
    }

    /// Header label click: toggles the month/year grids unless the year grid is showing.
    pub fn click_header(&mut self) -> bool {
        if !self.view.header_clickable() {
            return false;
        }
        self.view.toggle_years_months();
        true
    }

    /// Right arrow: next page of years on the year grid, next month elsewhere.
    pub fn advance(&mut self) -> bool {
        let year_grid = self.view.arrows_page_years();
        self.view.advance(year_grid)
    }

    /// Left arrow: previous page of years on the year grid, previous month elsewhere.
    pub fn retreat(&mut self) -> bool {
        let year_grid = self.view.arrows_page_years();
        self.view.retreat(year_grid)
    }

    /// Builds the frame for the current state.
    pub fn render(&self) -> Frame {
        trace!(level = ?self.view.level(), anchor = %self.view.anchor(), "rendering frame");
        match self.view.level() {
            DrillLevel::Years => YearGrid::new(&self.view).into(),
            DrillLevel::Months => MonthGrid::new(&self.view).into(),
            DrillLevel::Days => {
                let panel_count = self.panel_count();
                let preset = self.preset();
                (0..panel_count)
                    .map(|panel| PanelGrid::new(&self.view, &self.selection, panel, panel_count, preset))
                    .collect::<Vec<_>>()
                    .into()
            },
        }
    }

    /// Renders and hands the frame to `surface`.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.paint(&self.render());
    }
}
