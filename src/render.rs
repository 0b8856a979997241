//! Render models: classified day cells, grids and navigation bars.
//!
//! Everything here is recomputed from the current view and selection on
//! every render. Nothing is cached between interactions.

use crate::consts::{DAYS_PER_WEEK, MONTH_GRID_COLUMNS, WEEKDAY_LABELS, YEAR_GRID_COLUMNS};
use crate::date_math::{adjacent_day, first_weekday_of_month, format_header, trailing_blank_count};
use crate::{CalendarDate, Icon, Month, RangeSelection, ViewState, YearMonth, prelude::*};

/// One visual state of a day cell. A cell may carry several at once.
///
/// Variants are listed in precedence order: where two styles conflict
/// visually, the later one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Clickable, centered day.
    Selectable,
    /// Inside an interactive range, not an endpoint.
    RangeInterior,
    /// Interactive range start, in the panel it was picked in.
    RangeStart,
    /// Interactive range end, in the panel it was picked in.
    RangeEnd,
    /// After the start, in the start's panel.
    ForwardAdjacent,
    /// Before the end, in the end's panel.
    BackwardAdjacent,
    /// Inside the preset range.
    PresetAccent,
    /// Equal to the preset start or end day.
    PresetEndpoint,
}

impl CellStyle {
    pub const ALL: [Self; 8] = [
        Self::Selectable,
        Self::RangeInterior,
        Self::RangeStart,
        Self::RangeEnd,
        Self::ForwardAdjacent,
        Self::BackwardAdjacent,
        Self::PresetAccent,
        Self::PresetEndpoint,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Stable token for a host's class-composition helper.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Selectable => "selectable",
            Self::RangeInterior => "range-interior",
            Self::RangeStart => "range-start",
            Self::RangeEnd => "range-end",
            Self::ForwardAdjacent => "adjacent-forward",
            Self::BackwardAdjacent => "adjacent-backward",
            Self::PresetAccent => "preset-accent",
            Self::PresetEndpoint => "preset-endpoint",
        }
    }
}

/// Additive set of [`CellStyle`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyles(u8);

impl CellStyles {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn insert(&mut self, style: CellStyle) {
        self.0 |= style.bit();
    }

    pub const fn contains(&self, style: CellStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Styles present, in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = CellStyle> + '_ {
        CellStyle::ALL.into_iter().filter(|style| self.contains(*style))
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        self.iter().map(CellStyle::class_name).collect()
    }
}

impl FromIterator<CellStyle> for CellStyles {
    fn from_iter<I: IntoIterator<Item = CellStyle>>(iter: I) -> Self {
        let mut styles = Self::empty();
        for style in iter {
            styles.insert(style);
        }
        styles
    }
}

/// One square of a day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    day:    u8,
    blank:  bool,
    styles: CellStyles,
}

impl DayCell {
    const fn blank(day: u8) -> Self {
        Self {
            day,
            blank: true,
            styles: CellStyles::empty(),
        }
    }

    /// Day number shown. Blank cells show the neighbouring month's day.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Padding cell belonging to the previous or next month.
    pub const fn is_blank(&self) -> bool {
        self.blank
    }

    pub const fn is_selectable(&self) -> bool {
        !self.blank && self.styles.contains(CellStyle::Selectable)
    }

    pub const fn styles(&self) -> CellStyles {
        self.styles
    }

    pub const fn has(&self, style: CellStyle) -> bool {
        self.styles.contains(style)
    }

    pub const fn is_range_interior(&self) -> bool {
        self.has(CellStyle::RangeInterior)
    }

    pub const fn is_range_start(&self) -> bool {
        self.has(CellStyle::RangeStart)
    }

    pub const fn is_range_end(&self) -> bool {
        self.has(CellStyle::RangeEnd)
    }

    pub const fn is_adjacent_highlight(&self) -> bool {
        self.has(CellStyle::ForwardAdjacent) || self.has(CellStyle::BackwardAdjacent)
    }

    pub const fn is_preset_accent(&self) -> bool {
        self.has(CellStyle::PresetAccent)
    }

    pub const fn is_preset_endpoint(&self) -> bool {
        self.has(CellStyle::PresetEndpoint)
    }
}

/// Day numbers highlighted regardless of interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresetRange {
    pub start: Option<u8>,
    pub end:   Option<u8>,
}

impl PresetRange {
    /// Accent needs both ends.
    fn covers(&self, day: u8) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (start..=end).contains(&day),
            _ => false,
        }
    }

    fn is_endpoint(&self, day: u8) -> bool {
        self.start == Some(day) || self.end == Some(day)
    }
}

/// Everything a rule may look at for one in-month day.
struct RuleInput<'a> {
    day:         u8,
    panel:       usize,
    multi_panel: bool,
    selection:   &'a RangeSelection,
    preset:      PresetRange,
}

impl RuleInput<'_> {
    fn is_endpoint(&self) -> bool {
        self.selection.is_start_date(self.day, self.panel)
            || self.selection.is_end_date(self.day, self.panel)
    }
}

type Rule = (CellStyle, for<'a> fn(&RuleInput<'a>) -> bool);

/// Applied in order to a neutral cell; every matching rule adds its style.
const DAY_RULES: [Rule; 8] = [
    (CellStyle::Selectable, base),
    (CellStyle::RangeInterior, range_interior),
    (CellStyle::RangeStart, range_start),
    (CellStyle::RangeEnd, range_end),
    (CellStyle::ForwardAdjacent, forward_adjacent),
    (CellStyle::BackwardAdjacent, backward_adjacent),
    (CellStyle::PresetAccent, preset_accent),
    (CellStyle::PresetEndpoint, preset_endpoint),
];

const fn base(_: &RuleInput<'_>) -> bool {
    true
}

fn range_interior(input: &RuleInput<'_>) -> bool {
    input.multi_panel && input.selection.spans(input.panel, input.day) && !input.is_endpoint()
}

fn range_start(input: &RuleInput<'_>) -> bool {
    input.multi_panel && input.selection.is_start_date(input.day, input.panel)
}

fn range_end(input: &RuleInput<'_>) -> bool {
    input.multi_panel && input.selection.is_end_date(input.day, input.panel)
}

fn forward_adjacent(input: &RuleInput<'_>) -> bool {
    input.multi_panel
        && input
            .selection
            .start()
            .is_some_and(|start| start.panel() == input.panel && input.day > start.day())
}

fn backward_adjacent(input: &RuleInput<'_>) -> bool {
    input.multi_panel
        && input
            .selection
            .end()
            .is_some_and(|end| end.panel() == input.panel && input.day < end.day())
}

fn preset_accent(input: &RuleInput<'_>) -> bool {
    input.preset.covers(input.day)
}

fn preset_endpoint(input: &RuleInput<'_>) -> bool {
    input.preset.is_endpoint(input.day)
}

fn classify(input: &RuleInput<'_>) -> CellStyles {
    DAY_RULES
        .iter()
        .filter(|(_, applies)| applies(input))
        .map(|(style, _)| *style)
        .collect()
}

/// Cells of `month` as shown in `panel`: leading blanks, the month's days,
/// then trailing blanks up to a whole number of weeks.
pub fn render_panel(
    month: YearMonth,
    panel: usize,
    selection: &RangeSelection,
    panel_count: usize,
    preset: PresetRange,
) -> Vec<DayCell> {
    let (year, number) = (month.year(), month.month());
    let days = month.days();
    let lead = first_weekday_of_month(year, number);
    let trail = trailing_blank_count(lead, days);

    let mut cells = Vec::with_capacity(usize::from(lead + days + trail));

    cells.extend(
        (1..=i32::from(lead)).map(|index| DayCell::blank(adjacent_day(year, number, index - i32::from(lead)))),
    );

    cells.extend((1..=days).map(|day| {
        let input = RuleInput {
            day,
            panel,
            multi_panel: panel_count >= 2,
            selection,
            preset,
        };
        DayCell {
            day,
            blank: false,
            styles: classify(&input),
        }
    }));

    cells.extend(
        (1..=i32::from(trail)).map(|index| DayCell::blank(adjacent_day(year, number, i32::from(days) + index))),
    );

    cells
}

/// A navigation arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavButton {
    pub icon:    Icon,
    pub enabled: bool,
}

/// Arrows plus the date label between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavBar {
    pub previous:         NavButton,
    pub next:             NavButton,
    pub header:           String,
    /// The label toggles the month/year grids; inert over the year grid.
    pub header_clickable: bool,
}

impl NavBar {
    pub(crate) fn new(view: &ViewState, header_date: CalendarDate) -> Self {
        let year_grid = view.arrows_page_years();
        Self {
            previous:         NavButton {
                icon:    Icon::ChevronLeft,
                enabled: view.can_retreat(year_grid),
            },
            next:             NavButton {
                icon:    Icon::ChevronRight,
                enabled: view.can_advance(year_grid),
            },
            header:           format_header(header_date),
            header_clickable: view.header_clickable(),
        }
    }
}

/// One page of the year grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct YearGrid {
    pub nav:   NavBar,
    pub years: Vec<u16>,
}

impl YearGrid {
    pub(crate) fn new(view: &ViewState) -> Self {
        Self {
            nav:   NavBar::new(view, view.anchor()),
            years: view.displayed_years(),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.years.chunks(YEAR_GRID_COLUMNS)
    }
}

/// The twelve months, three per row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    pub nav:    NavBar,
    pub months: Vec<Month>,
}

impl MonthGrid {
    pub(crate) fn new(view: &ViewState) -> Self {
        Self {
            nav:    NavBar::new(view, view.anchor()),
            months: Month::all().collect(),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Month]> {
        self.months.chunks(MONTH_GRID_COLUMNS)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.months.iter().map(|month| month.grid_label()).collect()
    }
}

/// One calendar panel showing a single month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelGrid {
    pub panel:      usize,
    pub month:      YearMonth,
    pub nav:        NavBar,
    pub cells:      Vec<DayCell>,
    /// The range start was picked in this panel.
    pub owns_start: bool,
    /// The range end was picked in this panel.
    pub owns_end:   bool,
}

impl PanelGrid {
    pub(crate) fn new(
        view: &ViewState,
        selection: &RangeSelection,
        panel: usize,
        panel_count: usize,
        preset: PresetRange,
    ) -> Self {
        let month = view.panel_month(panel);
        Self {
            panel,
            month,
            nav: NavBar::new(view, view.panel_date(panel)),
            cells: render_panel(month, panel, selection, panel_count, preset),
            owns_start: selection.owns_start(panel),
            owns_end: selection.owns_end(panel),
        }
    }

    /// Container tokens for the panel holding an endpoint.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.owns_start {
            names.push("start-calendar");
        }
        if self.owns_end {
            names.push("end-calendar");
        }
        names
    }

    pub const fn weekday_labels() -> [&'static str; 7] {
        WEEKDAY_LABELS
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(usize::from(DAYS_PER_WEEK))
    }

    /// The in-month cell for `day`, if the month has it.
    pub fn day(&self, day: u8) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|cell| !cell.is_blank() && cell.day() == day)
    }

    pub fn leading_blanks(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().take_while(|cell| cell.is_blank())
    }

    pub fn trailing_blanks(&self) -> impl Iterator<Item = &DayCell> {
        let tail = self.cells.iter().rev().take_while(|cell| cell.is_blank()).count();
        self.cells[self.cells.len() - tail..].iter()
    }
}

/// Everything the host paints for one render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum Frame {
    /// The year grid overlay.
    Years(YearGrid),
    /// The month grid overlay.
    Months(MonthGrid),
    /// Day grids, one per panel, left to right.
    Days(Vec<PanelGrid>),
}

impl Frame {
    pub fn panels(&self) -> &[PanelGrid] {
        match self {
            Self::Days(panels) => panels,
            Self::Years(_) | Self::Months(_) => &[],
        }
    }
}
