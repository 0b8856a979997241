use std::cmp::Ordering;

use crate::date_math::to_naive;
use crate::{CalendarDate, Day, RANGE_SEPARATOR, YearMonth, prelude::*};

/// One end of a range: a day, the month it belongs to, and the panel it was picked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    day:   Day,
    month: YearMonth,
    panel: usize,
}

impl Endpoint {
    /// Returns `None` if `day` does not exist in `month`.
    pub fn new(day: u8, month: YearMonth, panel: usize) -> Option<Self> {
        let day = Day::new(day, month.year(), month.month()).ok()?;
        Some(Self { day, month, panel })
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month(&self) -> YearMonth {
        self.month
    }

    pub const fn panel(&self) -> usize {
        self.panel
    }

    /// This endpoint's day in `month`, clamped to the month's length.
    ///
    /// Panels keep their endpoints while the user navigates, so the month a
    /// day was picked in is not necessarily the one it is shown in.
    pub fn date_in(&self, month: YearMonth) -> CalendarDate {
        CalendarDate::saturating(i64::from(month.year()), month.month(), self.day.get())
    }

    /// Position used to order endpoints across panels.
    fn position(&self) -> (usize, u8) {
        (self.panel, self.day.get())
    }
}

/// What a click on a day did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    /// A new range was started; any previous range is gone.
    Started,
    /// The open range received its end.
    Completed,
    /// Nothing changed.
    Ignored,
}

/// Interactive range selection.
///
/// An end cannot exist without a start, and the two always sit in different
/// panels: clicking a second day in the start's own panel is ignored, the
/// end has to be picked in another panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeSelection {
    #[default]
    Empty,
    Picking { start: Endpoint },
    Ranged { start: Endpoint, end: Endpoint },
}

impl RangeSelection {
    /// Applies a click on `day` of `month`, shown in `panel`.
    pub fn select_day(&mut self, day: u8, month: YearMonth, panel: usize) -> SelectOutcome {
        let Some(clicked) = Endpoint::new(day, month, panel) else {
            return SelectOutcome::Ignored;
        };

        match *self {
            Self::Empty | Self::Ranged { .. } => {
                *self = Self::Picking { start: clicked };
                SelectOutcome::Started
            },
            Self::Picking { start } if start.panel != panel => {
                *self = Self::Ranged { start, end: clicked };
                SelectOutcome::Completed
            },
            Self::Picking { .. } => SelectOutcome::Ignored,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub const fn start(&self) -> Option<&Endpoint> {
        match self {
            Self::Empty => None,
            Self::Picking { start } | Self::Ranged { start, .. } => Some(start),
        }
    }

    pub const fn end(&self) -> Option<&Endpoint> {
        match self {
            Self::Ranged { end, .. } => Some(end),
            Self::Empty | Self::Picking { .. } => None,
        }
    }

    /// Whether `day` lies between the start and end day numbers, inclusive.
    ///
    /// Ignores panels entirely, so the same day number matches in every
    /// panel. Renderers should use [`RangeSelection::spans`] instead.
    pub fn is_in_range(&self, day: u8) -> bool {
        match self {
            Self::Ranged { start, end } => {
                let low = start.day().min(end.day());
                let high = start.day().max(end.day());
                (low..=high).contains(&day)
            },
            Self::Empty | Self::Picking { .. } => false,
        }
    }

    /// Panel-aware form of [`RangeSelection::is_in_range`]: `(panel, day)` lies
    /// between the endpoints when both are ordered by panel, then day.
    pub fn spans(&self, panel: usize, day: u8) -> bool {
        let Self::Ranged { start, end } = self else {
            return false;
        };
        let (low, high) = match start.position().cmp(&end.position()) {
            Ordering::Greater => (end.position(), start.position()),
            Ordering::Less | Ordering::Equal => (start.position(), end.position()),
        };
        (low..=high).contains(&(panel, day))
    }

    pub fn is_start_date(&self, day: u8, panel: usize) -> bool {
        self.start()
            .is_some_and(|start| start.panel == panel && start.day() == day)
    }

    pub fn is_end_date(&self, day: u8, panel: usize) -> bool {
        self.end()
            .is_some_and(|end| end.panel == panel && end.day() == day)
    }

    /// Whether `panel` holds the start.
    pub fn owns_start(&self, panel: usize) -> bool {
        self.start().is_some_and(|start| start.panel == panel)
    }

    /// Whether `panel` holds the end.
    pub fn owns_end(&self, panel: usize) -> bool {
        self.end().is_some_and(|end| end.panel == panel)
    }

    /// The completed range as chronological dates, with each endpoint placed
    /// in the month its panel currently shows.
    pub fn resolve_range<F>(&self, panel_month: F) -> Option<SelectedRange>
    where
        F: Fn(usize) -> YearMonth,
    {
        match self {
            Self::Ranged { start, end } => Some(SelectedRange::new(
                start.date_in(panel_month(start.panel)),
                end.date_in(panel_month(end.panel)),
            )),
            Self::Empty | Self::Picking { .. } => None,
        }
    }
}

/// A completed selection resolved to dates, earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}{}{}", start, RANGE_SEPARATOR, end)]
pub struct SelectedRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl SelectedRange {
    /// Orders the two dates so that `start <= end`.
    pub fn new(first: CalendarDate, second: CalendarDate) -> Self {
        if first <= second {
            Self { start: first, end: second }
        } else {
            Self { start: second, end: first }
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> u32 {
        let (Some(from), Some(to)) = (to_naive(self.start), to_naive(self.end)) else {
            return 0;
        };
        u32::try_from(to.signed_duration_since(from).num_days() + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year_month};

    fn june() -> YearMonth {
        year_month(2023, 6)
    }

    fn july() -> YearMonth {
        year_month(2023, 7)
    }

    #[test]
    fn test_first_click_starts_range() {
        let mut selection = RangeSelection::default();
        assert_eq!(selection.select_day(10, june(), 0), SelectOutcome::Started);

        let start = selection.start().expect("start should be set");
        assert_eq!(start.day(), 10);
        assert_eq!(start.panel(), 0);
        assert_eq!(start.month(), june());
        assert!(selection.end().is_none());
    }

    #[test]
    fn test_click_in_other_panel_completes_range() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        assert_eq!(selection.select_day(5, july(), 1), SelectOutcome::Completed);

        let end = selection.end().expect("end should be set");
        assert_eq!(end.day(), 5);
        assert_eq!(end.panel(), 1);
    }

    #[test]
    fn test_click_in_start_panel_is_ignored() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        let before = selection;

        assert_eq!(selection.select_day(20, june(), 0), SelectOutcome::Ignored);
        assert_eq!(selection, before, "state must be unchanged");
    }

    #[test]
    fn test_third_click_restarts_range() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        selection.select_day(5, july(), 1);

        assert_eq!(selection.select_day(3, july(), 1), SelectOutcome::Started);
        assert!(matches!(selection, RangeSelection::Picking { .. }));
        let start = selection.start().expect("start should be set");
        assert_eq!((start.day(), start.panel()), (3, 1));
        assert!(selection.end().is_none());
    }

    #[test]
    fn test_invalid_day_is_ignored() {
        let mut selection = RangeSelection::default();
        assert_eq!(selection.select_day(31, june(), 0), SelectOutcome::Ignored);
        assert_eq!(selection, RangeSelection::Empty);
    }

    #[test]
    fn test_is_in_range_inclusive_bounds() {
        let mut selection = RangeSelection::default();
        selection.select_day(5, june(), 0);
        selection.select_day(20, july(), 1);

        for day in 5..=20 {
            assert!(selection.is_in_range(day), "day {day} should be in range");
        }
        assert!(!selection.is_in_range(4));
        assert!(!selection.is_in_range(21));
    }

    #[test]
    fn test_is_in_range_ignores_order_and_requires_end() {
        let mut selection = RangeSelection::default();
        selection.select_day(20, june(), 0);
        assert!(!selection.is_in_range(20), "no end yet");

        selection.select_day(5, july(), 1);
        assert!(selection.is_in_range(5));
        assert!(selection.is_in_range(12));
        assert!(selection.is_in_range(20));
    }

    #[test]
    fn test_start_and_end_need_matching_panel() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        selection.select_day(5, july(), 1);

        assert!(selection.is_start_date(10, 0));
        assert!(!selection.is_start_date(10, 1));
        assert!(selection.is_end_date(5, 1));
        assert!(!selection.is_end_date(5, 0));
        assert!(selection.owns_start(0));
        assert!(selection.owns_end(1));
        assert!(!selection.owns_end(0));
    }

    #[test]
    fn test_spans_is_panel_aware() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        selection.select_day(5, july(), 1);

        assert!(!selection.spans(0, 7), "before the start in its own panel");
        assert!(selection.spans(0, 10));
        assert!(selection.spans(0, 25));
        assert!(selection.spans(1, 3));
        assert!(selection.spans(1, 5));
        assert!(!selection.spans(1, 7), "after the end in its own panel");
        assert!(!selection.spans(2, 1));
    }

    #[test]
    fn test_spans_with_end_before_start() {
        let mut selection = RangeSelection::default();
        selection.select_day(5, july(), 1);
        selection.select_day(10, june(), 0);

        assert!(selection.spans(0, 20));
        assert!(selection.spans(1, 2));
        assert!(!selection.spans(1, 6));
    }

    #[test]
    fn test_spans_covers_middle_panels() {
        let mut selection = RangeSelection::default();
        selection.select_day(28, june(), 0);
        selection.select_day(2, year_month(2023, 8), 2);

        for day in 1..=31 {
            assert!(selection.spans(1, day), "july {day} is inside");
        }
    }

    fn picked_months(panel: usize) -> YearMonth {
        if panel == 0 { june() } else { july() }
    }

    #[test]
    fn test_resolve_range_is_chronological() {
        let mut selection = RangeSelection::default();
        assert!(selection.resolve_range(picked_months).is_none());

        selection.select_day(5, july(), 1);
        assert!(selection.resolve_range(picked_months).is_none());

        selection.select_day(10, june(), 0);
        let range = selection.resolve_range(picked_months).expect("range is complete");
        assert_eq!(range.start(), date(2023, 6, 10));
        assert_eq!(range.end(), date(2023, 7, 5));
        assert_eq!(range.to_string(), "2023-06-10/2023-07-05");
        assert_eq!(range.len_days(), 26);
        assert!(range.contains(&date(2023, 6, 30)));
        assert!(!range.contains(&date(2023, 7, 6)));
    }

    #[test]
    fn test_resolve_range_uses_months_currently_shown() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        selection.select_day(5, year_month(2023, 8), 1);

        let shown = |panel: usize| if panel == 0 { july() } else { year_month(2023, 8) };
        let range = selection.resolve_range(shown).expect("range is complete");
        assert_eq!(range.to_string(), "2023-07-10/2023-08-05");
    }

    #[test]
    fn test_date_in_clamps_to_month_length() {
        let endpoint = Endpoint::new(31, july(), 0).expect("july has a 31st");
        assert_eq!(endpoint.date_in(year_month(2023, 9)), date(2023, 9, 30));
        assert_eq!(endpoint.date_in(july()), date(2023, 7, 31));
    }

    #[test]
    fn test_clear() {
        let mut selection = RangeSelection::default();
        selection.select_day(10, june(), 0);
        selection.clear();
        assert_eq!(selection, RangeSelection::Empty);
        assert!(!selection.owns_start(0));
    }
}
