use crate::{
    CalendarDate, Locale, MonthGrid, WeekStart,
    arithmetic::{add_years, page_months},
};

use super::Direction;

/// The day grid panel. Tracks the displayed month, independent of the selected date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DaysPanel {
    displayed: CalendarDate,
}

impl DaysPanel {
    pub fn new(selected: CalendarDate) -> Self {
        Self {
            displayed: selected,
        }
    }

    /// A date in the displayed month.
    #[inline]
    pub fn displayed(&self) -> CalendarDate {
        self.displayed
    }

    /// Show the month of `selected` again.
    pub fn reset(&mut self, selected: CalendarDate) {
        self.displayed = selected;
    }

    /// Show the previous or next month. See [`page_months`].
    pub fn navigate(&mut self, direction: Direction) -> CalendarDate {
        self.displayed = page_months(self.displayed, direction.sign());
        self.displayed
    }

    /// Show the same month of the previous or next year.
    pub fn navigate_year(&mut self, direction: Direction) -> CalendarDate {
        self.displayed = add_years(self.displayed, direction.sign());
        self.displayed
    }

    pub fn grid(
        &self,
        week_start: WeekStart,
        today: CalendarDate,
        selected: CalendarDate,
    ) -> MonthGrid {
        MonthGrid::new(self.displayed, week_start, today, Some(selected))
    }

    /// Header label of the month button, e.g. `"mars"`.
    pub fn month_label(&self, locale: Locale) -> &'static str {
        locale.month_name(self.displayed.month())
    }

    /// Header label of the year button, e.g. `"2024"`.
    pub fn year_label(&self) -> String {
        format!("{:04}", self.displayed.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_navigation_is_independent_of_selection() {
        let selected = date("2024-01-15");
        let mut panel = DaysPanel::new(selected);
        assert_eq!(panel.navigate(Direction::Next), date("2024-02-29"));
        assert_eq!(panel.navigate(Direction::Next), date("2024-03-31"));
        assert_eq!(panel.navigate(Direction::Previous), date("2024-02-29"));
        assert_eq!(panel.navigate_year(Direction::Next), date("2025-02-28"));

        let grid = panel.grid(WeekStart::Monday, selected, selected);
        assert!(grid.selected().is_none(), "selected day is in another month");
        assert_eq!(panel.month_label(Locale::En), "February");
        assert_eq!(panel.year_label(), "2025");

        panel.reset(selected);
        assert_eq!(panel.displayed(), selected);
    }
}
