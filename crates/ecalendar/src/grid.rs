//! Laying out a month as a seven-column grid.

use crate::{
    CalendarDate, WeekStart,
    arithmetic::{days_of_month, first_weekday_of_month, weekday_of},
};

/// One cell of a [`MonthGrid`]: either a blank filler or a day of the month.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridCell {
    /// Day of month (`"1"`..`"31"`), empty for blanks.
    pub label: String,

    /// `None` for blanks. Blank cells cannot be selected.
    pub date: Option<CalendarDate>,

    pub is_today: bool,

    /// This day is the selected date.
    pub is_selected: bool,

    /// Saturday or Sunday.
    pub is_weekend: bool,
}

impl GridCell {
    fn blank() -> Self {
        Self::default()
    }

    fn day(date: CalendarDate, today: CalendarDate, selected: Option<CalendarDate>) -> Self {
        Self {
            label: date.day().to_string(),
            date: Some(date),
            is_today: date == today,
            is_selected: selected == Some(date),
            is_weekend: date.is_weekend(),
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }
}

/// A week of a [`MonthGrid`].
#[derive(Clone, Copy, Debug)]
pub struct GridRow<'a> {
    /// ISO 8601 week number.
    pub iso_week: u32,

    /// Exactly seven cells.
    pub cells: &'a [GridCell],
}

/// The cells of a month, blanks included, in row-major order.
///
/// The first row is padded with blanks up to the weekday of the 1st, the last row is
/// padded after the last day, so the length is always a multiple of seven.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    first: CalendarDate,
    week_start: WeekStart,
    leading_blanks: usize,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lay out the month containing `displayed`.
    ///
    /// Day cells equal to `today` are flagged [`GridCell::is_today`],
    /// and the cell equal to `selected` (if in this month) is flagged [`GridCell::is_selected`].
    pub fn new(
        displayed: CalendarDate,
        week_start: WeekStart,
        today: CalendarDate,
        selected: Option<CalendarDate>,
    ) -> Self {
        let first = displayed.first_of_month();
        let leading_blanks = first_weekday_of_month(displayed, week_start) as usize;
        let trailing_blanks = (7 - weekday_of(displayed.last_of_month(), week_start) - 1) as usize;

        let days = days_of_month(displayed);
        let mut cells = Vec::with_capacity(leading_blanks + days.len() + trailing_blanks);
        cells.extend(std::iter::repeat_with(GridCell::blank).take(leading_blanks));
        cells.extend(days.map(|date| GridCell::day(date, today, selected)));
        cells.extend(std::iter::repeat_with(GridCell::blank).take(trailing_blanks));

        debug_assert_eq!(cells.len() % 7, 0, "grid for {first} is not whole weeks");

        Self {
            first,
            week_start,
            leading_blanks,
            cells,
        }
    }

    /// The first day of the laid out month.
    #[inline]
    pub fn month(&self) -> CalendarDate {
        self.first
    }

    #[inline]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline]
    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn trailing_blanks(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| cell.is_blank())
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = GridRow<'_>> {
        self.cells.chunks(7).map(|cells| {
            // Every row holds at least one day of the month.
            let iso_week = cells
                .iter()
                .rev()
                .find_map(|cell| cell.date)
                .map_or(0, |date| date.iso_week());
            GridRow { iso_week, cells }
        })
    }

    /// The day cell for `date`, if it is in this month.
    pub fn cell_for(&self, date: CalendarDate) -> Option<&GridCell> {
        if !date.same_month(&self.first) {
            return None;
        }
        self.cells.get(self.leading_blanks + date.day() as usize - 1)
    }

    /// The selected cell, if the selected date is in this month.
    pub fn selected(&self) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.is_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_february_2024_monday_start() {
        let grid = MonthGrid::new(date("2024-02-01"), WeekStart::Monday, date("2024-02-14"), None);
        assert_eq!(grid.leading_blanks(), 3);
        assert_eq!(grid.trailing_blanks(), 3);
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.cells().iter().filter(|c| !c.is_blank()).count(), 29);

        let labels: Vec<&str> = grid.cells()[..7].iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["", "", "", "1", "2", "3", "4"]);

        let today: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, Some(date("2024-02-14")));
        assert!(grid.selected().is_none());
    }

    #[test]
    fn test_sunday_start() {
        let grid = MonthGrid::new(date("2024-02-20"), WeekStart::Sunday, date("2000-01-01"), None);
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.trailing_blanks(), 2);
        assert_eq!(grid.cells().len(), 35);
    }

    #[test]
    fn test_month_without_padding() {
        // February 2021 starts on a Monday and has exactly four weeks.
        let grid = MonthGrid::new(date("2021-02-10"), WeekStart::Monday, date("2021-02-10"), None);
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.trailing_blanks(), 0);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn test_selected_and_rows() {
        let selected = date("2024-03-31");
        let grid = MonthGrid::new(selected, WeekStart::Monday, date("2024-03-01"), Some(selected));
        let cell = grid.cell_for(selected).unwrap();
        assert!(cell.is_selected && cell.is_weekend && !cell.is_today);
        assert_eq!(grid.selected().and_then(|c| c.date), Some(selected));
        assert!(grid.cell_for(date("2024-04-01")).is_none());

        for row in grid.rows() {
            assert_eq!(row.cells.len(), 7);
        }
        let weeks: Vec<u32> = grid.rows().map(|row| row.iso_week).collect();
        assert_eq!(weeks, [9, 10, 11, 12, 13]);
    }
}
