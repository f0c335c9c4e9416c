use crate::{
    CalendarDate,
    arithmetic::{add_years, with_year},
    date::{MAX_YEAR, MIN_YEAR},
};

use super::Direction;

/// One button of the year chooser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub label: String,
    pub is_selected: bool,
}

/// The year chooser. Shows a page of years starting at the browsed year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearsPanel {
    start: CalendarDate,
}

impl YearsPanel {
    pub fn new(selected: CalendarDate) -> Self {
        Self { start: selected }
    }

    pub fn reset(&mut self, selected: CalendarDate) {
        self.start = selected;
    }

    /// First year of the page.
    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Move a whole page back or forth.
    pub fn navigate(&mut self, direction: Direction, years_per_page: u16) -> CalendarDate {
        self.start = add_years(self.start, direction.sign() * i32::from(years_per_page));
        self.start
    }

    /// The years of the current page. Years past [`MAX_YEAR`] are left out.
    pub fn years(&self, years_per_page: u16) -> impl Iterator<Item = i32> + use<> {
        let start = self.start_year();
        (0..i32::from(years_per_page))
            .map(move |offset| start + offset)
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
    }

    pub fn cells(&self, years_per_page: u16, selected: CalendarDate) -> Vec<YearCell> {
        self.years(years_per_page)
            .map(|year| YearCell {
                year,
                label: format!("{year:04}"),
                is_selected: year == selected.year(),
            })
            .collect()
    }

    /// Header label, e.g. `"2024-2035"`.
    pub fn range_label(&self, years_per_page: u16) -> String {
        let first = self.start_year();
        let last = self.years(years_per_page).last().unwrap_or(first);
        format!("{first:04}-{last:04}")
    }

    /// The date picking `year` selects: that year with the month and day of the page's
    /// date (Feb 29 becomes Feb 28 on non-leap years).
    pub fn pick(&self, year: i32) -> Option<CalendarDate> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&year)
            .then(|| with_year(self.start, year))
    }
}
