use crate::{
    CalendarDate, Locale,
    arithmetic::{add_years, with_month},
};

use super::Direction;

/// One of the twelve buttons of the month chooser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthCell {
    /// 1-12
    pub month: u32,
    pub label: &'static str,

    /// The selected date is in this month of the browsed year.
    pub is_selected: bool,
}

/// The month chooser. Browses years one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MonthsPanel {
    browsed: CalendarDate,
}

impl MonthsPanel {
    pub fn new(selected: CalendarDate) -> Self {
        Self { browsed: selected }
    }

    pub fn reset(&mut self, selected: CalendarDate) {
        self.browsed = selected;
    }

    /// The date whose year is being browsed.
    #[inline]
    pub fn browsed(&self) -> CalendarDate {
        self.browsed
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.browsed.year()
    }

    pub fn navigate(&mut self, direction: Direction) -> CalendarDate {
        self.browsed = add_years(self.browsed, direction.sign());
        self.browsed
    }

    pub fn cells(&self, locale: Locale, selected: CalendarDate) -> Vec<MonthCell> {
        (1..=12)
            .map(|month| MonthCell {
                month,
                label: locale.month_name(month),
                is_selected: selected.year() == self.year() && selected.month() == month,
            })
            .collect()
    }

    /// The date picking `month` (1-12) selects: the browsed year, that month, and the
    /// browsed day of month (clamped to the month).
    pub fn pick(&self, month: u32) -> Option<CalendarDate> {
        (1..=12)
            .contains(&month)
            .then(|| with_month(self.browsed, month))
    }
}
