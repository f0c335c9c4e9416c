//! Per-panel view state: which month, year or page of years a chooser is showing.
//!
//! Panels browse without selecting. They read the selected date, keep their own
//! browsing position, and are [reset](DaysPanel::reset) whenever the selected date
//! changes from somewhere else.

mod days;
mod months;
mod years;

pub use days::DaysPanel;
pub use months::{MonthCell, MonthsPanel};
pub use years::{YearCell, YearsPanel};

/// Which way a navigation arrow points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// -1 or +1.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}
