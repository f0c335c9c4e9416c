//! Calendar arithmetic: stepping by months and years, month lengths, weekdays, and
//! enumerating the days of a month.
//!
//! All functions are total. Results that would leave the representable year range
//! saturate at [`CalendarDate::first`] / [`CalendarDate::last`].

use std::iter::FusedIterator;

use chrono::Weekday;

use crate::CalendarDate;

/// Which day a week row of the month grid starts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// The weekday in column 0.
    pub fn first_day(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Column (0-6) of `weekday` in a week starting on `self`.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            Self::Monday => weekday.num_days_from_monday(),
            Self::Sunday => weekday.num_days_from_sunday(),
        }
    }
}

/// Gregorian leap year rule: divisible by 4, except centuries, except every fourth century.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Move `n` months forward, keeping the day of month unless the target month is
/// shorter, in which case the result is the last day of the target month.
///
/// `2024-01-31 + 1 month = 2024-02-29`, `2023-01-31 + 1 month = 2023-02-28`.
pub fn add_months(date: CalendarDate, n: i32) -> CalendarDate {
    let months = i64::from(date.year()) * 12 + i64::from(date.month() - 1) + i64::from(n);
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let year = year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    CalendarDate::saturating(year, month, date.day())
}

/// Move `n` months backward. See [`add_months`].
pub fn sub_months(date: CalendarDate, n: i32) -> CalendarDate {
    add_months(date, n.saturating_neg())
}

/// Step the month shown by a day panel `n` months forward (or backward for negative `n`).
///
/// The naive target is [`add_months`]. If that had to clamp the day (the day differs
/// from `date`'s) and landed on the last day of the target month, the naive target is
/// used; in every other case the result is the last day of the target month.
/// Paging therefore always lands on a month end, so a run of short months never drags
/// the browsed day downward.
pub fn page_months(date: CalendarDate, n: i32) -> CalendarDate {
    let naive = add_months(date, n);
    let month_end = naive.last_of_month();
    if date.day() != naive.day() && naive == month_end {
        naive
    } else {
        month_end
    }
}

/// Move `n` years forward, keeping month and day. Feb 29 becomes Feb 28 on non-leap years.
pub fn add_years(date: CalendarDate, n: i32) -> CalendarDate {
    CalendarDate::saturating(date.year().saturating_add(n), date.month(), date.day())
}

/// Move `n` years backward. See [`add_years`].
pub fn sub_years(date: CalendarDate, n: i32) -> CalendarDate {
    add_years(date, n.saturating_neg())
}

/// Replace the year, keeping month and day (clamped).
pub fn with_year(date: CalendarDate, year: i32) -> CalendarDate {
    CalendarDate::saturating(year, date.month(), date.day())
}

/// Replace the month (1-12), keeping year and day (clamped).
///
/// Returns `date` unchanged for an invalid month.
pub fn with_month(date: CalendarDate, month: u32) -> CalendarDate {
    if (1..=12).contains(&month) {
        CalendarDate::saturating(date.year(), month, date.day())
    } else {
        date
    }
}

/// Column (0-6) of `date` in a week starting on `week_start`.
pub fn weekday_of(date: CalendarDate, week_start: WeekStart) -> u32 {
    week_start.column_of(date.weekday())
}

/// Column (0-6) of the first day of `date`'s month.
pub fn first_weekday_of_month(date: CalendarDate, week_start: WeekStart) -> u32 {
    weekday_of(date.first_of_month(), week_start)
}

/// All days of `date`'s month, from the 1st to the last, ascending.
///
/// The iterator is cheap to [`Clone`], which restarts the enumeration from wherever the clone was taken.
pub fn days_of_month(date: CalendarDate) -> DaysOfMonth {
    DaysOfMonth {
        year: date.year(),
        month: date.month(),
        front: 1,
        back: days_in_month(date.year(), date.month()),
    }
}

/// See [`days_of_month`].
#[derive(Clone, Debug)]
pub struct DaysOfMonth {
    year: i32,
    month: u32,

    /// Next day to yield from the front.
    front: u32,

    /// Next day to yield from the back.
    back: u32,
}

impl Iterator for DaysOfMonth {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        if self.front > self.back {
            return None;
        }
        let day = self.front;
        self.front += 1;
        CalendarDate::from_ymd(self.year, self.month, day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back + 1).saturating_sub(self.front) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DaysOfMonth {
    fn next_back(&mut self) -> Option<CalendarDate> {
        if self.front > self.back {
            return None;
        }
        let day = self.back;
        self.back -= 1;
        CalendarDate::from_ymd(self.year, self.month, day)
    }
}

impl ExactSizeIterator for DaysOfMonth {}

impl FusedIterator for DaysOfMonth {}
