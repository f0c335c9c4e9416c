//! [`CalendarDate`]: a day in the Gregorian calendar, with no time-of-day and no timezone.

use std::str::FromStr;

use chrono::{Datelike as _, NaiveDate, Weekday};

use crate::arithmetic::days_in_month;

/// Smallest year a [`CalendarDate`] can hold.
pub const MIN_YEAR: i32 = 0;

/// Largest year a [`CalendarDate`] can hold.
///
/// Years are kept to four digits so the canonical `YYYY-MM-DD` form is always exactly ten characters.
pub const MAX_YEAR: i32 = 9999;

/// The canonical form, as a [`chrono::format::strftime`] pattern.
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%d";

/// Something went wrong turning text (or numbers) into a [`CalendarDate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input was empty (or only whitespace).
    #[error("empty date string")]
    Empty,

    /// The input did not match any of the accepted date formats.
    #[error("unrecognized date format: {input:?}")]
    UnknownFormat {
        /// The rejected input.
        input: String,
    },

    /// The input had the right shape, but names a day that does not exist (e.g. Feb 30).
    #[error("no such day: {year:04}-{month:02}-{day:02}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl DateError {
    /// For digit strings that have already been checked with [`is_digits`].
    pub(crate) fn out_of_range(year: &str, month: &str, day: &str) -> Self {
        Self::OutOfRange {
            year: year.parse().unwrap_or_default(),
            month: month.parse().unwrap_or_default(),
            day: day.parse().unwrap_or_default(),
        }
    }
}

/// A calendar day, canonically written as `YYYY-MM-DD`.
///
/// Always a valid Gregorian day in the years [`MIN_YEAR`]..=[`MAX_YEAR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` if the day does not exist or the year is out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Like [`Self::from_ymd`], but returns a [`DateError`] describing the problem.
    pub fn try_from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::from_ymd(year, month, day).ok_or(DateError::OutOfRange { year, month, day })
    }

    /// Returns `None` for dates outside of [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR).contains(&date.year()).then_some(Self(date))
    }

    /// The earliest representable day, `0000-01-01`.
    pub fn first() -> Self {
        Self::saturating(MIN_YEAR, 1, 1)
    }

    /// The last representable day, `9999-12-31`.
    pub fn last() -> Self {
        Self::saturating(MAX_YEAR, 12, 31)
    }

    /// Build a date, pinning out-of-range years to [`Self::first`] / [`Self::last`]
    /// and clamping the day to the length of the month.
    ///
    /// `month` must be in `1..=12`.
    pub(crate) fn saturating(year: i32, month: u32, day: u32) -> Self {
        let (year, month, day) = if year < MIN_YEAR {
            (MIN_YEAR, 1, 1)
        } else if year > MAX_YEAR {
            (MAX_YEAR, 12, 31)
        } else {
            (year, month, day.clamp(1, days_in_month(year, month)))
        };
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }

    /// The current local date.
    pub fn today() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::saturating(today.year(), today.month(), today.day())
    }

    #[inline]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-12
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 1-31
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self::saturating(self.year(), self.month(), 1)
    }

    /// The last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        Self::saturating(self.year(), self.month(), days_in_month(self.year(), self.month()))
    }

    /// Is this the last day of its month?
    pub fn is_last_of_month(&self) -> bool {
        self.day() == days_in_month(self.year(), self.month())
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// ISO 8601 week number, 1-53.
    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    /// Same month and year as `other`?
    pub fn same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0.format(ISO_FORMAT), f)
    }
}

/// Strict parser for the canonical `YYYY-MM-DD` form.
///
/// Use [`crate::format::normalize`] for the other accepted input formats.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DateError::Empty);
        }
        // chrono alone would also take `24-3-5`.
        let shape_ok = s.len() == 10
            && s.split('-').map(str::len).eq([4, 2, 2])
            && s.split('-').all(is_digits);
        if !shape_ok {
            return Err(DateError::UnknownFormat {
                input: s.to_owned(),
            });
        }
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .ok()
            .and_then(Self::from_naive)
            .ok_or_else(|| DateError::out_of_range(&s[0..4], &s[5..7], &s[8..10]))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

/// A non-empty string of ASCII digits. No signs, no whitespace.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
