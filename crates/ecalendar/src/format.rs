//! Recognizing and normalizing the date strings a host may hand us.
//!
//! Hosts do not always speak `YYYY-MM-DD`; a host that shows the selection to a user may
//! well feed back `"Tuesday, March 5th 2024"`. [`detect`] finds which of the accepted
//! formats a string is in, and [`normalize`] turns it into a [`CalendarDate`].
//!
//! Parsing is strict: a two-digit year, a missing zero-pad, a wrong weekday name or a
//! wrong ordinal suffix is a mismatch, never a guess.

use chrono::{Datelike as _, Month, NaiveDate};

use crate::{
    CalendarDate, DateError,
    date::{ISO_FORMAT, is_digits},
};

const LONG_FORMAT: &str = "%A, %B %d %Y";

/// What [`detect_pattern`] returns when no format matches.
pub const UNKNOWN_FORMAT: &str = "unknown";

/// One of the accepted input formats, named after the pattern it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DateFormat {
    /// `dddd, MMMM Do YYYY`, e.g. `Tuesday, March 5th 2024`.
    LongOrdinal,

    /// `dddd, MMMM D YYYY`, e.g. `Tuesday, March 5 2024`.
    Long,

    /// `YYYY-MM-DD`, e.g. `2024-03-05`. The canonical form.
    Iso,

    /// `MM-DD-YYYY`, e.g. `03-05-2024`.
    MonthDayYear,
}

impl DateFormat {
    /// All accepted formats, in the order [`detect`] tries them.
    pub const ACCEPTED: [Self; 4] = [Self::LongOrdinal, Self::Long, Self::Iso, Self::MonthDayYear];

    pub fn pattern(self) -> &'static str {
        match self {
            Self::LongOrdinal => "dddd, MMMM Do YYYY",
            Self::Long => "dddd, MMMM D YYYY",
            Self::Iso => "YYYY-MM-DD",
            Self::MonthDayYear => "MM-DD-YYYY",
        }
    }

    /// Strictly parse `input` in this format.
    pub fn parse(self, input: &str) -> Result<CalendarDate, DateError> {
        if input.trim().is_empty() {
            return Err(DateError::Empty);
        }
        match self {
            Self::LongOrdinal => parse_long(input, true),
            Self::Long => parse_long(input, false),
            Self::Iso => input.parse(),
            Self::MonthDayYear => parse_month_day_year(input),
        }
    }

    /// Render `date` in this format.
    pub fn format(self, date: CalendarDate) -> String {
        let naive = date.naive();
        match self {
            Self::LongOrdinal => {
                let suffix = ordinal_suffix(date.day());
                naive.format(&format!("%A, %B %-d{suffix} %Y")).to_string()
            }
            Self::Long => naive.format("%A, %B %-d %Y").to_string(),
            Self::Iso => naive.format(ISO_FORMAT).to_string(),
            Self::MonthDayYear => naive.format("%m-%d-%Y").to_string(),
        }
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern())
    }
}

/// The first of [`DateFormat::ACCEPTED`] that strictly parses `input`, if any.
pub fn detect(input: &str) -> Option<DateFormat> {
    DateFormat::ACCEPTED
        .into_iter()
        .find(|format| format.parse(input).is_ok())
}

/// Like [`detect`], but returns the pattern string, or [`UNKNOWN_FORMAT`].
pub fn detect_pattern(input: &str) -> &'static str {
    detect(input).map_or(UNKNOWN_FORMAT, DateFormat::pattern)
}

/// Parse `input` in whichever accepted format it is in.
pub fn normalize(input: &str) -> Result<CalendarDate, DateError> {
    if input.trim().is_empty() {
        return Err(DateError::Empty);
    }
    DateFormat::ACCEPTED
        .into_iter()
        .find_map(|format| format.parse(input).ok())
        .ok_or_else(|| DateError::UnknownFormat {
            input: input.to_owned(),
        })
}

/// `st`, `nd`, `rd` or `th`.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn parse_month_day_year(input: &str) -> Result<CalendarDate, DateError> {
    // chrono alone would also take `3-5-2024` and `03-05-24`.
    let shape_ok = input.len() == 10
        && input.split('-').map(str::len).eq([2, 2, 4])
        && input.split('-').all(is_digits);
    if !shape_ok {
        return Err(unknown(input));
    }
    NaiveDate::parse_from_str(input, "%m-%d-%Y")
        .ok()
        .and_then(CalendarDate::from_naive)
        .ok_or_else(|| DateError::out_of_range(&input[6..10], &input[0..2], &input[3..5]))
}

/// `dddd, MMMM D YYYY`, optionally with an ordinal suffix after the day.
///
/// chrono checks that the weekday agrees with the date. Names must be spelled out in
/// full (chrono would also take `Tue` and `Mar`), the day has one or two digits, and the
/// year has exactly four.
fn parse_long(input: &str, ordinal: bool) -> Result<CalendarDate, DateError> {
    let (weekday, rest) = input.split_once(", ").ok_or_else(|| unknown(input))?;
    let mut parts = rest.split(' ');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(unknown(input));
    };

    let day = if ordinal {
        let split = day
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| unknown(input))?;
        let (digits, suffix) = day.split_at(split);
        let value = digits.parse().map_err(|_err| unknown(input))?;
        if !suffix.eq_ignore_ascii_case(ordinal_suffix(value)) {
            return Err(unknown(input));
        }
        digits
    } else {
        day
    };
    let digits_ok = (1..=2).contains(&day.len()) && is_digits(day);
    if !digits_ok || year.len() != 4 || !is_digits(year) {
        return Err(unknown(input));
    }

    let text = format!("{weekday}, {month} {day} {year}");
    let date = NaiveDate::parse_from_str(&text, LONG_FORMAT).map_err(|_err| unknown(input))?;
    let full_names = date.format("%A").to_string().eq_ignore_ascii_case(weekday)
        && Month::try_from(date.month() as u8)
            .is_ok_and(|name| name.name().eq_ignore_ascii_case(month));
    if !full_names {
        return Err(unknown(input));
    }
    CalendarDate::from_naive(date).ok_or_else(|| unknown(input))
}

fn unknown(input: &str) -> DateError {
    DateError::UnknownFormat {
        input: input.to_owned(),
    }
}
