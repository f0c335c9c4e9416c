//! The masked `YYYY/MM/DD` text input.
//!
//! Instead of validating the whole string once it is typed, every keystroke runs a
//! fixed sequence of position-local corrections (year, then month, then day) over the
//! buffer. That keeps the text a plausible date prefix at all times without moving
//! the user's cursor around.

use crate::{CalendarDate, arithmetic::days_in_month};

/// The mask: four year digits, two month digits, two day digits.
pub const MASK_TEMPLATE: &str = "NNNN/NN/NN";

/// Shown in unfilled slots.
pub const PLACEHOLDER: char = '_';

/// The fixed separator at positions 4 and 7.
pub const SEPARATOR: char = '/';

const NUM_SLOTS: usize = 8;

const YEAR: std::ops::Range<usize> = 0..4;
const MONTH_TENS: usize = 4;
const MONTH_ONES: usize = 5;
const DAY_TENS: usize = 6;
const DAY_ONES: usize = 7;

/// The eight digit slots of the mask, each filled or empty.
///
/// Displays as the ten character masked text, e.g. `2024/0_/__`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MaskBuffer {
    slots: [Option<u8>; NUM_SLOTS],
}

impl MaskBuffer {
    /// `____/__/__`
    pub fn empty() -> Self {
        Self::default()
    }

    /// A completely filled buffer showing `date`.
    pub fn from_date(date: CalendarDate) -> Self {
        let text = format!("{:04}{:02}{:02}", date.year(), date.month(), date.day());
        let mut slots = [None; NUM_SLOTS];
        for (slot, byte) in slots.iter_mut().zip(text.bytes()) {
            *slot = Some(byte - b'0');
        }
        Self { slots }
    }

    /// Interpret the raw text of the input field.
    ///
    /// Separators are skipped, so both `2024/03/05` and `20240305` fill the same slots.
    /// [`PLACEHOLDER`]s, spaces and missing trailing characters leave a slot empty.
    /// A character the mask does not accept in its slot (a letter, a `4` as the
    /// first month digit, ...) keeps whatever `previous` had there, just like a mask
    /// input that refuses the keystroke.
    pub fn from_raw(previous: &Self, raw: &str) -> Self {
        let mut chars = raw.chars().filter(|&c| c != SEPARATOR);
        let mut slots = [None; NUM_SLOTS];
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = match chars.next() {
                None | Some(PLACEHOLDER | ' ') => None,
                Some(c) => match c.to_digit(10) {
                    Some(digit) if slot_accepts(index, digit) => Some(digit as u8),
                    _ => previous.slots[index],
                },
            };
        }
        Self { slots }
    }

    /// The digit in slot `index` (0-7), if filled.
    pub fn slot(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// All eight slots are filled.
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The date in the buffer, if it is filled and names a real day.
    pub fn to_date(&self) -> Option<CalendarDate> {
        if !self.is_filled() {
            return None;
        }
        let number = |range: std::ops::Range<usize>| {
            self.slots[range]
                .iter()
                .flatten()
                .fold(0_u32, |acc, &digit| acc * 10 + u32::from(digit))
        };
        let year = number(0..4) as i32;
        CalendarDate::from_ymd(year, number(4..6), number(6..8))
    }

    /// Run the year, month and day corrections, in that order.
    pub fn corrected(self) -> Self {
        self.correct_year().correct_month().correct_day()
    }

    /// A leading year digit below 2 becomes 2.
    ///
    /// This pins typed years to 2000 and later. There is no locale override for it.
    fn correct_year(mut self) -> Self {
        if self.slots[0].is_some_and(|digit| digit < 2) {
            self.slots[0] = Some(2);
        }
        self
    }

    /// The month tens digit must be 0 or 1, and a month starting with 1 caps at 12.
    fn correct_month(mut self) -> Self {
        if self.slots[MONTH_TENS].is_some_and(|digit| digit > 1) {
            self.slots[MONTH_TENS] = None;
        }
        if let (Some(tens), Some(ones)) = (self.slots[MONTH_TENS], self.slots[MONTH_ONES])
            && tens >= 1
            && ones > 2
        {
            self.slots[MONTH_ONES] = Some(2);
        }
        self
    }

    /// Bound the day by the length of the month the year and month prefix points at.
    ///
    /// A day tens digit above the tens digit of the month length is lowered to it. When
    /// the tens digits are equal, the ones digit becomes the ones digit of the month
    /// length, so `2024/02/2x` always reads `2024/02/29`.
    fn correct_day(mut self) -> Self {
        let Some(days) = self.prefix_days_in_month() else {
            return self;
        };
        let (max_tens, max_ones) = ((days / 10) as u8, (days % 10) as u8);

        if self.slots[DAY_TENS].is_some_and(|digit| digit > max_tens) {
            self.slots[DAY_TENS] = Some(max_tens);
        }
        if self.slots[DAY_TENS] == Some(max_tens) && self.slots[DAY_ONES].is_some() {
            self.slots[DAY_ONES] = Some(max_ones);
        }
        self
    }

    /// Length of the month named by the (possibly partial) year and month.
    ///
    /// The year is read from the filled leading year digits; no year digit, no answer.
    /// A missing month reads as January. A lone month tens digit of `1` reads as
    /// January, a lone `0` (or a filled month outside 1-12) gives no answer.
    /// A lone ones digit is the month (`_2` is February).
    fn prefix_days_in_month(&self) -> Option<u32> {
        let year_digits: Vec<u8> = self.slots[YEAR].iter().map_while(|slot| *slot).collect();
        if year_digits.is_empty() {
            return None;
        }
        let year = year_digits
            .iter()
            .fold(0_i32, |acc, &digit| acc * 10 + i32::from(digit));

        let month = match (self.slots[MONTH_TENS], self.slots[MONTH_ONES]) {
            (Some(tens), Some(ones)) => u32::from(tens * 10 + ones),
            (Some(tens), None) => u32::from(tens),
            (None, Some(ones)) => u32::from(ones),
            (None, None) => 1,
        };
        (1..=12)
            .contains(&month)
            .then(|| days_in_month(year, month))
    }
}

impl std::fmt::Display for MaskBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write as _;

        let mut slots = self.slots.iter();
        for c in MASK_TEMPLATE.chars() {
            if c != 'N' {
                f.write_char(c)?;
                continue;
            }
            match slots.next().copied().flatten() {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char(PLACEHOLDER)?,
            }
        }
        Ok(())
    }
}

/// What the mask lets through in slot `index`, before any correction.
fn slot_accepts(index: usize, digit: u32) -> bool {
    match index {
        MONTH_TENS => digit <= 2,
        DAY_TENS => digit <= 3,
        _ => digit <= 9,
    }
}

/// Result of one keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskOutcome {
    /// The corrected buffer. Always written back into the input field.
    pub buffer: MaskBuffer,

    /// `Some` once the buffer holds a complete, valid date.
    pub date: Option<CalendarDate>,
}

impl MaskOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
    }
}

/// Correct the raw input text after an edit.
///
/// `previous` is the buffer before the edit.
pub fn correct(previous: &MaskBuffer, raw: &str) -> MaskOutcome {
    let buffer = MaskBuffer::from_raw(previous, raw).corrected();
    let date = buffer.to_date();
    log::trace!("Masked date input {raw:?} -> {buffer} (complete: {})", date.is_some());
    MaskOutcome { buffer, date }
}

/// The state of one masked date input field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MaskedInput {
    buffer: MaskBuffer,
}

impl MaskedInput {
    /// An input showing `date`, or an empty mask.
    pub fn new(date: Option<CalendarDate>) -> Self {
        Self {
            buffer: date.map(MaskBuffer::from_date).unwrap_or_default(),
        }
    }

    #[inline]
    pub fn buffer(&self) -> &MaskBuffer {
        &self.buffer
    }

    /// The text to show in the input field.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The user edited the field; `raw` is its new text.
    pub fn on_keystroke(&mut self, raw: &str) -> MaskOutcome {
        let outcome = correct(&self.buffer, raw);
        self.buffer = outcome.buffer;
        outcome
    }

    /// Show `date`, replacing whatever was typed.
    pub fn reset(&mut self, date: CalendarDate) {
        self.buffer = MaskBuffer::from_date(date);
    }
}
