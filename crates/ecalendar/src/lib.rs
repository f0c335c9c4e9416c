//! The date handling behind a date picker widget, without any widget.
//!
//! `ecalendar` does the parts of a date picker that are not drawing:
//! * [`arithmetic`]: stepping by months and years with end-of-month clamping, month lengths, weekdays.
//! * [`MonthGrid`]: a month laid out as a seven-column grid, blanks included.
//! * [`ModeStateMachine`]: switching between the day grid and the month and year choosers.
//! * [`mask`]: a `YYYY/MM/DD` masked text input that corrects itself on every keystroke.
//! * [`format`]: recognizing the date strings a host hands in, and normalizing them.
//! * [`CalendarState`]: the selected date and mode, controlled by the host or not.
//!
//! [`DatePicker`] puts all of it together behind the events a presentation layer sends.
//! All dates are timezone-naive [`CalendarDate`]s.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

pub mod arithmetic;
mod date;
pub mod format;
mod grid;
mod locale;
pub mod mask;
mod mode;
mod options;
pub mod panel;
mod picker;
mod state;

pub use crate::{
    arithmetic::WeekStart,
    date::{CalendarDate, DateError, MAX_YEAR, MIN_YEAR},
    format::DateFormat,
    grid::{GridCell, GridRow, MonthGrid},
    locale::Locale,
    mask::{MaskBuffer, MaskOutcome, MaskedInput},
    mode::{CalendarMode, ModeEvent, ModeStateMachine},
    options::CalendarOptions,
    picker::DatePicker,
    state::{CalendarState, DateSource, SelectOutcome, SubscriptionId},
};

pub use chrono;
