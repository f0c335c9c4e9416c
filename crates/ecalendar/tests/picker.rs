use std::{cell::RefCell, rc::Rc};

use ecalendar::{
    CalendarDate, CalendarMode, CalendarOptions, DatePicker, DateFormat, Locale, SelectOutcome,
    panel::Direction,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// A picker whose host callback records every date it is told about.
fn picker_with_log(
    host_date: Option<&str>,
    options: CalendarOptions,
) -> (DatePicker, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let picker = DatePicker::with_today(host_date, options, date("2024-02-14"))
        .on_date_change(move |date| sink.borrow_mut().push(date.to_owned()));
    (picker, log)
}

#[test]
fn day_selection_reports_once_and_closes() {
    let (mut picker, log) = picker_with_log(None, CalendarOptions::default());
    picker.toggle();
    assert!(picker.is_open());

    assert_eq!(picker.on_day_cell_select(date("2024-02-20")), SelectOutcome::Changed);
    assert!(!picker.is_open());
    assert_eq!(picker.on_day_cell_select(date("2024-02-20")), SelectOutcome::Unchanged);

    assert_eq!(*log.borrow(), ["2024-02-20"]);
    assert_eq!(picker.mask_text(), "2024/02/20");
    let selected: Vec<_> = picker
        .grid_cells()
        .into_iter()
        .filter(|cell| cell.is_selected)
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "20");
}

#[test]
fn month_navigation_does_not_select() {
    let (mut picker, log) = picker_with_log(None, CalendarOptions::default().locale(Locale::En));
    picker.on_month_navigate(Direction::Next);
    assert_eq!(picker.month_label(), "March");
    assert_eq!(picker.year_label(), "2024");
    assert_eq!(picker.date(), date("2024-02-14"));
    assert!(picker.grid_cells().iter().all(|cell| !cell.is_selected && !cell.is_today));

    picker.on_year_navigate(Direction::Previous);
    assert_eq!(picker.year_label(), "2023");
    assert!(log.borrow().is_empty());
}

#[test]
fn picking_a_month_returns_to_days_in_the_browsed_year() {
    let (mut picker, log) = picker_with_log(None, CalendarOptions::default());
    picker.toggle();

    assert_eq!(picker.on_mode_request(CalendarMode::Months), Some(CalendarMode::Months));
    picker.on_year_navigate(Direction::Previous);
    picker.on_year_navigate(Direction::Previous);
    assert_eq!(picker.months_panel().year(), 2022);

    assert_eq!(picker.on_month_cell_select(11), Some(SelectOutcome::Changed));
    assert_eq!(picker.date(), date("2022-11-14"));
    assert_eq!(*log.borrow(), ["2022-11-14"]);
    assert!(!picker.is_open());

    // Deferred until the fade-out is over:
    assert_eq!(picker.mode(), CalendarMode::Months);
    assert_eq!(picker.pending_mode(), Some(CalendarMode::Days));
    assert_eq!(picker.commit_transition(), Some(CalendarMode::Days));
    assert_eq!(picker.mode(), CalendarMode::Days);

    // The day grid shows the picked month.
    assert_eq!(picker.days_panel().displayed(), date("2022-11-14"));
}

#[test]
fn picking_a_year_keeps_month_and_day() {
    let options = CalendarOptions::default().deferred_transitions(false);
    let (mut picker, _log) = picker_with_log(Some("2024-02-29"), options);

    picker.toggle();
    picker.on_mode_request(CalendarMode::Years);
    assert_eq!(picker.year_range_label(), "2024-2035");
    picker.on_year_navigate(Direction::Next);
    assert_eq!(picker.year_cells()[0].year, 2036);

    assert_eq!(picker.on_year_cell_select(2037), Some(SelectOutcome::Changed));
    assert_eq!(picker.mode(), CalendarMode::Days, "applied immediately");
    assert!(!picker.is_open());
    assert_eq!(picker.state().internal_date(), date("2037-02-28"));
}

#[test]
fn stale_mode_requests_are_ignored() {
    let (mut picker, _log) = picker_with_log(None, CalendarOptions::default());
    picker.on_mode_request(CalendarMode::Years);
    assert_eq!(picker.on_mode_request(CalendarMode::Months), None);
    assert_eq!(picker.on_mode_request(CalendarMode::Time), None);
    assert_eq!(picker.mode(), CalendarMode::Years);
    assert_eq!(picker.on_mode_request(CalendarMode::Days), Some(CalendarMode::Days));
}

#[test]
fn dismiss_closes_and_defers_return_to_days() {
    let (mut picker, _log) = picker_with_log(None, CalendarOptions::default());
    picker.toggle();
    picker.on_mode_request(CalendarMode::Months);
    picker.dismiss();
    assert!(!picker.is_open());
    assert_eq!(picker.mode(), CalendarMode::Months);
    picker.commit_transition();
    assert_eq!(picker.mode(), CalendarMode::Days);
}

#[test]
fn controlled_picker_reverts_until_host_reflects() {
    let (mut picker, log) = picker_with_log(Some("Tuesday, March 5th 2024"), CalendarOptions::default());
    assert_eq!(picker.date(), date("2024-03-05"));

    assert_eq!(picker.on_day_cell_select(date("2024-03-08")), SelectOutcome::Changed);
    assert_eq!(*log.borrow(), ["2024-03-08"]);
    assert_eq!(picker.date(), date("2024-03-05"), "host has not reflected the change");

    // Clicking the same day again while the host catches up reports nothing new.
    assert_eq!(picker.on_day_cell_select(date("2024-03-08")), SelectOutcome::Unchanged);
    assert_eq!(*log.borrow(), ["2024-03-08"]);

    // The host reflects it, in its own display format.
    let reflected = DateFormat::LongOrdinal.format(date(&log.borrow()[0]));
    assert_eq!(reflected, "Friday, March 8th 2024");
    assert_eq!(picker.set_host_date(Some(&reflected)), SelectOutcome::Changed);
    assert_eq!(picker.date(), date("2024-03-08"));
    assert_eq!(picker.mask_text(), "2024/03/08");
}

#[test]
fn host_change_resets_views() {
    let (mut picker, _log) = picker_with_log(Some("2024-03-05"), CalendarOptions::default());
    picker.on_month_navigate(Direction::Next);
    picker.on_month_navigate(Direction::Next);
    picker.set_host_date(Some("2025-07-01"));
    assert_eq!(picker.days_panel().displayed(), date("2025-07-01"));
    assert_eq!(picker.mask_text(), "2025/07/01");
}

#[test]
fn masked_input_writes_through_when_complete() {
    let (mut picker, log) = picker_with_log(None, CalendarOptions::default());
    let subscribed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&subscribed);
    picker.subscribe(move |date| sink.borrow_mut().push(date));

    let outcome = picker.on_mask_keystroke("2024/04/__");
    assert!(!outcome.is_complete());
    assert_eq!(picker.mask_text(), "2024/04/__");
    assert!(log.borrow().is_empty());

    let outcome = picker.on_mask_keystroke("2024/04/31");
    assert_eq!(outcome.buffer.to_string(), "2024/04/30");
    assert_eq!(picker.mask_text(), "2024/04/30");
    assert_eq!(picker.date(), date("2024-04-30"));
    assert_eq!(*log.borrow(), ["2024-04-30"]);
    assert_eq!(*subscribed.borrow(), [date("2024-04-30")]);
    assert_eq!(picker.days_panel().displayed(), date("2024-04-30"));
}

#[test]
fn week_start_follows_locale() {
    let (picker, _log) = picker_with_log(None, CalendarOptions::default().locale(Locale::EnUs));
    assert_eq!(picker.weekday_labels(), ["S", "M", "T", "W", "T", "F", "S"]);
    // 2024-02-01 is a Thursday: four blanks when weeks start on Sunday.
    assert_eq!(picker.grid().leading_blanks(), 4);

    let (picker, _log) = picker_with_log(None, CalendarOptions::default());
    assert_eq!(picker.weekday_labels(), ["L", "M", "M", "J", "V", "S", "D"]);
    assert_eq!(picker.grid().leading_blanks(), 3);
}
