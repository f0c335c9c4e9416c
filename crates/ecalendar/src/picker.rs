//! [`DatePicker`]: everything one date picker widget needs, behind the events a
//! presentation layer sends it.

use crate::{
    CalendarDate, CalendarMode, CalendarOptions, CalendarState, GridCell, MaskBuffer, MaskOutcome,
    MaskedInput, ModeEvent, MonthGrid, SelectOutcome, SubscriptionId,
    panel::{DaysPanel, Direction, MonthCell, MonthsPanel, YearCell, YearsPanel},
};

type DateChangeCallback = Box<dyn FnMut(&str)>;

/// Where a selection came from. That view keeps what the user did there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    Panel,
    MaskedInput,
}

/// A headless date picker.
///
/// Feed it user actions (`on_*` methods) and read back what to show
/// ([`Self::grid`], [`Self::mode`], [`Self::mask_text`], ...). Every accepted
/// selection is reported once to the callback set with [`Self::on_date_change`].
///
/// Within one action the order is always: update the state and the views, call the
/// host callback, then request (or apply) the mode change.
///
/// ```
/// use ecalendar::{CalendarDate, CalendarMode, CalendarOptions, DatePicker};
///
/// let today: CalendarDate = "2024-02-14".parse().unwrap();
/// let mut picker = DatePicker::with_today(None, CalendarOptions::default(), today);
///
/// picker.on_mode_request(CalendarMode::Months);
/// picker.on_month_cell_select(6);
/// assert_eq!(picker.date().to_string(), "2024-06-14");
///
/// // The month chooser fades out before the day grid comes back:
/// assert_eq!(picker.mode(), CalendarMode::Months);
/// picker.commit_transition();
/// assert_eq!(picker.mode(), CalendarMode::Days);
/// ```
pub struct DatePicker {
    options: CalendarOptions,
    state: CalendarState,
    today: CalendarDate,
    days: DaysPanel,
    months: MonthsPanel,
    years: YearsPanel,
    input: MaskedInput,
    open: bool,
    on_date_change: Option<DateChangeCallback>,
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("today", &self.today)
            .field("days", &self.days)
            .field("months", &self.months)
            .field("years", &self.years)
            .field("input", &self.input)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl DatePicker {
    /// A picker with default options.
    ///
    /// `host_date` makes it controlled; see [`CalendarState::new`].
    pub fn new(host_date: Option<&str>) -> Self {
        Self::with_options(host_date, CalendarOptions::default())
    }

    pub fn with_options(host_date: Option<&str>, options: CalendarOptions) -> Self {
        Self::with_today(host_date, options, CalendarDate::today())
    }

    /// Like [`Self::with_options`], with an explicit "today".
    pub fn with_today(
        host_date: Option<&str>,
        options: CalendarOptions,
        today: CalendarDate,
    ) -> Self {
        let state = CalendarState::with_today(host_date, today);
        let date = state.date();
        Self {
            options,
            state,
            today,
            days: DaysPanel::new(date),
            months: MonthsPanel::new(date),
            years: YearsPanel::new(date),
            input: MaskedInput::new(Some(date)),
            open: false,
            on_date_change: None,
        }
    }

    /// Called with the canonical `YYYY-MM-DD` string of every accepted selection.
    #[inline]
    pub fn on_date_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_date_change = Some(Box::new(callback));
        self
    }

    // ------------------------------------------------------------------------
    // Host side

    /// The host passed a new (or no) controlled date.
    pub fn set_host_date(&mut self, host_date: Option<&str>) -> SelectOutcome {
        let outcome = self.state.set_host_date(host_date);
        if outcome.changed() {
            self.reset_views(Origin::Panel);
        }
        outcome
    }

    /// Call `callback` whenever the selected date changes. See [`CalendarState::subscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(CalendarDate) + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Update "today", e.g. after midnight.
    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
    }

    // ------------------------------------------------------------------------
    // Presentation side: inbound

    /// Previous/next arrows of the day panel.
    pub fn on_month_navigate(&mut self, direction: Direction) {
        if self.mode() == CalendarMode::Days {
            self.days.navigate(direction);
        }
    }

    /// Previous/next year arrows. In the year chooser this moves a whole page.
    pub fn on_year_navigate(&mut self, direction: Direction) {
        match self.mode() {
            CalendarMode::Days => {
                self.days.navigate_year(direction);
            }
            CalendarMode::Months => {
                self.months.navigate(direction);
            }
            CalendarMode::Years => {
                self.years.navigate(direction, self.options.years_per_page);
            }
            CalendarMode::Time => {}
        }
    }

    /// A day cell was clicked. Closes the panel.
    pub fn on_day_cell_select(&mut self, date: CalendarDate) -> SelectOutcome {
        let outcome = self.accept(date, Origin::Panel);
        self.open = false;
        outcome
    }

    /// A month (1-12) was picked in the month chooser.
    ///
    /// Selects that month of the browsed year, closes the panel and heads back to the
    /// day grid. Returns `None` for an invalid month.
    pub fn on_month_cell_select(&mut self, month: u32) -> Option<SelectOutcome> {
        let date = self.months.pick(month)?;
        let outcome = self.accept(date, Origin::Panel);
        self.open = false;
        self.mode_event(ModeEvent::MonthPicked);
        Some(outcome)
    }

    /// A year was picked in the year chooser.
    ///
    /// Selects that year, keeping month and day, closes the panel and heads back to the
    /// day grid. Returns `None` for an unrepresentable year.
    pub fn on_year_cell_select(&mut self, year: i32) -> Option<SelectOutcome> {
        let date = self.years.pick(year)?;
        let outcome = self.accept(date, Origin::Panel);
        self.open = false;
        self.mode_event(ModeEvent::YearPicked);
        Some(outcome)
    }

    /// The user asked for a panel directly (clicked the month or year in the header,
    /// or a "back" button). Applies immediately.
    ///
    /// Returns the new mode, or `None` if the request makes no sense from the current mode.
    pub fn on_mode_request(&mut self, mode: CalendarMode) -> Option<CalendarMode> {
        let event = match mode {
            CalendarMode::Days => ModeEvent::Dismiss,
            CalendarMode::Months => ModeEvent::ChooseMonth,
            CalendarMode::Years => ModeEvent::ChooseYear,
            CalendarMode::Time => return None,
        };
        let next = self.state.transition(event)?;
        match next {
            CalendarMode::Months => self.months.reset(self.state.date()),
            CalendarMode::Years => self.years.reset(self.state.date()),
            CalendarMode::Days | CalendarMode::Time => {}
        }
        Some(next)
    }

    /// The masked input's text changed to `raw`.
    ///
    /// The corrected text is in [`MaskOutcome::buffer`] (and [`Self::mask_text`]).
    /// A complete valid date is selected.
    pub fn on_mask_keystroke(&mut self, raw: &str) -> MaskOutcome {
        let outcome = self.input.on_keystroke(raw);
        if let Some(date) = outcome.date {
            self.accept(date, Origin::MaskedInput);
        }
        outcome
    }

    /// Open or close the panel.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Clicked outside the open panel: close it, and head back to the day grid.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.mode_event(ModeEvent::Dismiss);
    }

    /// The panel's fade-out finished: apply the pending mode change, if any.
    ///
    /// Call this [`CalendarOptions::fade_duration`] after a mode change was requested.
    pub fn commit_transition(&mut self) -> Option<CalendarMode> {
        self.state.commit_transition()
    }

    // ------------------------------------------------------------------------
    // Presentation side: outbound

    #[inline]
    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    #[inline]
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// The selected date.
    #[inline]
    pub fn date(&self) -> CalendarDate {
        self.state.date()
    }

    #[inline]
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    #[inline]
    pub fn mode(&self) -> CalendarMode {
        self.state.mode()
    }

    /// The mode a deferred transition will move to.
    #[inline]
    pub fn pending_mode(&self) -> Option<CalendarMode> {
        self.state.modes().pending()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn days_panel(&self) -> &DaysPanel {
        &self.days
    }

    #[inline]
    pub fn months_panel(&self) -> &MonthsPanel {
        &self.months
    }

    #[inline]
    pub fn years_panel(&self) -> &YearsPanel {
        &self.years
    }

    /// The day grid of the displayed month.
    pub fn grid(&self) -> MonthGrid {
        self.days.grid(
            self.options.effective_week_start(),
            self.today,
            self.state.date(),
        )
    }

    /// Shorthand for `self.grid().into_cells()`.
    pub fn grid_cells(&self) -> Vec<GridCell> {
        self.grid().into_cells()
    }

    /// Column headers of the day grid.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        self.options
            .locale
            .weekday_labels(self.options.effective_week_start())
    }

    /// Label of the month button in the day panel header.
    pub fn month_label(&self) -> &'static str {
        self.days.month_label(self.options.locale)
    }

    /// Label of the year button in the day panel header.
    pub fn year_label(&self) -> String {
        self.days.year_label()
    }

    pub fn month_cells(&self) -> Vec<MonthCell> {
        self.months.cells(self.options.locale, self.state.date())
    }

    pub fn year_cells(&self) -> Vec<YearCell> {
        self.years
            .cells(self.options.years_per_page, self.state.date())
    }

    /// Header of the year chooser, e.g. `"2024-2035"`.
    pub fn year_range_label(&self) -> String {
        self.years.range_label(self.options.years_per_page)
    }

    #[inline]
    pub fn mask_buffer(&self) -> &MaskBuffer {
        self.input.buffer()
    }

    /// What the masked input should show.
    pub fn mask_text(&self) -> String {
        self.input.text()
    }

    // ------------------------------------------------------------------------

    fn accept(&mut self, date: CalendarDate, origin: Origin) -> SelectOutcome {
        let outcome = self.state.select_date(date);
        if outcome.changed() {
            self.reset_views(origin);
            if let Some(callback) = &mut self.on_date_change {
                callback(&date.to_string());
            }
        }
        outcome
    }

    /// The selected date changed outside of some views: bring them back to it.
    fn reset_views(&mut self, origin: Origin) {
        let date = self.state.date();
        self.days.reset(date);
        self.months.reset(date);
        self.years.reset(date);
        if origin != Origin::MaskedInput {
            self.input.reset(date);
        }
    }

    fn mode_event(&mut self, event: ModeEvent) {
        if self.options.deferred_transitions {
            self.state.request_transition(event);
        } else {
            self.state.transition(event);
        }
    }
}
