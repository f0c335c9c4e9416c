//! Which chooser panel is showing, and how user actions move between them.

/// The active panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CalendarMode {
    /// Month grid of days. The initial mode.
    #[default]
    Days,

    /// Twelve months of the browsed year.
    Months,

    /// A page of years.
    Years,

    /// Reserved for time-of-day selection. Nothing transitions here yet.
    Time,
}

/// A user action that may change the [`CalendarMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    /// Open the month chooser (clicked the month name in the day panel header).
    ChooseMonth,

    /// Open the year chooser (clicked the year in the day panel header).
    ChooseYear,

    /// A month was picked in the month chooser.
    MonthPicked,

    /// A year was picked in the year chooser.
    YearPicked,

    /// Clicked outside the panel, or otherwise dismissed it.
    Dismiss,
}

impl CalendarMode {
    /// The mode `event` leads to from `self`, or `None` if `event` means nothing here.
    ///
    /// Such events can come from stale UI during an animation, and are ignored.
    pub fn after(self, event: ModeEvent) -> Option<Self> {
        match (self, event) {
            (Self::Days, ModeEvent::ChooseMonth) => Some(Self::Months),
            (Self::Days, ModeEvent::ChooseYear) => Some(Self::Years),
            (Self::Months, ModeEvent::MonthPicked)
            | (Self::Years, ModeEvent::YearPicked)
            | (_, ModeEvent::Dismiss) => Some(Self::Days),
            _ => None,
        }
    }
}

/// Holds the current [`CalendarMode`] and an optional pending transition.
///
/// A transition triggered from inside an animated panel should not swap the content
/// before the panel has faded out. Such transitions are first [requested](Self::request),
/// and the presentation layer calls [`Self::commit`] when its animation is done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ModeStateMachine {
    mode: CalendarMode,
    pending: Option<CalendarMode>,
}

impl ModeStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    /// The mode a requested transition will move to on [`Self::commit`].
    #[inline]
    pub fn pending(&self) -> Option<CalendarMode> {
        self.pending
    }

    /// Force a mode. Drops any pending transition.
    pub fn set_mode(&mut self, mode: CalendarMode) {
        self.mode = mode;
        self.pending = None;
    }

    /// Apply `event` right away.
    ///
    /// Returns the new mode, or `None` if `event` was ignored.
    pub fn transition(&mut self, event: ModeEvent) -> Option<CalendarMode> {
        let next = self.mode.after(event)?;
        log::debug!("Calendar mode {:?} -> {next:?} ({event:?})", self.mode);
        self.set_mode(next);
        Some(next)
    }

    /// Schedule `event` to be applied on the next [`Self::commit`].
    ///
    /// Returns the mode that will be committed, or `None` if `event` was ignored.
    /// A later request replaces an earlier one.
    pub fn request(&mut self, event: ModeEvent) -> Option<CalendarMode> {
        let next = self.mode.after(event)?;
        self.pending = Some(next);
        Some(next)
    }

    /// Apply the pending transition, if any.
    pub fn commit(&mut self) -> Option<CalendarMode> {
        let next = self.pending.take()?;
        log::debug!("Calendar mode {:?} -> {next:?} (committed)", self.mode);
        self.mode = next;
        Some(next)
    }

    /// Forget the pending transition, e.g. because the panel went away.
    pub fn cancel(&mut self) -> Option<CalendarMode> {
        self.pending.take()
    }
}
