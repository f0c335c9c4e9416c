//! [`CalendarState`]: the selected date and mode shared by every panel of one widget.

use crate::{
    CalendarDate, DateError,
    format::normalize,
    mode::{CalendarMode, ModeEvent, ModeStateMachine},
};

/// Where the selected date comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateSource {
    /// The host owns the value. Reads always return the host's date.
    ///
    /// Selections only update `mirror`; the host decides whether to pass them back in
    /// through [`CalendarState::set_host_date`].
    Controlled {
        /// The host's value, normalized.
        host: CalendarDate,

        /// The last selection (or the host value, before any selection).
        mirror: CalendarDate,
    },

    /// The widget owns the value.
    Uncontrolled(CalendarDate),
}

impl DateSource {
    /// The date everyone should display.
    pub fn date(&self) -> CalendarDate {
        match self {
            Self::Controlled { host, .. } => *host,
            Self::Uncontrolled(date) => *date,
        }
    }

    /// The internally tracked date. Equal to [`Self::date`] when uncontrolled.
    pub fn internal(&self) -> CalendarDate {
        match self {
            Self::Controlled { mirror, .. } => *mirror,
            Self::Uncontrolled(date) => *date,
        }
    }
}

/// Did a selection change anything?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Stored, and subscribers were notified.
    Changed,

    /// Equal to the current date. Nothing was stored and nobody was notified.
    Unchanged,
}

impl SelectOutcome {
    #[inline]
    pub fn changed(self) -> bool {
        self == Self::Changed
    }
}

/// Returned by [`CalendarState::subscribe`], used to [unsubscribe](CalendarState::unsubscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(CalendarDate)>;

/// The selected date and the panel mode of one widget instance.
///
/// Created once when the widget mounts; creating it is what initializes it, so
/// there is no way to read it uninitialized.
///
/// Panels read through `&CalendarState` and request changes through [`Self::select`]
/// and [`Self::set_mode`]; those are the only ways the shared state changes.
/// Subscribers are called synchronously, in subscription order, whenever the selected date changes.
pub struct CalendarState {
    source: DateSource,
    modes: ModeStateMachine,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarState")
            .field("source", &self.source)
            .field("modes", &self.modes)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CalendarState {
    /// Controlled by `host_date` if it is given and can be parsed (in any format
    /// [`crate::format::detect`] knows), otherwise uncontrolled and starting today.
    pub fn new(host_date: Option<&str>) -> Self {
        Self::with_today(host_date, CalendarDate::today())
    }

    /// Like [`Self::new`], with an explicit "today".
    pub fn with_today(host_date: Option<&str>, today: CalendarDate) -> Self {
        Self {
            source: source_for(host_date, today),
            modes: ModeStateMachine::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    #[inline]
    pub fn source(&self) -> &DateSource {
        &self.source
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.source, DateSource::Controlled { .. })
    }

    /// The selected date, as every panel should show it.
    #[inline]
    pub fn date(&self) -> CalendarDate {
        self.source.date()
    }

    /// The internally tracked date. See [`DateSource::internal`].
    #[inline]
    pub fn internal_date(&self) -> CalendarDate {
        self.source.internal()
    }

    /// Select a date given in canonical `YYYY-MM-DD` form.
    ///
    /// # Errors
    /// A malformed date is rejected without touching the state or notifying anyone.
    pub fn select(&mut self, date: &str) -> Result<SelectOutcome, DateError> {
        match date.parse() {
            Ok(date) => Ok(self.select_date(date)),
            Err(err) => {
                log::debug!("Ignoring selection of malformed date {date:?}: {err}");
                Err(err)
            }
        }
    }

    /// Select `date`.
    ///
    /// Selecting the date that is already shown, or (when controlled) the last selection
    /// the host has not reflected yet, is a no-op ([`SelectOutcome::Unchanged`]).
    /// When controlled, only the internal mirror is updated.
    pub fn select_date(&mut self, date: CalendarDate) -> SelectOutcome {
        if date == self.date() {
            // Back on the host's value: forget any selection it did not reflect.
            if let DateSource::Controlled { host, mirror } = &mut self.source {
                *mirror = *host;
            }
            return SelectOutcome::Unchanged;
        }
        if date == self.internal_date() {
            return SelectOutcome::Unchanged;
        }
        match &mut self.source {
            DateSource::Controlled { mirror, .. } => *mirror = date,
            DateSource::Uncontrolled(current) => *current = date,
        }
        log::debug!("Selected {date}");
        self.notify(date);
        SelectOutcome::Changed
    }

    /// The host passed a new (or no) date.
    ///
    /// An unparseable date counts as no date. Subscribers are notified if the shown date changed.
    pub fn set_host_date(&mut self, host_date: Option<&str>) -> SelectOutcome {
        let before = self.date();
        self.source = source_for(host_date, self.internal_date());
        let after = self.date();
        if before == after {
            SelectOutcome::Unchanged
        } else {
            self.notify(after);
            SelectOutcome::Changed
        }
    }

    /// Call `callback` with the new date whenever the selected date changes.
    pub fn subscribe(&mut self, callback: impl FnMut(CalendarDate) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if there was no such subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != len
    }

    fn notify(&mut self, date: CalendarDate) {
        for (_, callback) in &mut self.subscribers {
            callback(date);
        }
    }

    // ------------------------------------------------------------------------

    #[inline]
    pub fn mode(&self) -> CalendarMode {
        self.modes.mode()
    }

    /// Force the panel mode.
    pub fn set_mode(&mut self, mode: CalendarMode) {
        self.modes.set_mode(mode);
    }

    /// Apply a mode event right away. See [`ModeStateMachine::transition`].
    pub fn transition(&mut self, event: ModeEvent) -> Option<CalendarMode> {
        self.modes.transition(event)
    }

    /// Schedule a mode event. See [`ModeStateMachine::request`].
    pub fn request_transition(&mut self, event: ModeEvent) -> Option<CalendarMode> {
        self.modes.request(event)
    }

    /// See [`ModeStateMachine::commit`].
    pub fn commit_transition(&mut self) -> Option<CalendarMode> {
        self.modes.commit()
    }

    #[inline]
    pub fn modes(&self) -> &ModeStateMachine {
        &self.modes
    }

    #[inline]
    pub fn modes_mut(&mut self) -> &mut ModeStateMachine {
        &mut self.modes
    }
}

fn source_for(host_date: Option<&str>, fallback: CalendarDate) -> DateSource {
    let Some(raw) = host_date else {
        return DateSource::Uncontrolled(fallback);
    };
    match normalize(raw) {
        Ok(host) => DateSource::Controlled {
            host,
            mirror: host,
        },
        Err(err) => {
            log::warn!("Ignoring host date: {err}");
            DateSource::Uncontrolled(fallback)
        }
    }
}
