use crate::{Locale, WeekStart};

/// How a [`crate::DatePicker`] behaves and what labels it uses.
///
/// All fields have defaults, so a partial configuration (e.g. from a settings file) works.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarOptions {
    /// Weekday and month labels, and the default week start.
    pub locale: Locale,

    /// Overrides the week start of the [`Self::locale`].
    pub week_start: Option<WeekStart>,

    /// If `true`, mode changes caused by picking a month or year (or dismissing the
    /// panel) are only requested, and take effect when the presentation layer calls
    /// [`crate::DatePicker::commit_transition`] after its fade-out.
    ///
    /// If `false` they apply immediately.
    pub deferred_transitions: bool,

    /// How long the panel fade takes, in seconds.
    ///
    /// The presentation layer should commit deferred transitions after this long.
    pub fade_animation_time: f32,

    /// Number of years the year chooser shows at once.
    pub years_per_page: u16,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            week_start: None,
            deferred_transitions: true,
            fade_animation_time: 0.3,
            years_per_page: 12,
        }
    }
}

impl CalendarOptions {
    #[inline]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[inline]
    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = Some(week_start);
        self
    }

    #[inline]
    pub fn deferred_transitions(mut self, deferred_transitions: bool) -> Self {
        self.deferred_transitions = deferred_transitions;
        self
    }

    #[inline]
    pub fn fade_animation_time(mut self, seconds: f32) -> Self {
        self.fade_animation_time = seconds;
        self
    }

    /// At least one.
    #[inline]
    pub fn years_per_page(mut self, years_per_page: u16) -> Self {
        self.years_per_page = years_per_page.max(1);
        self
    }

    /// The week start actually in effect.
    pub fn effective_week_start(&self) -> WeekStart {
        self.week_start.unwrap_or_else(|| self.locale.week_start())
    }

    /// [`Self::fade_animation_time`] as a [`std::time::Duration`]. Negative or NaN is zero.
    pub fn fade_duration(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f32(self.fade_animation_time).unwrap_or_default()
    }
}

#[test]
fn test_effective_week_start() {
    let options = CalendarOptions::default();
    assert_eq!(options.effective_week_start(), WeekStart::Monday);
    assert_eq!(
        options.clone().locale(Locale::EnUs).effective_week_start(),
        WeekStart::Sunday
    );
    assert_eq!(
        options.locale(Locale::EnUs).week_start(WeekStart::Monday).effective_week_start(),
        WeekStart::Monday
    );
}

#[test]
fn test_fade_duration() {
    let options = CalendarOptions::default();
    assert_eq!(options.fade_duration().as_millis(), 300);
    assert_eq!(
        options.fade_animation_time(-1.0).fade_duration(),
        std::time::Duration::ZERO
    );
    assert_eq!(CalendarOptions::default().years_per_page(0).years_per_page, 1);
}
