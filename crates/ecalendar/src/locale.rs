//! Label sets for weekday headers and month names.
//!
//! A locale only changes labels and the default [`WeekStart`]; it never affects arithmetic.

use chrono::{Month, Weekday};

use crate::WeekStart;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Locale {
    /// French labels, weeks start on Monday.
    #[default]
    Fr,

    /// English labels, weeks start on Monday.
    En,

    /// English labels, weeks start on Sunday.
    EnUs,
}

const WEEKDAYS_FR: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];
const WEEKDAYS_EN: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

impl Locale {
    pub const ALL: [Self; 3] = [Self::Fr, Self::En, Self::EnUs];

    /// Look up a locale by its key, e.g. `"FR"`, `"en"` or `"en-US"`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_uppercase().replace('_', "-").as_str() {
            "FR" | "FR-FR" => Some(Self::Fr),
            "EN" | "EN-GB" => Some(Self::En),
            "EN-US" => Some(Self::EnUs),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::En => "EN",
            Self::EnUs => "EN-US",
        }
    }

    /// The week start used unless [`crate::CalendarOptions::week_start`] overrides it.
    pub fn week_start(self) -> WeekStart {
        match self {
            Self::Fr | Self::En => WeekStart::Monday,
            Self::EnUs => WeekStart::Sunday,
        }
    }

    /// One-letter weekday headers, in column order for `week_start`.
    pub fn weekday_labels(self, week_start: WeekStart) -> [&'static str; 7] {
        let mut labels = match self {
            Self::Fr => WEEKDAYS_FR,
            Self::En | Self::EnUs => WEEKDAYS_EN,
        };
        if week_start == WeekStart::Sunday {
            labels.rotate_right(1);
        }
        labels
    }

    /// Header label for a single weekday.
    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        self.weekday_labels(WeekStart::Monday)[weekday.num_days_from_monday() as usize]
    }

    /// Full month name for `month` (1-12), or `""` for an invalid month.
    pub fn month_name(self, month: u32) -> &'static str {
        match self {
            Self::Fr => month
                .checked_sub(1)
                .and_then(|index| MONTHS_FR.get(index as usize))
                .copied()
                .unwrap_or_default(),
            Self::En | Self::EnUs => u8::try_from(month)
                .ok()
                .and_then(|month| Month::try_from(month).ok())
                .map_or("", |month| month.name()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[test]
fn test_weekday_labels() {
    assert_eq!(
        Locale::Fr.weekday_labels(WeekStart::Monday),
        ["L", "M", "M", "J", "V", "S", "D"]
    );
    assert_eq!(
        Locale::EnUs.weekday_labels(Locale::EnUs.week_start()),
        ["S", "M", "T", "W", "T", "F", "S"]
    );
    assert_eq!(Locale::Fr.weekday_label(Weekday::Sun), "D");
}

#[test]
fn test_locale_keys() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_key(locale.key()), Some(locale));
    }
    assert_eq!(Locale::from_key("en_us"), Some(Locale::EnUs));
    assert_eq!(Locale::from_key("de"), None);
    assert_eq!(Locale::En.month_name(3), "March");
    assert_eq!(Locale::Fr.month_name(8), "août");
    assert_eq!(Locale::En.month_name(0), "");
    assert_eq!(Locale::En.month_name(13), "");
}
