//! Value objects read from the external Hebrew-calendar library.
//!
//! The calendar arithmetic itself lives behind the `CalendarProvider` port in
//! the `app` crate; these types are what that port hands back.

use serde::{Deserialize, Serialize};

/// Year, month, and day of a Hebrew date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HebrewDateParts {
    pub year: u16,
    /// Month name, already localized to the entry's language.
    pub month_name: String,
    pub day: u8,
}

/// Classification of a holiday, as reported by the calendar library.
///
/// The numeric [`id`](Self::id) and the upper-snake [`name`](Self::name) are
/// exposed verbatim as sensor attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    #[default]
    Unknown,
    YomTov,
    ErevYomTov,
    HolHamoed,
    MelachaPermittedHoliday,
    FastDay,
    ModernHoliday,
    MinorHoliday,
    MemorialDay,
    IsraelNationalHoliday,
    RoshChodesh,
}

impl HolidayType {
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::YomTov => 1,
            Self::ErevYomTov => 2,
            Self::HolHamoed => 3,
            Self::MelachaPermittedHoliday => 4,
            Self::FastDay => 5,
            Self::ModernHoliday => 6,
            Self::MinorHoliday => 7,
            Self::MemorialDay => 8,
            Self::IsraelNationalHoliday => 9,
            Self::RoshChodesh => 10,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::YomTov => "YOM_TOV",
            Self::ErevYomTov => "EREV_YOM_TOV",
            Self::HolHamoed => "HOL_HAMOED",
            Self::MelachaPermittedHoliday => "MELACHA_PERMITTED_HOLIDAY",
            Self::FastDay => "FAST_DAY",
            Self::ModernHoliday => "MODERN_HOLIDAY",
            Self::MinorHoliday => "MINOR_HOLIDAY",
            Self::MemorialDay => "MEMORIAL_DAY",
            Self::IsraelNationalHoliday => "ISRAEL_NATIONAL_HOLIDAY",
            Self::RoshChodesh => "ROSH_CHODESH",
        }
    }
}

/// The holiday falling on a date. Ordinary days carry [`Holiday::none`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Holiday {
    /// Stable library identifier (e.g. `rosh_hashana_i`), empty when none.
    pub id: String,
    /// Localized description, empty when none.
    pub description: String,
    pub kind: HolidayType,
}

impl Holiday {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}
