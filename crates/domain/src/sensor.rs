//! Sensors: the values exposed to the host, one per [`SensorKey`].
//!
//! A sensor is described once, statically, by a [`SensorDescriptor`] in the
//! [`catalog`]. Every update cycle produces a fresh [`SensorState`].

mod attribute_value;
pub mod catalog;
mod state;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use attribute_value::AttributeValue;
pub use state::{SensorState, SensorValue};

/// Every sensor key known to the catalog.
///
/// The wire form ([`as_str`](Self::as_str)) of the plain daily-time keys is
/// also the field name the time-computation library uses for that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKey {
    Date,
    WeeklyPortion,
    Holiday,
    OmerCount,
    DafYomi,
    FirstLight,
    Talit,
    Sunrise,
    GraEndShma,
    MgaEndShma,
    GraEndTfila,
    MgaEndTfila,
    Midday,
    BigMincha,
    SmallMincha,
    PlagMincha,
    Sunset,
    FirstStars,
    ThreeStars,
    UpcomingShabbatCandleLighting,
    UpcomingShabbatHavdalah,
    UpcomingCandleLighting,
    UpcomingHavdalah,
}

impl SensorKey {
    pub const ALL: [Self; 23] = [
        Self::Date,
        Self::WeeklyPortion,
        Self::Holiday,
        Self::OmerCount,
        Self::DafYomi,
        Self::FirstLight,
        Self::Talit,
        Self::Sunrise,
        Self::GraEndShma,
        Self::MgaEndShma,
        Self::GraEndTfila,
        Self::MgaEndTfila,
        Self::Midday,
        Self::BigMincha,
        Self::SmallMincha,
        Self::PlagMincha,
        Self::Sunset,
        Self::FirstStars,
        Self::ThreeStars,
        Self::UpcomingShabbatCandleLighting,
        Self::UpcomingShabbatHavdalah,
        Self::UpcomingCandleLighting,
        Self::UpcomingHavdalah,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::WeeklyPortion => "weekly_portion",
            Self::Holiday => "holiday",
            Self::OmerCount => "omer_count",
            Self::DafYomi => "daf_yomi",
            Self::FirstLight => "first_light",
            Self::Talit => "talit",
            Self::Sunrise => "sunrise",
            Self::GraEndShma => "gra_end_shma",
            Self::MgaEndShma => "mga_end_shma",
            Self::GraEndTfila => "gra_end_tfila",
            Self::MgaEndTfila => "mga_end_tfila",
            Self::Midday => "midday",
            Self::BigMincha => "big_mincha",
            Self::SmallMincha => "small_mincha",
            Self::PlagMincha => "plag_mincha",
            Self::Sunset => "sunset",
            Self::FirstStars => "first_stars",
            Self::ThreeStars => "three_stars",
            Self::UpcomingShabbatCandleLighting => "upcoming_shabbat_candle_lighting",
            Self::UpcomingShabbatHavdalah => "upcoming_shabbat_havdalah",
            Self::UpcomingCandleLighting => "upcoming_candle_lighting",
            Self::UpcomingHavdalah => "upcoming_havdalah",
        }
    }
}

impl fmt::Display for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no sensor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor key `{0}`")]
pub struct UnknownSensorKey(pub String);

impl FromStr for SensorKey {
    type Err = UnknownSensorKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSensorKey(s.to_string()))
    }
}

/// How the host should interpret a sensor's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Free-form text or number.
    Plain,
    /// One of a fixed list of options, published with the state.
    Enum,
    /// An instant in time.
    Timestamp,
}

/// Which derivation table serves a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorCategory {
    /// Calendar facts: date, portion, holiday, omer, daf yomi.
    Info,
    /// Halachic times, all of [`ValueKind::Timestamp`].
    Time,
}

/// Static description of one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub key: SensorKey,
    /// Display name, without the integration prefix.
    pub name: &'static str,
    /// Material Design icon id.
    pub icon: &'static str,
    pub value_kind: ValueKind,
    pub category: SensorCategory,
}

impl SensorDescriptor {
    #[must_use]
    pub const fn info(
        key: SensorKey,
        name: &'static str,
        icon: &'static str,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            key,
            name,
            icon,
            value_kind,
            category: SensorCategory::Info,
        }
    }

    #[must_use]
    pub const fn time(key: SensorKey, name: &'static str, icon: &'static str) -> Self {
        Self {
            key,
            name,
            icon,
            value_kind: ValueKind::Timestamp,
            category: SensorCategory::Time,
        }
    }
}
