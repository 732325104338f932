//! Integration entry configuration.
//!
//! One [`Config`] exists per configured entry. It is read-only for the core and
//! is passed explicitly into every request and derivation. Every field has a
//! sensible default so a partial document deserializes.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes before sunset that candles are lit, unless configured otherwise.
pub const DEFAULT_CANDLE_LIGHTING_OFFSET_MINUTES: i64 = 18;

/// Minutes after sunset for havdalah. `0` lets the zmanim library pick its
/// own nightfall definition.
pub const DEFAULT_HAVDALAH_OFFSET_MINUTES: i64 = 0;

/// Display language for names, months, portions, and holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hebrew,
    #[default]
    English,
}

impl Language {
    #[must_use]
    pub fn is_hebrew(self) -> bool {
        matches!(self, Self::Hebrew)
    }
}

/// Geographic location used for every halachic time computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Human-readable name, forwarded to the zmanim library.
    pub name: String,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Meters above sea level.
    pub elevation: f64,
    /// IANA time zone; decides which civil date "now" falls on.
    pub timezone: Tz,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Jerusalem".to_string(),
            latitude: 31.778,
            longitude: 35.235,
            elevation: 754.0,
            timezone: chrono_tz::Asia::Jerusalem,
        }
    }
}

/// Configuration of a single integration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub location: Location,
    pub language: Language,
    /// Use diaspora rules for festival length and weekly portions.
    pub diaspora: bool,
    pub candle_lighting_offset_minutes: i64,
    pub havdalah_offset_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: Location::default(),
            language: Language::default(),
            diaspora: false,
            candle_lighting_offset_minutes: DEFAULT_CANDLE_LIGHTING_OFFSET_MINUTES,
            havdalah_offset_minutes: DEFAULT_HAVDALAH_OFFSET_MINUTES,
        }
    }
}

impl Config {
    /// Check invariants that the host's config flow cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for out-of-range coordinates or
    /// negative offsets.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.location.latitude));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(
                self.location.longitude,
            ));
        }
        if self.candle_lighting_offset_minutes < 0 {
            return Err(ValidationError::NegativeCandleLightingOffset(
                self.candle_lighting_offset_minutes,
            ));
        }
        if self.havdalah_offset_minutes < 0 {
            return Err(ValidationError::NegativeHavdalahOffset(
                self.havdalah_offset_minutes,
            ));
        }
        Ok(())
    }
}
