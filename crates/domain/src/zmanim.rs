//! Halachic time requests and the tables computed for them.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::{Config, Language, Location};
use crate::time::Timestamp;

/// Everything the time-computation library needs for one civil date.
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimRequest {
    pub date: NaiveDate,
    pub location: Location,
    pub candle_lighting_offset_minutes: i64,
    pub havdalah_offset_minutes: i64,
    pub language: Language,
}

impl ZmanimRequest {
    /// Combine a civil date with an entry's stored configuration.
    #[must_use]
    pub fn for_date(date: NaiveDate, config: &Config) -> Self {
        Self {
            date,
            location: config.location.clone(),
            candle_lighting_offset_minutes: config.candle_lighting_offset_minutes,
            havdalah_offset_minutes: config.havdalah_offset_minutes,
            language: config.language,
        }
    }
}

/// Halachic times computed for a single civil date and location.
///
/// Daily times are keyed by the library's field names (`sunrise`, `midday`,
/// `plag_mincha`, …). Candle lighting and havdalah are kept apart because
/// they only exist on days leading into or out of a Sabbath or festival.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZmanimTable {
    times: BTreeMap<String, Timestamp>,
    candle_lighting: Option<Timestamp>,
    havdalah: Option<Timestamp>,
}

impl ZmanimTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time(mut self, name: impl Into<String>, at: Timestamp) -> Self {
        self.times.insert(name.into(), at);
        self
    }

    #[must_use]
    pub fn with_candle_lighting(mut self, at: Timestamp) -> Self {
        self.candle_lighting = Some(at);
        self
    }

    #[must_use]
    pub fn with_havdalah(mut self, at: Timestamp) -> Self {
        self.havdalah = Some(at);
        self
    }

    /// Look up a daily time by its field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Timestamp> {
        self.times.get(name).copied()
    }

    #[must_use]
    pub fn candle_lighting(&self) -> Option<Timestamp> {
        self.candle_lighting
    }

    #[must_use]
    pub fn havdalah(&self) -> Option<Timestamp> {
        self.havdalah
    }

    /// Every daily time, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Timestamp)> {
        self.times.iter().map(|(name, at)| (name.as_str(), *at))
    }
}
