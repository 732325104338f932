//! Common error types used across the workspace.
//!
//! Each failure stays inside the update of the sensor that raised it; none of
//! these errors is meant to cross the boundary to the host.

use chrono::NaiveDate;

use crate::sensor::SensorKey;

/// Errors raised while computing a sensor's state for one update cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    /// The host could not resolve today's sunset; the cycle is skipped.
    #[error("no sunset data for {date}")]
    NoSunsetData {
        /// Civil date the lookup was made for.
        date: NaiveDate,
    },

    /// A catalog entry has no derivation in its category's dispatch table.
    #[error("no derivation registered for sensor `{key}`")]
    UnmappedSensorKey {
        /// The key that was looked up.
        key: SensorKey,
    },
}

/// Configuration invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("candle lighting offset must not be negative, got {0} minutes")]
    NegativeCandleLightingOffset(i64),

    #[error("havdalah offset must not be negative, got {0} minutes")]
    NegativeHavdalahOffset(i64),
}
