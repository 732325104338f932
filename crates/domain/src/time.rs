//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// UTC timestamp used for "now", sunset, and every computed halachic time.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Civil (Gregorian) date of `ts` as seen from the time zone `tz`.
#[must_use]
pub fn local_date(ts: Timestamp, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}
