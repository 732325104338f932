//! Solar-event port: the host's sunrise/sunset lookup.

use std::future::Future;

use chrono::NaiveDate;
use luach_domain::config::Location;
use luach_domain::time::Timestamp;

/// Solar events the host can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

/// Looks up when a solar event happens on a given civil date.
pub trait SolarEvents {
    /// Resolve `event` for `date` at `location`.
    ///
    /// Returns `None` when the host cannot determine the event (polar day or
    /// night, missing location data, …).
    fn event_time(
        &self,
        location: &Location,
        event: SolarEvent,
        date: NaiveDate,
    ) -> impl Future<Output = Option<Timestamp>> + Send;
}
