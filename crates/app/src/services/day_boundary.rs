//! Day-boundary resolution.
//!
//! The Jewish day starts at nightfall ("tzais") and the civil one at
//! midnight, with sunset ("shkia") in between. Some sensors should follow the
//! calendar day as soon as the sun sets, others only once it is fully dark,
//! and some stay on the civil day. [`DayBoundaryResolver`] computes all three
//! interpretations of "now" in one go.

use chrono::NaiveDate;
use luach_domain::config::Config;
use luach_domain::error::SensorError;
use luach_domain::time::{Timestamp, local_date};
use luach_domain::zmanim::ZmanimTable;

use crate::ports::{CalendarProvider, HebrewDate, ZmanimProvider};
use crate::services::zmanim_request::ZmanimRequestFactory;

/// The three calendar-day interpretations of a single instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMoment<D> {
    /// Midnight-to-midnight civil day.
    pub plain: D,
    /// Advanced to the next day once today's sunset has passed.
    pub after_sunset: D,
    /// Advanced to the next day once today's havdalah has passed.
    pub after_nightfall: D,
}

/// Output of one resolution: the moment plus today's time table.
///
/// The table is the one the nightfall threshold was read from; the daily
/// time sensors reuse it instead of computing it a second time.
#[derive(Debug, Clone)]
pub struct ResolvedDay<D> {
    pub today: NaiveDate,
    pub moment: CalendarMoment<D>,
    pub today_times: ZmanimTable,
}

/// Resolves [`CalendarMoment`]s for one integration entry.
pub struct DayBoundaryResolver<'a, C, Z> {
    config: &'a Config,
    calendar: &'a C,
    zmanim: ZmanimRequestFactory<'a, Z>,
}

impl<'a, C, Z> DayBoundaryResolver<'a, C, Z>
where
    C: CalendarProvider,
    Z: ZmanimProvider,
{
    pub fn new(config: &'a Config, calendar: &'a C, zmanim: ZmanimRequestFactory<'a, Z>) -> Self {
        Self {
            config,
            calendar,
            zmanim,
        }
    }

    /// Resolve the calendar days for `now`, given today's sunset.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::NoSunsetData`] when `sunset_today` is `None`;
    /// the caller should skip the cycle.
    pub fn resolve(
        &self,
        now: Timestamp,
        sunset_today: Option<Timestamp>,
    ) -> Result<ResolvedDay<C::Date>, SensorError> {
        let today = local_date(now, self.config.location.timezone);
        let plain = self
            .calendar
            .date(today, self.config.diaspora, self.config.language);

        let sunset = sunset_today.ok_or(SensorError::NoSunsetData { date: today })?;

        let after_sunset = if now > sunset {
            plain.next_day()
        } else {
            plain.clone()
        };

        let today_times = self.zmanim.build(today);
        let after_nightfall = match today_times.havdalah() {
            Some(havdalah) if now > havdalah => plain.next_day(),
            _ => plain.clone(),
        };

        tracing::debug!(
            %now,
            %sunset,
            havdalah = ?today_times.havdalah(),
            plain = %plain.civil_date(),
            after_sunset = %after_sunset.civil_date(),
            after_nightfall = %after_nightfall.civil_date(),
            "resolved calendar day"
        );

        Ok(ResolvedDay {
            today,
            moment: CalendarMoment {
                plain,
                after_sunset,
                after_nightfall,
            },
            today_times,
        })
    }
}
