//! Sensor service: the update pipeline shared by every sensor.
//!
//! One cycle for one sensor:
//!
//! 1. ask the host for today's sunset
//! 2. resolve the three calendar-day interpretations of "now"
//! 3. look up the derivation in the sensor category's dispatch table
//! 4. store the resulting state on the sensor
//!
//! A cycle that cannot resolve sunset is skipped and the sensor keeps the
//! state of its last successful cycle.

use luach_domain::config::Config;
use luach_domain::error::{SensorError, ValidationError};
use luach_domain::id::{EntryId, SensorId};
use luach_domain::sensor::catalog::{self, DEFAULT_NAME};
use luach_domain::sensor::{SensorCategory, SensorDescriptor, SensorKey, SensorState};
use luach_domain::time::{Timestamp, local_date, now};

use crate::ports::{CalendarProvider, SolarEvent, SolarEvents, ZmanimProvider};
use crate::services::day_boundary::DayBoundaryResolver;
use crate::services::derive::{DerivationContext, DispatchTable};
use crate::services::zmanim_request::ZmanimRequestFactory;

/// One sensor instance of an integration entry.
#[derive(Debug, Clone)]
pub struct CalendarSensor {
    id: SensorId,
    name: String,
    descriptor: &'static SensorDescriptor,
    state: Option<SensorState>,
}

impl CalendarSensor {
    /// Create a sensor with no state yet.
    #[must_use]
    pub fn new(entry: EntryId, descriptor: &'static SensorDescriptor) -> Self {
        Self {
            id: SensorId::new(entry, descriptor.key),
            name: format!("{DEFAULT_NAME} {}", descriptor.name),
            descriptor,
            state: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SensorId {
        self.id
    }

    /// Unique id handed to the host, stable across restarts.
    #[must_use]
    pub fn unique_id(&self) -> String {
        self.id.to_string()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn key(&self) -> SensorKey {
        self.descriptor.key
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static SensorDescriptor {
        self.descriptor
    }

    /// State of the last successful cycle, `None` before the first one.
    #[must_use]
    pub fn state(&self) -> Option<&SensorState> {
        self.state.as_ref()
    }
}

/// Application service computing sensor states for one integration entry.
pub struct SensorService<S, C: CalendarProvider, Z> {
    config: Config,
    solar: S,
    calendar: C,
    zmanim: Z,
    info: DispatchTable<C, Z>,
    time: DispatchTable<C, Z>,
}

impl<S, C, Z> SensorService<S, C, Z>
where
    S: SolarEvents,
    C: CalendarProvider,
    Z: ZmanimProvider,
{
    /// Create a new service for the entry described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `config` is out of range; no
    /// sensor is ever computed from it.
    pub fn new(
        config: Config,
        solar: S,
        calendar: C,
        zmanim: Z,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            solar,
            calendar,
            zmanim,
            info: DispatchTable::for_category(SensorCategory::Info),
            time: DispatchTable::for_category(SensorCategory::Time),
        })
    }

    /// Instantiate the whole catalog for `entry`, info sensors first.
    #[must_use]
    pub fn sensors(&self, entry: EntryId) -> Vec<CalendarSensor> {
        catalog::all()
            .map(|descriptor| CalendarSensor::new(entry, descriptor))
            .collect()
    }

    /// Run one full cycle for `descriptor` at `now`.
    ///
    /// A key missing from its category's table yields an unknown state
    /// rather than an error, so one bad catalog entry cannot break the rest.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::NoSunsetData`] when the host cannot resolve
    /// today's sunset.
    pub async fn compute(
        &self,
        descriptor: &SensorDescriptor,
        now: Timestamp,
    ) -> Result<SensorState, SensorError> {
        let location = &self.config.location;
        let today = local_date(now, location.timezone);
        tracing::debug!(%now, location = %location.name, key = %descriptor.key, "updating sensor");

        let sunset = self
            .solar
            .event_time(location, SolarEvent::Sunset, today)
            .await;

        let zmanim = ZmanimRequestFactory::new(&self.config, &self.zmanim);
        let day = DayBoundaryResolver::new(&self.config, &self.calendar, zmanim)
            .resolve(now, sunset)?;

        let ctx = DerivationContext {
            key: descriptor.key,
            config: &self.config,
            calendar: &self.calendar,
            zmanim,
            day: &day,
        };
        match self.table(descriptor.category).derive(&ctx) {
            Ok(state) => Ok(state),
            Err(err) => {
                tracing::warn!(error = %err, "reporting unknown state");
                Ok(SensorState::unknown())
            }
        }
    }

    /// Update `sensor` for the current time.
    pub async fn update(&self, sensor: &mut CalendarSensor) {
        self.update_at(sensor, now()).await;
    }

    /// Update `sensor` as of `now`, keeping its previous state on failure.
    pub async fn update_at(&self, sensor: &mut CalendarSensor, now: Timestamp) {
        match self.compute(sensor.descriptor, now).await {
            Ok(state) => {
                tracing::debug!(
                    sensor = %sensor.id,
                    value = ?state.value,
                    "new sensor value"
                );
                sensor.state = Some(state);
            }
            Err(SensorError::NoSunsetData { date }) => {
                tracing::error!(sensor = %sensor.id, %date, "can't get sunset event date");
            }
            Err(err) => {
                tracing::error!(sensor = %sensor.id, error = %err, "sensor update failed");
            }
        }
    }

    /// Update every sensor as of `now`. Each sensor is computed on its own.
    pub async fn update_all(&self, sensors: &mut [CalendarSensor], now: Timestamp) {
        for sensor in sensors {
            self.update_at(sensor, now).await;
        }
    }

    fn table(&self, category: SensorCategory) -> &DispatchTable<C, Z> {
        match category {
            SensorCategory::Info => &self.info,
            SensorCategory::Time => &self.time,
        }
    }
}
