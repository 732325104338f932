//! Sensor value derivation.
//!
//! Each sensor category owns a [`DispatchTable`] mapping a [`SensorKey`] to a
//! pure [`Derivation`]. Derivations read the already resolved
//! [`CalendarMoment`](super::day_boundary::CalendarMoment) and, for the
//! "upcoming" times, build further zmanim tables for the civil date the event
//! falls on.

mod info;
mod time;

use std::collections::HashMap;

use luach_domain::config::Config;
use luach_domain::error::SensorError;
use luach_domain::sensor::{SensorCategory, SensorKey, SensorState};

use crate::ports::{CalendarProvider, ZmanimProvider};
use crate::services::day_boundary::ResolvedDay;
use crate::services::zmanim_request::ZmanimRequestFactory;

/// Inputs shared by every derivation in one update cycle.
pub struct DerivationContext<'a, C: CalendarProvider, Z> {
    pub key: SensorKey,
    pub config: &'a Config,
    pub calendar: &'a C,
    pub zmanim: ZmanimRequestFactory<'a, Z>,
    pub day: &'a ResolvedDay<C::Date>,
}

/// A pure function from the cycle's inputs to a sensor state.
pub type Derivation<C, Z> = fn(&DerivationContext<'_, C, Z>) -> SensorState;

/// Sensor key to derivation, for one [`SensorCategory`].
pub struct DispatchTable<C: CalendarProvider, Z> {
    category: SensorCategory,
    entries: HashMap<SensorKey, Derivation<C, Z>>,
}

impl<C, Z> DispatchTable<C, Z>
where
    C: CalendarProvider,
    Z: ZmanimProvider,
{
    /// The table serving `category`.
    #[must_use]
    pub fn for_category(category: SensorCategory) -> Self {
        match category {
            SensorCategory::Info => Self::info(),
            SensorCategory::Time => Self::time(),
        }
    }

    /// Date, weekly portion, holiday, omer count, and daf yomi.
    #[must_use]
    pub fn info() -> Self {
        Self::empty(SensorCategory::Info)
            .with(SensorKey::Date, info::date::<C, Z>)
            .with(SensorKey::WeeklyPortion, info::weekly_portion::<C, Z>)
            .with(SensorKey::Holiday, info::holiday::<C, Z>)
            .with(SensorKey::OmerCount, info::omer_count::<C, Z>)
            .with(SensorKey::DafYomi, info::daf_yomi::<C, Z>)
    }

    /// Daily halachic times plus the four upcoming candle-lighting and
    /// havdalah times.
    #[must_use]
    pub fn time() -> Self {
        let table = time::DAILY_TIME_KEYS
            .into_iter()
            .fold(Self::empty(SensorCategory::Time), |table, key| {
                table.with(key, time::daily_time::<C, Z>)
            });
        table
            .with(
                SensorKey::UpcomingShabbatCandleLighting,
                time::upcoming_shabbat_candle_lighting::<C, Z>,
            )
            .with(
                SensorKey::UpcomingCandleLighting,
                time::upcoming_candle_lighting::<C, Z>,
            )
            .with(
                SensorKey::UpcomingShabbatHavdalah,
                time::upcoming_shabbat_havdalah::<C, Z>,
            )
            .with(SensorKey::UpcomingHavdalah, time::upcoming_havdalah::<C, Z>)
    }

    fn empty(category: SensorCategory) -> Self {
        Self {
            category,
            entries: HashMap::new(),
        }
    }

    fn with(mut self, key: SensorKey, derivation: Derivation<C, Z>) -> Self {
        self.entries.insert(key, derivation);
        self
    }

    #[must_use]
    pub fn category(&self) -> SensorCategory {
        self.category
    }

    #[must_use]
    pub fn contains(&self, key: SensorKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Run the derivation registered for `ctx.key`.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::UnmappedSensorKey`] when the key has no entry
    /// in this table.
    pub fn derive(&self, ctx: &DerivationContext<'_, C, Z>) -> Result<SensorState, SensorError> {
        let derivation = self
            .entries
            .get(&ctx.key)
            .ok_or(SensorError::UnmappedSensorKey { key: ctx.key })?;
        Ok(derivation(ctx))
    }
}
