//! Halachic times.
//!
//! Daily times are read from today's table by key name. The four upcoming
//! times are computed for the civil date the event actually falls on, found
//! by navigating the calendar from the nightfall-advanced day.

use chrono::NaiveDate;
use luach_domain::sensor::{SensorKey, SensorState, SensorValue};
use luach_domain::time::Timestamp;
use luach_domain::zmanim::ZmanimTable;

use super::DerivationContext;
use crate::ports::{CalendarProvider, HebrewDate, ZmanimProvider};

/// Sensor keys whose wire name is also a field of the daily time table.
pub(super) const DAILY_TIME_KEYS: [SensorKey; 14] = [
    SensorKey::FirstLight,
    SensorKey::Talit,
    SensorKey::Sunrise,
    SensorKey::GraEndShma,
    SensorKey::MgaEndShma,
    SensorKey::GraEndTfila,
    SensorKey::MgaEndTfila,
    SensorKey::Midday,
    SensorKey::BigMincha,
    SensorKey::SmallMincha,
    SensorKey::PlagMincha,
    SensorKey::Sunset,
    SensorKey::FirstStars,
    SensorKey::ThreeStars,
];

pub(super) fn daily_time<C: CalendarProvider, Z>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let field = ctx.key.as_str();
    let value = ctx.day.today_times.get(field);
    if value.is_none() {
        tracing::warn!(
            key = field,
            date = %ctx.day.today,
            "time table has no field for sensor key"
        );
    }
    SensorState::maybe(value.map(SensorValue::from))
}

pub(super) fn upcoming_shabbat_candle_lighting<C: CalendarProvider, Z: ZmanimProvider>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let eve = ctx
        .day
        .moment
        .after_nightfall
        .upcoming_shabbat()
        .previous_day()
        .civil_date();
    timestamp(ctx, eve, ZmanimTable::candle_lighting)
}

pub(super) fn upcoming_candle_lighting<C: CalendarProvider, Z: ZmanimProvider>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let eve = ctx
        .day
        .moment
        .after_nightfall
        .upcoming_shabbat_or_festival()
        .first_day
        .previous_day()
        .civil_date();
    timestamp(ctx, eve, ZmanimTable::candle_lighting)
}

pub(super) fn upcoming_shabbat_havdalah<C: CalendarProvider, Z: ZmanimProvider>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let shabbat = ctx
        .day
        .moment
        .after_nightfall
        .upcoming_shabbat()
        .civil_date();
    timestamp(ctx, shabbat, ZmanimTable::havdalah)
}

pub(super) fn upcoming_havdalah<C: CalendarProvider, Z: ZmanimProvider>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let last_day = ctx
        .day
        .moment
        .after_nightfall
        .upcoming_shabbat_or_festival()
        .last_day
        .civil_date();
    timestamp(ctx, last_day, ZmanimTable::havdalah)
}

/// Compute the table for `date` and read one of its optional times.
fn timestamp<C: CalendarProvider, Z: ZmanimProvider>(
    ctx: &DerivationContext<'_, C, Z>,
    date: NaiveDate,
    field: fn(&ZmanimTable) -> Option<Timestamp>,
) -> SensorState {
    let value = field(&ctx.zmanim.build(date));
    if value.is_none() {
        tracing::debug!(key = %ctx.key, %date, "no time computed for upcoming event");
    }
    SensorState::maybe(value.map(SensorValue::from))
}
