//! Calendar facts: Hebrew date, weekly portion, holiday, omer, daf yomi.

use luach_domain::sensor::SensorState;

use super::DerivationContext;
use crate::ports::{CalendarProvider, HebrewDate};

/// Hebrew date of the sunset-advanced day, with its parts as attributes.
pub(super) fn date<C: CalendarProvider, Z>(ctx: &DerivationContext<'_, C, Z>) -> SensorState {
    let date = &ctx.day.moment.after_sunset;
    let parts = date.parts();
    SensorState::new(date.formatted())
        .with_attribute("hebrew_year", parts.year)
        .with_attribute("hebrew_month_name", parts.month_name)
        .with_attribute("hebrew_day", parts.day)
}

/// Portion of the upcoming Sabbath, counted from nightfall.
pub(super) fn weekly_portion<C: CalendarProvider, Z>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    let shabbat = ctx.day.moment.after_nightfall.upcoming_shabbat();
    SensorState::new(shabbat.parasha())
        .with_options(ctx.calendar.weekly_portions(ctx.config.language))
}

pub(super) fn holiday<C: CalendarProvider, Z>(ctx: &DerivationContext<'_, C, Z>) -> SensorState {
    let holiday = ctx.day.moment.after_sunset.holiday();
    SensorState::new(holiday.description)
        .with_attribute("id", holiday.id)
        .with_attribute("type", holiday.kind.name())
        .with_attribute("type_id", holiday.kind.id())
        .with_options(ctx.calendar.holiday_descriptions(ctx.config.language))
}

pub(super) fn omer_count<C: CalendarProvider, Z>(
    ctx: &DerivationContext<'_, C, Z>,
) -> SensorState {
    SensorState::new(i64::from(ctx.day.moment.after_sunset.omer_day()))
}

/// Daf yomi follows the civil day.
pub(super) fn daf_yomi<C: CalendarProvider, Z>(ctx: &DerivationContext<'_, C, Z>) -> SensorState {
    SensorState::new(ctx.day.moment.plain.daf_yomi())
}
