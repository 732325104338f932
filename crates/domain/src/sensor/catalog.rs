//! The static sensor catalog.
//!
//! | Category | Keys |
//! |----------|------|
//! | Info | `date`, `weekly_portion`, `holiday`, `omer_count`, `daf_yomi` |
//! | Time, daily | `first_light` … `three_stars` (read from today's zmanim by key) |
//! | Time, upcoming | candle lighting and havdalah, for the Sabbath and for any holy day |

use super::{SensorDescriptor, SensorKey, ValueKind};

/// Prefix the host shows in front of every sensor name.
pub const DEFAULT_NAME: &str = "Jewish Calendar";

pub const INFO_SENSORS: [SensorDescriptor; 5] = [
    SensorDescriptor::info(SensorKey::Date, "Date", "mdi:star-david", ValueKind::Plain),
    SensorDescriptor::info(
        SensorKey::WeeklyPortion,
        "Parshat Hashavua",
        "mdi:book-open-variant",
        ValueKind::Enum,
    ),
    SensorDescriptor::info(
        SensorKey::Holiday,
        "Holiday",
        "mdi:calendar-star",
        ValueKind::Enum,
    ),
    SensorDescriptor::info(
        SensorKey::OmerCount,
        "Day of the Omer",
        "mdi:counter",
        ValueKind::Plain,
    ),
    SensorDescriptor::info(
        SensorKey::DafYomi,
        "Daf Yomi",
        "mdi:book-open-variant",
        ValueKind::Plain,
    ),
];

pub const TIME_SENSORS: [SensorDescriptor; 18] = [
    SensorDescriptor::time(SensorKey::FirstLight, "Alot Hashachar", "mdi:weather-sunset-up"),
    SensorDescriptor::time(SensorKey::Talit, "Talit and Tefillin", "mdi:calendar-clock"),
    SensorDescriptor::time(SensorKey::Sunrise, "Hanetz Hachama", "mdi:calendar-clock"),
    SensorDescriptor::time(
        SensorKey::GraEndShma,
        "Latest time for Shma Gr\"a",
        "mdi:calendar-clock",
    ),
    SensorDescriptor::time(
        SensorKey::MgaEndShma,
        "Latest time for Shma MG\"A",
        "mdi:calendar-clock",
    ),
    SensorDescriptor::time(
        SensorKey::GraEndTfila,
        "Latest time for Tefilla Gr\"a",
        "mdi:calendar-clock",
    ),
    SensorDescriptor::time(
        SensorKey::MgaEndTfila,
        "Latest time for Tefilla MG\"A",
        "mdi:calendar-clock",
    ),
    SensorDescriptor::time(SensorKey::Midday, "Chatzot Hayom", "mdi:calendar-clock"),
    SensorDescriptor::time(SensorKey::BigMincha, "Mincha Gedola", "mdi:calendar-clock"),
    SensorDescriptor::time(SensorKey::SmallMincha, "Mincha Ketana", "mdi:calendar-clock"),
    SensorDescriptor::time(SensorKey::PlagMincha, "Plag Hamincha", "mdi:weather-sunset-down"),
    SensorDescriptor::time(SensorKey::Sunset, "Shkia", "mdi:weather-sunset"),
    SensorDescriptor::time(SensorKey::FirstStars, "T'set Hakochavim", "mdi:weather-night"),
    SensorDescriptor::time(
        SensorKey::ThreeStars,
        "T'set Hakochavim, 3 stars",
        "mdi:weather-night",
    ),
    SensorDescriptor::time(
        SensorKey::UpcomingShabbatCandleLighting,
        "Upcoming Shabbat Candle Lighting",
        "mdi:candle",
    ),
    SensorDescriptor::time(
        SensorKey::UpcomingShabbatHavdalah,
        "Upcoming Shabbat Havdalah",
        "mdi:weather-night",
    ),
    SensorDescriptor::time(
        SensorKey::UpcomingCandleLighting,
        "Upcoming Candle Lighting",
        "mdi:candle",
    ),
    SensorDescriptor::time(
        SensorKey::UpcomingHavdalah,
        "Upcoming Havdalah",
        "mdi:weather-night",
    ),
];

/// Every descriptor, info sensors first.
pub fn all() -> impl Iterator<Item = &'static SensorDescriptor> {
    INFO_SENSORS.iter().chain(TIME_SENSORS.iter())
}

/// Look up the descriptor for `key`.
#[must_use]
pub fn find(key: SensorKey) -> Option<&'static SensorDescriptor> {
    all().find(|descriptor| descriptor.key == key)
}
