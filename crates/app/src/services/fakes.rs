//! Scripted in-memory implementations of the ports, for tests.
//!
//! The fakes know a handful of real dates around Rosh Hashana 5784
//! (Jerusalem, September 2023) and Shavuot 5784 (June 2024); everything else
//! falls back to plain weekday rules.

use std::sync::Mutex;

use chrono::{Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use luach_domain::calendar::{HebrewDateParts, Holiday, HolidayType};
use luach_domain::config::{Language, Location};
use luach_domain::time::Timestamp;
use luach_domain::zmanim::{ZmanimRequest, ZmanimTable};

use crate::ports::{CalendarProvider, DateSpan, HebrewDate, SolarEvent, SolarEvents, ZmanimProvider};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A local wall-clock time in `tz`, as a UTC timestamp.
pub fn local(tz: Tz, date: NaiveDate, hour: u32, minute: u32) -> Timestamp {
    tz.from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

/// Jerusalem wall-clock time as a UTC timestamp.
pub fn jerusalem(date: NaiveDate, hour: u32, minute: u32) -> Timestamp {
    local(chrono_tz::Asia::Jerusalem, date, hour, minute)
}

// Calendar ---------------------------------------------------------------

pub struct FakeCalendar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDate {
    pub civil: NaiveDate,
    pub diaspora: bool,
    pub language: Language,
}

impl FakeDate {
    fn with_civil(&self, civil: NaiveDate) -> Self {
        Self {
            civil,
            ..self.clone()
        }
    }

    fn localized(&self, english: &str, hebrew: &str) -> String {
        if self.language.is_hebrew() {
            hebrew.to_string()
        } else {
            english.to_string()
        }
    }
}

impl HebrewDate for FakeDate {
    fn civil_date(&self) -> NaiveDate {
        self.civil
    }

    fn next_day(&self) -> Self {
        self.with_civil(self.civil.succ_opt().unwrap())
    }

    fn previous_day(&self) -> Self {
        self.with_civil(self.civil.pred_opt().unwrap())
    }

    fn upcoming_shabbat(&self) -> Self {
        let ahead = 6 - self.civil.weekday().num_days_from_sunday();
        self.with_civil(self.civil + Days::new(u64::from(ahead)))
    }

    fn upcoming_shabbat_or_festival(&self) -> DateSpan<Self> {
        // Rosh Hashana 5784 falls on Saturday and Sunday.
        if (ymd(2023, 9, 10)..=ymd(2023, 9, 17)).contains(&self.civil) {
            return DateSpan {
                first_day: self.with_civil(ymd(2023, 9, 16)),
                last_day: self.with_civil(ymd(2023, 9, 17)),
            };
        }
        // Shavuot 5784 is a Wednesday, two days in the diaspora.
        if (ymd(2024, 6, 9)..=ymd(2024, 6, 12)).contains(&self.civil) {
            let last = if self.diaspora {
                ymd(2024, 6, 13)
            } else {
                ymd(2024, 6, 12)
            };
            return DateSpan {
                first_day: self.with_civil(ymd(2024, 6, 12)),
                last_day: self.with_civil(last),
            };
        }
        let shabbat = self.upcoming_shabbat();
        DateSpan {
            first_day: shabbat.clone(),
            last_day: shabbat,
        }
    }

    fn formatted(&self) -> String {
        let parts = self.parts();
        format!("{} {} {}", parts.day, parts.month_name, parts.year)
    }

    fn parts(&self) -> HebrewDateParts {
        let (year, month_name, day) = match (self.civil.month(), self.civil.day()) {
            (9, 15) => (5783, self.localized("Elul", "אלול"), 29),
            (9, day) if day >= 16 => (
                5784,
                self.localized("Tishrei", "תשרי"),
                u8::try_from(day - 15).unwrap(),
            ),
            (9, day) => (5783, self.localized("Elul", "אלול"), u8::try_from(day + 14).unwrap()),
            _ => (5784, self.localized("Sivan", "סיון"), 1),
        };
        HebrewDateParts {
            year,
            month_name,
            day,
        }
    }

    fn holiday(&self) -> Holiday {
        if self.civil == ymd(2023, 9, 15) {
            Holiday {
                id: "erev_rosh_hashana".to_string(),
                description: self.localized("Erev Rosh Hashana", "ערב ראש השנה"),
                kind: HolidayType::ErevYomTov,
            }
        } else if self.civil == ymd(2023, 9, 16) {
            Holiday {
                id: "rosh_hashana_i".to_string(),
                description: self.localized("Rosh Hashana I", "א' ראש השנה"),
                kind: HolidayType::YomTov,
            }
        } else {
            Holiday::none()
        }
    }

    fn parasha(&self) -> String {
        if self.civil == ymd(2023, 9, 9) {
            self.localized("Nitzavim", "נצבים")
        } else if self.civil == ymd(2023, 9, 23) {
            self.localized("Haazinu", "האזינו")
        } else {
            "none".to_string()
        }
    }

    fn omer_day(&self) -> u8 {
        let start = ymd(2024, 4, 24);
        if (start..=ymd(2024, 6, 11)).contains(&self.civil) {
            u8::try_from((self.civil - start).num_days() + 1).unwrap()
        } else {
            0
        }
    }

    fn daf_yomi(&self) -> String {
        format!("Daf for {}", self.civil)
    }
}

impl CalendarProvider for FakeCalendar {
    type Date = FakeDate;

    fn date(&self, civil: NaiveDate, diaspora: bool, language: Language) -> FakeDate {
        FakeDate {
            civil,
            diaspora,
            language,
        }
    }

    fn weekly_portions(&self, language: Language) -> Vec<String> {
        let names: &[&str] = if language.is_hebrew() {
            &["none", "בראשית", "נצבים", "האזינו"]
        } else {
            &["none", "Bereshit", "Nitzavim", "Haazinu"]
        };
        names.iter().map(ToString::to_string).collect()
    }

    fn holiday_descriptions(&self, language: Language) -> Vec<String> {
        let names: &[&str] = if language.is_hebrew() {
            &["", "ערב ראש השנה", "א' ראש השנה", "ב' ראש השנה"]
        } else {
            &["", "Erev Rosh Hashana", "Rosh Hashana I", "Rosh Hashana II"]
        };
        names.iter().map(ToString::to_string).collect()
    }
}

// Zmanim -----------------------------------------------------------------

/// Fixed local times for every day; candle lighting on Fridays and festival
/// eves, havdalah on Saturdays and the last day of a festival.
#[derive(Default)]
pub struct FakeZmanim {
    requests: Mutex<Vec<NaiveDate>>,
}

pub const DAILY_TIMES: [(&str, u32, u32); 14] = [
    ("first_light", 4, 55),
    ("talit", 5, 20),
    ("sunrise", 6, 20),
    ("mga_end_shma", 8, 45),
    ("gra_end_shma", 9, 21),
    ("mga_end_tfila", 10, 3),
    ("gra_end_tfila", 10, 27),
    ("midday", 12, 33),
    ("big_mincha", 13, 3),
    ("small_mincha", 16, 16),
    ("plag_mincha", 17, 32),
    ("sunset", 18, 45),
    ("first_stars", 19, 5),
    ("three_stars", 19, 10),
];

impl FakeZmanim {
    /// Every civil date a table was requested for, in order.
    pub fn requests(&self) -> Vec<NaiveDate> {
        self.requests.lock().unwrap().clone()
    }

    fn has_candle_lighting(date: NaiveDate) -> bool {
        date.weekday() == Weekday::Fri || date == ymd(2024, 6, 11)
    }

    fn has_havdalah(date: NaiveDate) -> bool {
        (date.weekday() == Weekday::Sat && date != ymd(2023, 9, 16))
            || date == ymd(2023, 9, 17)
            || date == ymd(2024, 6, 12)
            || date == ymd(2024, 6, 13)
    }
}

impl ZmanimProvider for FakeZmanim {
    fn zmanim(&self, request: &ZmanimRequest) -> ZmanimTable {
        self.requests.lock().unwrap().push(request.date);

        let tz = request.location.timezone;
        let date = request.date;
        let mut table = DAILY_TIMES
            .iter()
            .fold(ZmanimTable::new(), |table, (name, hour, minute)| {
                table.with_time(*name, local(tz, date, *hour, *minute))
            });

        let sunset = local(tz, date, 18, 45);
        if Self::has_candle_lighting(date) {
            let offset = chrono::Duration::minutes(request.candle_lighting_offset_minutes);
            table = table.with_candle_lighting(sunset - offset);
        }
        if Self::has_havdalah(date) {
            let minutes = match request.havdalah_offset_minutes {
                0 => 40,
                offset => offset,
            };
            table = table.with_havdalah(sunset + chrono::Duration::minutes(minutes));
        }
        table
    }
}

// Solar ------------------------------------------------------------------

/// Reports sunset at a fixed local time, or nothing at all.
pub struct FakeSolar {
    sunset: Option<NaiveTime>,
}

impl FakeSolar {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self {
            sunset: NaiveTime::from_hms_opt(hour, minute, 0),
        }
    }

    pub fn unavailable() -> Self {
        Self { sunset: None }
    }
}

impl SolarEvents for FakeSolar {
    async fn event_time(
        &self,
        location: &Location,
        event: SolarEvent,
        date: NaiveDate,
    ) -> Option<Timestamp> {
        match event {
            SolarEvent::Sunset => self.sunset.map(|time| {
                location
                    .timezone
                    .from_local_datetime(&date.and_time(time))
                    .single()
                    .unwrap()
                    .with_timezone(&Utc)
            }),
            SolarEvent::Sunrise => None,
        }
    }
}
