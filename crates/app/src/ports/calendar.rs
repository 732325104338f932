//! Calendar port: the external Hebrew-calendar library.

use std::fmt;

use chrono::NaiveDate;
use luach_domain::calendar::{HebrewDateParts, Holiday};
use luach_domain::config::Language;

/// A Hebrew calendar date anchored to a civil date.
///
/// Values are immutable: navigation returns a new date. Every localized
/// string comes back in the language the date was constructed with.
pub trait HebrewDate: Clone + fmt::Debug {
    /// The civil (Gregorian) date this Hebrew date is anchored to.
    fn civil_date(&self) -> NaiveDate;

    #[must_use]
    fn next_day(&self) -> Self;

    #[must_use]
    fn previous_day(&self) -> Self;

    /// This date if it is a Sabbath, otherwise the next Sabbath.
    #[must_use]
    fn upcoming_shabbat(&self) -> Self;

    /// The current or next block of consecutive Sabbath/festival days.
    fn upcoming_shabbat_or_festival(&self) -> DateSpan<Self>;

    /// Formatted Hebrew date, as displayed to the user.
    fn formatted(&self) -> String;

    fn parts(&self) -> HebrewDateParts;

    fn holiday(&self) -> Holiday;

    /// Torah portion read on this date; only meaningful on a Sabbath.
    fn parasha(&self) -> String;

    /// Day of the Omer, `0` outside the counting period.
    fn omer_day(&self) -> u8;

    /// Daily Talmud page reference.
    fn daf_yomi(&self) -> String;
}

/// First and last day of a run of Sabbath/festival days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan<D> {
    pub first_day: D,
    pub last_day: D,
}

/// Constructor and fixed tables of the calendar library.
pub trait CalendarProvider {
    type Date: HebrewDate;

    /// Build the Hebrew date for `civil` under the given rules.
    fn date(&self, civil: NaiveDate, diaspora: bool, language: Language) -> Self::Date;

    /// Every Torah portion name, in reading order.
    fn weekly_portions(&self, language: Language) -> Vec<String>;

    /// Every holiday description the library knows.
    fn holiday_descriptions(&self, language: Language) -> Vec<String>;
}
