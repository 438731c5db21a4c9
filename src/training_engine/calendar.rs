//! Today's date in Hijri and Gregorian form.
//!
//! The Hijri conversion is a pluggable [`HijriConverter`]; the default is the
//! arithmetic (tabular) Islamic calendar, which can differ from sighting-based
//! calendars by a day. Treat results as best effort.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::training_engine::models::HijriDate;
use crate::training_engine::months;

/// Year reported when no conversion is available.
pub const FALLBACK_YEAR: i32 = 1446;

/// Converts a Gregorian date into Hijri `(day, month, year)`.
pub trait HijriConverter {
    fn to_hijri(&self, date: NaiveDate) -> Option<(u32, u8, i32)>;
}

/// Tabular Islamic calendar with the civil (Friday) epoch and the 30-year
/// leap cycle {2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29}.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularCalendar;

/// Julian day number of 0001-01-01 minus one.
const CE_TO_JDN: i64 = 1_721_425;

impl HijriConverter for TabularCalendar {
    fn to_hijri(&self, date: NaiveDate) -> Option<(u32, u8, i32)> {
        let jdn = i64::from(date.num_days_from_ce()) + CE_TO_JDN;
        let mut days = jdn - 1_948_440 + 10_632;
        if days < 1 {
            return None;
        }
        let cycle = (days - 1) / 10_631;
        days = days - 10_631 * cycle + 354;
        let j = ((10_985 - days) / 5_316) * ((50 * days) / 17_719)
            + (days / 5_670) * ((43 * days) / 15_238);
        days = days - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
        let month = (24 * days) / 709;
        let day = days - (709 * month) / 24;
        let year = 30 * cycle + j - 30;

        Some((
            u32::try_from(day).ok()?,
            u8::try_from(month).ok()?,
            i32::try_from(year).ok()?,
        ))
    }
}

/// Resolves "today" through a converter, degrading to 1 Muharram on failure.
#[derive(Debug, Clone, Default)]
pub struct DateResolver<C = TabularCalendar> {
    converter: C,
}

impl DateResolver<TabularCalendar> {
    /// Resolver using the built-in arithmetic calendar.
    pub fn system() -> Self {
        Self { converter: TabularCalendar }
    }
}

impl<C: HijriConverter> DateResolver<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Hijri date for `date`, or the fallback date if conversion fails.
    pub fn hijri_for(&self, date: NaiveDate) -> HijriDate {
        let converted = self.converter.to_hijri(date).and_then(|(day, month, year)| {
            months::month(month).map(|m| HijriDate {
                day,
                month,
                year,
                month_name: m.name,
                arabic: m.arabic,
            })
        });
        converted.unwrap_or_else(|| {
            log::warn!("hijri conversion unavailable for {date}, falling back to 1 Muharram");
            fallback_date()
        })
    }

    pub fn today_hijri(&self) -> HijriDate {
        self.hijri_for(Local::now().date_naive())
    }

    pub fn today_gregorian_display(&self) -> String {
        gregorian_display(Local::now().date_naive())
    }
}

fn fallback_date() -> HijriDate {
    let first = &months::all_months()[0];
    HijriDate {
        day: 1,
        month: first.id,
        year: FALLBACK_YEAR,
        month_name: first.name,
        arabic: first.arabic,
    }
}

/// Today's Hijri date using the built-in calendar.
pub fn today_hijri() -> HijriDate {
    DateResolver::system().today_hijri()
}

/// Hijri date for `date` using the built-in calendar.
pub fn hijri_for(date: NaiveDate) -> HijriDate {
    DateResolver::system().hijri_for(date)
}

/// Today's Gregorian date in long Indonesian form.
pub fn today_gregorian_display() -> String {
    gregorian_display(Local::now().date_naive())
}

/// Long Indonesian date, e.g. "Rabu, 14 Oktober 2026".
pub fn gregorian_display(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        gregorian_month_name(date.month()),
        date.year()
    )
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

fn gregorian_month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Januari", "Februari", "Maret", "April", "Mei", "Juni",
        "Juli", "Agustus", "September", "Oktober", "November", "Desember",
    ];
    NAMES[(month.saturating_sub(1) % 12) as usize]
}
