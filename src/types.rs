use crate::CalendarError;
use crate::consts::{
    BENGALI_MONTH_NAMES, BENGALI_MONTH_NAMES_LATIN, CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_WEEK,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_EXTENDED_MONTH, LEAP_YEAR_CYCLE, LONG_MONTH_COUNT,
    LONG_MONTH_DAYS, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR, SHORT_MONTH_DAYS,
};
use crate::prelude::*;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Gregorian calendar date in the supported year range `MIN_YEAR..=MAX_YEAR`.
///
/// Months and days are 1-indexed; `month0` gives the zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new date, validating the year range and the day of month.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year is outside `MIN_YEAR..=MAX_YEAR`,
    /// or `CalendarError::InvalidDate` if the month or day does not exist.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Wraps a chrono date, validating the year range.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year is unsupported.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        check_year(date.year())?;
        Ok(Self(date))
    }

    /// The local wall-clock date.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the system clock is wildly off.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    #[inline]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, 1-12
    #[inline]
    pub fn month(self) -> u8 {
        narrow(self.0.month())
    }

    /// Month, 0-11
    #[inline]
    pub fn month0(self) -> u8 {
        narrow(self.0.month0())
    }

    #[inline]
    pub fn day(self) -> u8 {
        narrow(self.0.day())
    }

    /// Day of week with Sunday as 0
    #[inline]
    pub fn weekday_from_sunday(self) -> u8 {
        weekday_from_sunday(self.0)
    }

    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub fn first_of_month(self) -> Self {
        Self(self.0.with_day(u32::from(MIN_DAY)).unwrap_or(self.0))
    }

    /// Whole days from `earlier` to `self`, negative if `earlier` is later.
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported years.
    pub fn checked_add_days(self, days: u64) -> Result<Self, CalendarError> {
        Self::shifted(self.0.checked_add_days(Days::new(days)))
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported years.
    pub fn checked_sub_days(self, days: u64) -> Result<Self, CalendarError> {
        Self::shifted(self.0.checked_sub_days(Days::new(days)))
    }

    /// Adds whole months, clamping the day to the target month's length.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported years.
    pub fn checked_add_months(self, months: u32) -> Result<Self, CalendarError> {
        Self::shifted(self.0.checked_add_months(Months::new(months)))
    }

    /// Subtracts whole months, clamping the day to the target month's length.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported years.
    pub fn checked_sub_months(self, months: u32) -> Result<Self, CalendarError> {
        Self::shifted(self.0.checked_sub_months(Months::new(months)))
    }

    /// Wraps the result of a chrono shift, rejecting a missing or unsupported date.
    pub(crate) fn shifted(date: Option<NaiveDate>) -> Result<Self, CalendarError> {
        date.filter(|d| is_supported_year(d.year()))
            .map(Self)
            .ok_or(CalendarError::OutOfRange)
    }

    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, CalendarError> {
        s.parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl TryFrom<String> for GregorianDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GregorianDate> for String {
    fn from(date: GregorianDate) -> Self {
        date.to_string()
    }
}

/// The twelve months of the Bengali solar calendar, Boishakh first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BengaliMonth {
    Boishakh,
    Jyoishtho,
    Asharh,
    Shrabon,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Choitro,
}

impl BengaliMonth {
    pub const ALL: [Self; MONTHS_PER_YEAR] = [
        Self::Boishakh,
        Self::Jyoishtho,
        Self::Asharh,
        Self::Shrabon,
        Self::Bhadro,
        Self::Ashwin,
        Self::Kartik,
        Self::Ogrohayon,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Choitro,
    ];

    /// Looks up a month by its zero-based index (0 = Boishakh).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonthIndex` if `index` is 12 or more.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CalendarError::InvalidMonthIndex(index))
    }

    /// Zero-based index, 0 = Boishakh
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name in Bengali script
    pub const fn name(self) -> &'static str {
        BENGALI_MONTH_NAMES[self.index()]
    }

    /// Name in Latin transliteration
    pub const fn name_latin(self) -> &'static str {
        BENGALI_MONTH_NAMES_LATIN[self.index()]
    }

    /// Day count of this month when its window begins in Gregorian `start_year`.
    ///
    /// Boishakh through Ashwin have 31 days, the rest 30. Falgun, which starts
    /// in February of the Gregorian year following the start of its Bengali
    /// year, takes 31 days when that February is a leap February.
    pub const fn days(self, start_year: i32) -> u8 {
        let index = self.index();
        if index < LONG_MONTH_COUNT || (index == LEAP_EXTENDED_MONTH && is_leap_year(start_year)) {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }
}

impl fmt::Display for BengaliMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_latin())
    }
}

/// A date in the Bengali solar calendar.
///
/// Only produced by converting a [`GregorianDate`]; see [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[display(fmt = "{day} {month} {year}")]
pub struct BengaliDate {
    year:  i32,
    month: BengaliMonth,
    day:   u8,
}

impl BengaliDate {
    pub(crate) const fn new(year: i32, month: BengaliMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> BengaliMonth {
        self.month
    }

    /// Zero-based month index, 0 = Boishakh
    #[inline]
    pub const fn month_index(&self) -> usize {
        self.month.index()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

/// Which calendar a grid, cursor or click belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Bengali")]
    Bengali,
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month as usize <= MONTHS_PER_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Column of a Gregorian weekday (Sunday = 0) in a Saturday-first Bengali week.
pub const fn bengali_weekday(gregorian_weekday: u8) -> u8 {
    (gregorian_weekday + 1) % DAYS_PER_WEEK as u8
}

pub const fn is_supported_year(year: i32) -> bool {
    year >= MIN_YEAR && year <= MAX_YEAR
}

/// Day of week of any chrono date with Sunday as 0
pub(crate) fn weekday_from_sunday(date: NaiveDate) -> u8 {
    narrow(date.weekday().num_days_from_sunday())
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if is_supported_year(year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange(year))
    }
}

// chrono reports months, days and weekdays as u32; all of them fit in a u8
#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: u32) -> u8 {
    value as u8
}
