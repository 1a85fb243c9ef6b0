//! Gregorian to Bengali solar calendar conversion.
//!
//! Month boundaries come from a fixed table of Gregorian month-start days
//! ([`MONTH_STARTS`]). This is an epoch-constant approximation of the Bengali
//! solar calendar, not an astronomical computation: dates far from the present
//! may drift from what a given almanac prints.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::consts::{
    EPOCH_OFFSET_BEFORE_NEW_YEAR, EPOCH_OFFSET_FROM_NEW_YEAR, FIRST_MONTH_IN_NEXT_YEAR, MONTH_START_TABLE_LEN,
    MONTH_STARTS, MONTHS_PER_YEAR, NEW_YEAR_DAY, NEW_YEAR_MONTH0,
};
use crate::types::{BengaliDate, BengaliMonth, GregorianDate, bengali_weekday, weekday_from_sunday};
use crate::CalendarError;

/// Month starts of two consecutive Bengali years: the one beginning in April
/// of `year - 1` and the one beginning in April of `year`.
///
/// Every date in Gregorian `year` falls on or after the first entry and before
/// the last, so a lookup always finds its month. Entries are plain chrono
/// dates because the tables for `MIN_YEAR` and `MAX_YEAR` reach one Gregorian
/// year past the supported range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthStartTable {
    entries: [NaiveDate; MONTH_START_TABLE_LEN],
}

impl MonthStartTable {
    pub fn around(year: i32) -> Self {
        let entries = std::array::from_fn(|i| {
            let new_year = if i < MONTHS_PER_YEAR { year - 1 } else { year };
            let slot = i % MONTHS_PER_YEAR;
            let gregorian_year = if slot < FIRST_MONTH_IN_NEXT_YEAR {
                new_year
            } else {
                new_year + 1
            };
            month_start(gregorian_year, MONTH_STARTS[slot])
        });
        Self { entries }
    }

    pub const fn entries(&self) -> &[NaiveDate; MONTH_START_TABLE_LEN] {
        &self.entries
    }

    /// Index of the latest month start on or before `date`.
    pub fn locate(&self, date: NaiveDate) -> usize {
        self.entries
            .iter()
            .rposition(|start| *start <= date)
            .unwrap_or(0)
    }
}

// Every MONTH_STARTS entry is a real day in any year chrono can hold; the
// fallback only guards years far outside the supported range.
fn month_start(year: i32, (month, day): (u8, u8)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).unwrap_or(NaiveDate::MIN)
}

/// One Bengali month laid over the Gregorian timeline.
///
/// The month that holds the first supported days starts in December of the
/// year before `MIN_YEAR`, and the one holding the last supported days ends in
/// January after `MAX_YEAR`. Their out-of-range days have no [`GregorianDate`]:
/// [`Self::date_for_day`] refuses them and grids leave their cells blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BengaliMonthWindow {
    start:         NaiveDate,
    month:         BengaliMonth,
    days_in_month: u8,
    year:          i32,
}

impl BengaliMonthWindow {
    /// The Bengali month that `date` falls in.
    pub fn containing(date: GregorianDate) -> Self {
        let table = MonthStartTable::around(date.year());
        let index = table.locate(date.as_naive());
        let start = table.entries[index];
        let month = BengaliMonth::ALL[index % MONTHS_PER_YEAR];

        Self {
            start,
            month,
            days_in_month: month.days(start.year()),
            year: bengali_year(date),
        }
    }

    /// Gregorian day on which day 1 falls; may precede `MIN_YEAR`.
    #[inline]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub const fn month(&self) -> BengaliMonth {
        self.month
    }

    #[inline]
    pub const fn month_index(&self) -> usize {
        self.month.index()
    }

    #[inline]
    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Bengali year the month belongs to
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Grid column of day 1 in a Saturday-first week
    pub fn first_weekday(&self) -> u8 {
        bengali_weekday(weekday_from_sunday(self.start))
    }

    /// Gregorian date of Bengali `day` in this month: `start + (day - 1)`.
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` unless `1 <= day <= days_in_month`,
    /// or `CalendarError::OutOfRange` if that day lies outside the supported years.
    pub fn date_for_day(&self, day: u8) -> Result<GregorianDate, CalendarError> {
        if day == 0 || day > self.days_in_month {
            return Err(CalendarError::DayOutOfRange {
                day,
                days_in_month: self.days_in_month,
            });
        }
        GregorianDate::shifted(self.start.checked_add_days(Days::new(u64::from(day - 1))))
    }
}

/// Bengali year of `date`: the year turns over on April 14.
pub fn bengali_year(date: GregorianDate) -> i32 {
    let month0 = date.month0();
    let before_new_year = month0 < NEW_YEAR_MONTH0 || (month0 == NEW_YEAR_MONTH0 && date.day() < NEW_YEAR_DAY);
    if before_new_year {
        date.year() - EPOCH_OFFSET_BEFORE_NEW_YEAR
    } else {
        date.year() - EPOCH_OFFSET_FROM_NEW_YEAR
    }
}

/// Converts a Gregorian date to the Bengali solar calendar.
///
/// Total over every valid [`GregorianDate`]. Month boundaries use the fixed
/// epoch constants of [`MONTH_STARTS`], so results are only trustworthy within
/// a few centuries of the present.
pub fn convert(date: GregorianDate) -> BengaliDate {
    let window = BengaliMonthWindow::containing(date);
    let result = BengaliDate::new(bengali_year(date), window.month, day_in_window(&window, date));
    tracing::trace!(%date, bengali = %result, "converted gregorian date");
    result
}

// The located window starts at most 31 days before `date`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn day_in_window(window: &BengaliMonthWindow, date: GregorianDate) -> u8 {
    (date.as_naive().signed_duration_since(window.start).num_days() + 1) as u8
}

impl From<GregorianDate> for BengaliDate {
    fn from(date: GregorianDate) -> Self {
        convert(date)
    }
}
