//! Gregorian to Bengali (Bangla) solar calendar conversion, month grids for
//! both calendars, and the state of a side-by-side calendar panel.
//!
//! ```
//! use bengali_calendar::{BengaliMonth, GregorianDate, convert, to_bengali_digits};
//!
//! let date = GregorianDate::new(2024, 4, 14).unwrap();
//! let bn = convert(date);
//! assert_eq!((bn.day(), bn.month(), bn.year()), (1, BengaliMonth::Boishakh, 1431));
//! assert_eq!(to_bengali_digits(bn.year()), "১৪৩১");
//! ```
//!
//! Month boundaries follow a fixed table of Gregorian month-start days. This
//! is an approximation of the solar calendar: it matches present-day usage
//! but is not recomputed astronomically, so distant dates may drift.

mod config;
mod consts;
mod converter;
mod grid;
mod locale;
pub mod logging;
mod popup;
mod prelude;
mod types;
mod view;

pub use config::{ConfigError, DisplayConfig};
pub use consts::*;
pub use converter::{BengaliMonthWindow, MonthStartTable, bengali_year, convert};
pub use grid::{CalendarCell, Direction, MonthGrid, MonthGridBuilder, build_month_grid, navigate};
pub use locale::{
    Labels, Language, bengali_title, format_bengali_date, format_gregorian_long, gregorian_title, localize_digits,
    to_bengali_digits, weekday_headers,
};
pub use popup::{ConversionDirection, DateConversionPopup, PopupContent, PopupState, ResolvedDatePair};
pub use types::{
    BengaliDate, BengaliMonth, CalendarSystem, GregorianDate, bengali_weekday, days_in_month, is_leap_year,
    is_supported_year,
};
pub use view::DualCalendarView;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[display(fmt = "Year {} is outside the supported range {}-{}", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i32),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid Bengali month index: {} (must be 0-{})", "_0", "MONTHS_PER_YEAR - 1")]
    InvalidMonthIndex(usize),
    #[display(fmt = "Day {day} is outside a {days_in_month}-day month")]
    DayOutOfRange { day: u8, days_in_month: u8 },
    #[display(fmt = "Date would leave the supported years {}-{}", MIN_YEAR, MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for CalendarError {}
