//! Display language, Bengali numerals and the text shown around the grids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BENGALI_DIGITS, BENGALI_WEEKDAY_NAMES, DAYS_PER_WEEK, GREGORIAN_MONTH_NAMES, GREGORIAN_MONTH_NAMES_BENGALI,
    GREGORIAN_WEEKDAY_NAMES,
};
use crate::converter::BengaliMonthWindow;
use crate::prelude::*;
use crate::types::{BengaliDate, CalendarSystem, GregorianDate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Language {
    #[default]
    #[serde(rename = "English", alias = "en")]
    #[display(fmt = "English")]
    English,
    #[serde(rename = "বাংলা", alias = "bn", alias = "Bengali")]
    #[display(fmt = "বাংলা")]
    Bengali,
}

/// Fixed labels of the conversion popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub bengali_equivalent: &'static str,
    pub english_equivalent: &'static str,
    pub close:              &'static str,
}

impl Language {
    pub const fn labels(self) -> Labels {
        match self {
            Self::English => Labels {
                bengali_equivalent: "Bengali Date:",
                english_equivalent: "English Date:",
                close:              "Close",
            },
            Self::Bengali => Labels {
                bengali_equivalent: "বাংলা তারিখ:",
                english_equivalent: "ইংরেজি তারিখ:",
                close:              "বন্ধ করুন",
            },
        }
    }
}

/// Replaces every ASCII digit in the rendered value with its Bengali numeral.
///
/// Signs, separators and any other characters pass through untouched.
pub fn to_bengali_digits(value: impl fmt::Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| BENGALI_DIGITS[d as usize]))
        .collect()
}

/// Renders `value`, switching to Bengali numerals for [`Language::Bengali`].
pub fn localize_digits(value: impl fmt::Display, language: Language) -> String {
    match language {
        Language::English => value.to_string(),
        Language::Bengali => to_bengali_digits(value),
    }
}

/// `day month-name year` in Bengali script, e.g. `১ বৈশাখ ১৪৩১`.
pub fn format_bengali_date(date: &BengaliDate) -> String {
    format!(
        "{} {} {}",
        to_bengali_digits(date.day()),
        date.month().name(),
        to_bengali_digits(date.year())
    )
}

/// Long-form Gregorian date: `April 14, 2024` or `১৪ এপ্রিল, ২০২৪`.
pub fn format_gregorian_long(date: GregorianDate, language: Language) -> String {
    let month = usize::from(date.month0());
    match language {
        Language::English => format!("{} {}, {}", GREGORIAN_MONTH_NAMES[month], date.day(), date.year()),
        Language::Bengali => format!(
            "{} {}, {}",
            to_bengali_digits(date.day()),
            GREGORIAN_MONTH_NAMES_BENGALI[month],
            to_bengali_digits(date.year())
        ),
    }
}

/// Header of a Gregorian grid, e.g. `April 2024`.
pub fn gregorian_title(date: GregorianDate) -> String {
    format!("{} {}", GREGORIAN_MONTH_NAMES[usize::from(date.month0())], date.year())
}

/// Header of a Bengali grid, e.g. `বৈশাখ ১৪৩১`.
pub fn bengali_title(window: &BengaliMonthWindow) -> String {
    format!("{} {}", window.month().name(), to_bengali_digits(window.year()))
}

/// Column headers in grid order.
pub const fn weekday_headers(system: CalendarSystem) -> &'static [&'static str; DAYS_PER_WEEK] {
    match system {
        CalendarSystem::Gregorian => &GREGORIAN_WEEKDAY_NAMES,
        CalendarSystem::Bengali => &BENGALI_WEEKDAY_NAMES,
    }
}
