//! Presentation state of the date conversion popup.
//!
//! `Closed -> Open { date, direction } -> Closed`. Opening while open replaces
//! the current popup; only the host dismisses it.

use serde::Serialize;

use crate::converter::convert;
use crate::locale::{Language, format_bengali_date, format_gregorian_long};
use crate::prelude::*;
use crate::types::{BengaliDate, CalendarSystem, GregorianDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    #[display(fmt = "en-to-bn")]
    GregorianToBengali,
    #[display(fmt = "bn-to-en")]
    BengaliToGregorian,
}

impl ConversionDirection {
    /// Direction for a click in the grid of `system`.
    pub const fn from_source(system: CalendarSystem) -> Self {
        match system {
            CalendarSystem::Gregorian => Self::GregorianToBengali,
            CalendarSystem::Bengali => Self::BengaliToGregorian,
        }
    }

    pub const fn source(self) -> CalendarSystem {
        match self {
            Self::GregorianToBengali => CalendarSystem::Gregorian,
            Self::BengaliToGregorian => CalendarSystem::Bengali,
        }
    }

    pub const fn target(self) -> CalendarSystem {
        match self {
            Self::GregorianToBengali => CalendarSystem::Bengali,
            Self::BengaliToGregorian => CalendarSystem::Gregorian,
        }
    }
}

/// The same day in both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedDatePair {
    pub gregorian: GregorianDate,
    pub bengali:   BengaliDate,
}

impl ResolvedDatePair {
    pub fn resolve(gregorian: GregorianDate) -> Self {
        Self {
            gregorian,
            bengali: convert(gregorian),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PopupState {
    #[default]
    Closed,
    Open {
        date:      GregorianDate,
        direction: ConversionDirection,
    },
}

/// Text of an open popup, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub direction:   ConversionDirection,
    /// "Bengali Date:" or "English Date:" in the display language
    pub heading:     &'static str,
    /// The clicked day in the target calendar
    pub primary:     String,
    /// The clicked day in the source calendar
    pub secondary:   String,
    pub close_label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateConversionPopup {
    state: PopupState,
}

impl DateConversionPopup {
    pub const fn new() -> Self {
        Self {
            state: PopupState::Closed,
        }
    }

    #[inline]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, PopupState::Open { .. })
    }

    /// Gregorian date the popup is showing, if open.
    pub const fn date(&self) -> Option<GregorianDate> {
        match self.state {
            PopupState::Open { date, .. } => Some(date),
            PopupState::Closed => None,
        }
    }

    /// Opens the popup for `date`, replacing whatever was showing.
    pub fn open(&mut self, date: GregorianDate, direction: ConversionDirection) -> ResolvedDatePair {
        if let PopupState::Open { date: previous, .. } = self.state {
            tracing::debug!(%previous, "replacing open conversion popup");
        }
        self.state = PopupState::Open { date, direction };
        let pair = ResolvedDatePair::resolve(date);
        tracing::debug!(%date, %direction, bengali = %pair.bengali, "opened conversion popup");
        pair
    }

    /// Closes the popup. Returns whether it was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = PopupState::Closed;
        if was_open {
            tracing::debug!("dismissed conversion popup");
        }
        was_open
    }

    pub fn resolved(&self) -> Option<ResolvedDatePair> {
        self.date().map(ResolvedDatePair::resolve)
    }

    pub fn content(&self, language: Language) -> Option<PopupContent> {
        let PopupState::Open { date, direction } = self.state else {
            return None;
        };
        let pair = ResolvedDatePair::resolve(date);
        let labels = language.labels();
        let bengali = format_bengali_date(&pair.bengali);
        let gregorian = format_gregorian_long(pair.gregorian, language);

        let (heading, primary, secondary) = match direction {
            ConversionDirection::GregorianToBengali => (labels.bengali_equivalent, bengali, gregorian),
            ConversionDirection::BengaliToGregorian => (labels.english_equivalent, gregorian, bengali),
        };

        Some(PopupContent {
            direction,
            heading,
            primary,
            secondary,
            close_label: labels.close,
        })
    }
}
