//! The dual calendar panel: a Gregorian and a Bengali month side by side.

use crate::config::DisplayConfig;
use crate::consts::DAYS_PER_WEEK;
use crate::converter::BengaliMonthWindow;
use crate::grid::{Direction, MonthGrid, MonthGridBuilder, navigate};
use crate::locale::{Language, bengali_title, gregorian_title, localize_digits, to_bengali_digits, weekday_headers};
use crate::popup::{ConversionDirection, DateConversionPopup, PopupContent, ResolvedDatePair};
use crate::types::{CalendarSystem, GregorianDate};
use crate::CalendarError;

/// Owns the two independent view cursors and the conversion popup.
///
/// Each cursor is any Gregorian date inside the month its grid shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualCalendarView {
    today:            GregorianDate,
    gregorian_cursor: GregorianDate,
    bengali_cursor:   GregorianDate,
    popup:            DateConversionPopup,
    config:           DisplayConfig,
}

impl DualCalendarView {
    /// Both grids open on the month containing `today`.
    pub const fn new(today: GregorianDate, config: DisplayConfig) -> Self {
        Self {
            today,
            gregorian_cursor: today,
            bengali_cursor: today,
            popup: DateConversionPopup::new(),
            config,
        }
    }

    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the system clock is unusable.
    pub fn for_today(config: DisplayConfig) -> Result<Self, CalendarError> {
        Ok(Self::new(GregorianDate::today()?, config))
    }

    #[inline]
    pub const fn today(&self) -> GregorianDate {
        self.today
    }

    /// Updates the wall-clock date, e.g. after midnight. Cursors stay where they are.
    pub fn set_today(&mut self, today: GregorianDate) {
        self.today = today;
    }

    #[inline]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    pub const fn cursor(&self, system: CalendarSystem) -> GregorianDate {
        match system {
            CalendarSystem::Gregorian => self.gregorian_cursor,
            CalendarSystem::Bengali => self.bengali_cursor,
        }
    }

    pub fn grid(&self, system: CalendarSystem) -> MonthGrid {
        MonthGridBuilder::new(system, self.today)
            .selected(self.popup.date())
            .build(self.cursor(system))
    }

    pub fn gregorian_grid(&self) -> MonthGrid {
        self.grid(CalendarSystem::Gregorian)
    }

    pub fn bengali_grid(&self) -> MonthGrid {
        self.grid(CalendarSystem::Bengali)
    }

    /// Moves one grid a month forward or back, leaving the other untouched.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` at the ends of the supported years;
    /// the cursor does not move.
    pub fn navigate(&mut self, system: CalendarSystem, direction: Direction) -> Result<GregorianDate, CalendarError> {
        let target = navigate(self.cursor(system), system, direction)?;
        match system {
            CalendarSystem::Gregorian => self.gregorian_cursor = target,
            CalendarSystem::Bengali => self.bengali_cursor = target,
        }
        Ok(target)
    }

    /// Resolves a clicked day of one grid and opens the popup for it.
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the grid has no such day.
    pub fn click_day(&mut self, system: CalendarSystem, day: u8) -> Result<ResolvedDatePair, CalendarError> {
        let date = self.grid(system).date_for_day(day)?;
        Ok(self.popup.open(date, ConversionDirection::from_source(system)))
    }

    /// Returns whether a popup was open.
    pub fn dismiss_popup(&mut self) -> bool {
        self.popup.dismiss()
    }

    #[inline]
    pub const fn popup(&self) -> &DateConversionPopup {
        &self.popup
    }

    pub fn popup_content(&self) -> Option<PopupContent> {
        self.popup.content(self.config.language)
    }

    /// Month header for one grid.
    pub fn title(&self, system: CalendarSystem) -> String {
        match system {
            CalendarSystem::Gregorian => gregorian_title(self.gregorian_cursor),
            CalendarSystem::Bengali => bengali_title(&BengaliMonthWindow::containing(self.bengali_cursor)),
        }
    }

    pub const fn weekday_headers(&self, system: CalendarSystem) -> &'static [&'static str; DAYS_PER_WEEK] {
        weekday_headers(system)
    }

    /// Text for a day number in one grid.
    pub fn day_label(&self, system: CalendarSystem, day: u8) -> String {
        match system {
            CalendarSystem::Bengali if self.config.bengali_grid_native_digits => to_bengali_digits(day),
            CalendarSystem::Bengali => localize_digits(day, self.config.language),
            CalendarSystem::Gregorian => day.to_string(),
        }
    }
}
