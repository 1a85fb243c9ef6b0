//! Month grids for both calendar systems and month-by-month navigation.

use std::iter;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, MAX_GRID_CELLS, NEXT_MONTH_OVERSHOOT_DAYS, PREVIOUS_MONTH_BACKTRACK_DAYS};
use crate::converter::{BengaliMonthWindow, convert};
use crate::prelude::*;
use crate::types::{CalendarSystem, GregorianDate};
use crate::CalendarError;

/// One slot of a 7-column month grid.
///
/// Days of a Bengali month that fall outside the supported Gregorian years are
/// rendered as `Empty`, so every `Day` cell resolves through
/// [`MonthGrid::date_for_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Padding before day 1, or a day outside the supported years
    Empty,
    Day {
        day:         u8,
        is_today:    bool,
        is_selected: bool,
    },
}

impl CalendarCell {
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(*day),
            Self::Empty => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_today(&self) -> bool {
        matches!(self, Self::Day { is_today: true, .. })
    }

    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Day { is_selected: true, .. })
    }
}

/// A rendered month: leading blanks followed by days `1..=days_in_month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    system:         CalendarSystem,
    first_day:      NaiveDate,
    year:           i32,
    month_index:    usize,
    leading_blanks: usize,
    days_in_month:  u8,
    cells:          Vec<CalendarCell>,
}

impl MonthGrid {
    #[inline]
    pub const fn system(&self) -> CalendarSystem {
        self.system
    }

    /// Gregorian day on which day 1 falls; may precede `MIN_YEAR` for a Bengali grid.
    #[inline]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Year in the grid's own calendar system
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month in the grid's own calendar system
    #[inline]
    pub const fn month_index(&self) -> usize {
        self.month_index
    }

    #[inline]
    pub const fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    #[inline]
    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Week rows; the last one may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Gregorian date behind a clicked day number.
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the grid has no such day, or
    /// `CalendarError::OutOfRange` if its cell is blank because the day lies
    /// outside the supported years.
    pub fn date_for_day(&self, day: u8) -> Result<GregorianDate, CalendarError> {
        if day == 0 || day > self.days_in_month {
            return Err(CalendarError::DayOutOfRange {
                day,
                days_in_month: self.days_in_month,
            });
        }
        resolve_day(self.first_day, day)
    }
}

/// Builds [`MonthGrid`]s, tagging today's cell and an optional selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGridBuilder {
    system:   CalendarSystem,
    today:    GregorianDate,
    selected: Option<GregorianDate>,
}

impl MonthGridBuilder {
    pub const fn new(system: CalendarSystem, today: GregorianDate) -> Self {
        Self {
            system,
            today,
            selected: None,
        }
    }

    #[must_use]
    pub const fn selected(mut self, date: Option<GregorianDate>) -> Self {
        self.selected = date;
        self
    }

    /// Grid of the month containing `reference`.
    pub fn build(&self, reference: GregorianDate) -> MonthGrid {
        let layout = match self.system {
            CalendarSystem::Gregorian => {
                let first_day = reference.first_of_month();
                Layout {
                    first_day: first_day.as_naive(),
                    year: first_day.year(),
                    month_index: usize::from(first_day.month0()),
                    leading_blanks: usize::from(first_day.weekday_from_sunday()),
                    days_in_month: first_day.days_in_month(),
                }
            },
            CalendarSystem::Bengali => {
                let window = BengaliMonthWindow::containing(reference);
                Layout {
                    first_day: window.start(),
                    year: window.year(),
                    month_index: window.month_index(),
                    leading_blanks: usize::from(window.first_weekday()),
                    days_in_month: window.days_in_month(),
                }
            },
        };

        let today = self.day_in_view(self.today, &layout);
        let selected = self.selected.and_then(|date| self.day_in_view(date, &layout));

        let cells: Vec<CalendarCell> = iter::repeat_n(CalendarCell::Empty, layout.leading_blanks)
            .chain((1..=layout.days_in_month).map(|day| {
                if resolve_day(layout.first_day, day).is_err() {
                    return CalendarCell::Empty;
                }
                CalendarCell::Day {
                    day,
                    is_today: today == Some(day),
                    is_selected: selected == Some(day),
                }
            }))
            .collect();
        debug_assert!(cells.len() <= MAX_GRID_CELLS);

        tracing::debug!(
            system = %self.system,
            first_day = %layout.first_day,
            cells = cells.len(),
            "built month grid"
        );

        MonthGrid {
            system: self.system,
            first_day: layout.first_day,
            year: layout.year,
            month_index: layout.month_index,
            leading_blanks: layout.leading_blanks,
            days_in_month: layout.days_in_month,
            cells,
        }
    }

    /// Day number of `date` if it falls in the laid-out month, compared in
    /// the grid's own calendar system.
    fn day_in_view(&self, date: GregorianDate, layout: &Layout) -> Option<u8> {
        let (year, month_index, day) = match self.system {
            CalendarSystem::Gregorian => (date.year(), usize::from(date.month0()), date.day()),
            CalendarSystem::Bengali => {
                let bn = convert(date);
                (bn.year(), bn.month_index(), bn.day())
            },
        };
        (year == layout.year && month_index == layout.month_index).then_some(day)
    }
}

struct Layout {
    first_day:      NaiveDate,
    year:           i32,
    month_index:    usize,
    leading_blanks: usize,
    days_in_month:  u8,
}

fn resolve_day(first_day: NaiveDate, day: u8) -> Result<GregorianDate, CalendarError> {
    GregorianDate::shifted(first_day.checked_add_days(Days::new(u64::from(day - 1))))
}

/// Grid of the month containing `reference`, with today's cell tagged.
pub fn build_month_grid(reference: GregorianDate, system: CalendarSystem, today: GregorianDate) -> MonthGrid {
    MonthGridBuilder::new(system, today).build(reference)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[display(fmt = "next")]
    Next,
    #[display(fmt = "previous")]
    Previous,
}

/// Moves a view cursor to the adjacent month of `system`.
///
/// Gregorian moves land on the 1st of the target month. Bengali moves jump
/// from the current window's start, past its end for `Next` or a few days
/// before it for `Previous`; the result is a date inside the target month,
/// from which the caller recomputes the window.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the target month leaves the
/// supported years.
pub fn navigate(
    current: GregorianDate,
    system: CalendarSystem,
    direction: Direction,
) -> Result<GregorianDate, CalendarError> {
    let target = match (system, direction) {
        (CalendarSystem::Gregorian, Direction::Next) => current.first_of_month().checked_add_months(1),
        (CalendarSystem::Gregorian, Direction::Previous) => current.first_of_month().checked_sub_months(1),
        (CalendarSystem::Bengali, Direction::Next) => {
            let window = BengaliMonthWindow::containing(current);
            let overshoot = Days::new(u64::from(window.days_in_month()) + NEXT_MONTH_OVERSHOOT_DAYS);
            GregorianDate::shifted(window.start().checked_add_days(overshoot))
        },
        (CalendarSystem::Bengali, Direction::Previous) => {
            let window = BengaliMonthWindow::containing(current);
            GregorianDate::shifted(window.start().checked_sub_days(Days::new(PREVIOUS_MONTH_BACKTRACK_DAYS)))
        },
    };

    match &target {
        Ok(date) => tracing::debug!(%system, %direction, from = %current, to = %date, "navigated"),
        Err(err) => tracing::warn!(%system, %direction, from = %current, %err, "navigation refused"),
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BengaliMonth;
    use crate::test_utils::{gdate, naive};

    fn day_numbers(grid: &MonthGrid) -> Vec<u8> {
        grid.cells().iter().filter_map(CalendarCell::day).collect()
    }

    #[test]
    fn test_gregorian_grid_layout() {
        // April 1, 2024 was a Monday
        let grid = build_month_grid(gdate(2024, 4, 20), CalendarSystem::Gregorian, gdate(2000, 1, 1));
        assert_eq!(grid.first_day(), naive(2024, 4, 1));
        assert_eq!(grid.leading_blanks(), 1);
        assert_eq!(grid.days_in_month(), 30);
        assert_eq!(grid.len(), 31);
        assert!(grid.cells()[0].is_empty());
        assert_eq!(day_numbers(&grid), (1..=30).collect::<Vec<_>>());
        assert_eq!(grid.month_index(), 3);
        assert_eq!(grid.year(), 2024);
    }

    #[test]
    fn test_gregorian_grid_leap_february() {
        // February 1, 2024 was a Thursday
        let grid = build_month_grid(gdate(2024, 2, 10), CalendarSystem::Gregorian, gdate(2000, 1, 1));
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.days_in_month(), 29);
    }

    #[test]
    fn test_bengali_grid_layout() {
        // Boishakh 1431 opens on Sunday, April 14, 2024
        let grid = build_month_grid(gdate(2024, 5, 1), CalendarSystem::Bengali, gdate(2000, 1, 1));
        assert_eq!(grid.first_day(), naive(2024, 4, 14));
        assert_eq!(grid.month_index(), BengaliMonth::Boishakh.index());
        assert_eq!(grid.year(), 1431);
        assert_eq!(grid.leading_blanks(), 1);
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.len(), 32);
    }

    #[test]
    fn test_bengali_grid_saturday_start() {
        // Boishakh 1425 opened on Saturday, April 14, 2018
        let grid = build_month_grid(gdate(2018, 4, 14), CalendarSystem::Bengali, gdate(2000, 1, 1));
        assert_eq!(grid.leading_blanks(), 0);
        assert!(!grid.cells()[0].is_empty());
    }

    #[test]
    fn test_grid_completeness() {
        for system in [CalendarSystem::Gregorian, CalendarSystem::Bengali] {
            let mut cursor = gdate(2020, 1, 1);
            for _ in 0..60 {
                let grid = build_month_grid(cursor, system, cursor);
                let days = usize::from(grid.days_in_month());
                assert_eq!(grid.len(), grid.leading_blanks() + days);
                assert!(grid.leading_blanks() < DAYS_PER_WEEK);
                assert!(grid.len() <= MAX_GRID_CELLS);
                assert!(grid.len() >= days);
                assert!(grid.rows().all(|row| row.len() <= DAYS_PER_WEEK));
                cursor = navigate(cursor, system, Direction::Next).expect("next month");
            }
        }
    }

    #[test]
    fn test_today_marking() {
        let today = gdate(2024, 4, 14);

        let gregorian = build_month_grid(gdate(2024, 4, 1), CalendarSystem::Gregorian, today);
        let marked: Vec<u8> = gregorian
            .cells()
            .iter()
            .filter(|cell| cell.is_today())
            .filter_map(CalendarCell::day)
            .collect();
        assert_eq!(marked, vec![14]);

        let bengali = build_month_grid(gdate(2024, 4, 20), CalendarSystem::Bengali, today);
        let marked: Vec<u8> = bengali
            .cells()
            .iter()
            .filter(|cell| cell.is_today())
            .filter_map(CalendarCell::day)
            .collect();
        assert_eq!(marked, vec![1]);
    }

    #[test]
    fn test_today_not_marked_in_other_months() {
        let today = gdate(2024, 4, 14);

        let may = build_month_grid(gdate(2024, 5, 1), CalendarSystem::Gregorian, today);
        assert!(may.cells().iter().all(|cell| !cell.is_today()));

        let april_2023 = build_month_grid(gdate(2023, 4, 1), CalendarSystem::Gregorian, today);
        assert!(april_2023.cells().iter().all(|cell| !cell.is_today()));

        // Choitro 1430 is the month right before today's Bengali month
        let choitro = build_month_grid(gdate(2024, 4, 1), CalendarSystem::Bengali, today);
        assert!(choitro.cells().iter().all(|cell| !cell.is_today()));
    }

    #[test]
    fn test_selected_marking() {
        let grid = MonthGridBuilder::new(CalendarSystem::Bengali, gdate(2000, 1, 1))
            .selected(Some(gdate(2024, 4, 20)))
            .build(gdate(2024, 4, 14));
        let selected: Vec<u8> = grid
            .cells()
            .iter()
            .filter(|cell| cell.is_selected())
            .filter_map(CalendarCell::day)
            .collect();
        assert_eq!(selected, vec![7]);
    }

    #[test]
    fn test_date_for_day() {
        let gregorian = build_month_grid(gdate(2024, 2, 10), CalendarSystem::Gregorian, gdate(2000, 1, 1));
        assert_eq!(gregorian.date_for_day(29), Ok(gdate(2024, 2, 29)));
        assert!(gregorian.date_for_day(30).is_err());

        let bengali = build_month_grid(gdate(2024, 2, 20), CalendarSystem::Bengali, gdate(2000, 1, 1));
        assert_eq!(bengali.date_for_day(1), Ok(gdate(2024, 2, 14)));
        assert_eq!(bengali.date_for_day(31), Ok(gdate(2024, 3, 15)));
        assert_eq!(
            bengali.date_for_day(0),
            Err(CalendarError::DayOutOfRange {
                day:           0,
                days_in_month: 31,
            })
        );
    }

    #[test]
    fn test_navigate_gregorian() {
        struct TestCase {
            from:        GregorianDate,
            direction:   Direction,
            to:          GregorianDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        gdate(2024, 1, 31),
                direction:   Direction::Next,
                to:          gdate(2024, 2, 1),
                description: "lands on the 1st",
            },
            TestCase {
                from:        gdate(2024, 12, 15),
                direction:   Direction::Next,
                to:          gdate(2025, 1, 1),
                description: "year rollover forward",
            },
            TestCase {
                from:        gdate(2024, 1, 15),
                direction:   Direction::Previous,
                to:          gdate(2023, 12, 1),
                description: "year rollover backward",
            },
            TestCase {
                from:        gdate(2024, 3, 31),
                direction:   Direction::Previous,
                to:          gdate(2024, 2, 1),
                description: "short previous month",
            },
        ];

        for case in &cases {
            assert_eq!(
                navigate(case.from, CalendarSystem::Gregorian, case.direction),
                Ok(case.to),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_navigate_bengali_next() {
        // Boishakh (31 days from April 14) + 2 overshoot
        let next = navigate(gdate(2024, 4, 20), CalendarSystem::Bengali, Direction::Next).expect("next month");
        assert_eq!(next, gdate(2024, 5, 17));
        assert_eq!(BengaliMonthWindow::containing(next).month(), BengaliMonth::Jyoishtho);

        // Choitro into the new year
        let next = navigate(gdate(2024, 3, 20), CalendarSystem::Bengali, Direction::Next).expect("next month");
        let window = BengaliMonthWindow::containing(next);
        assert_eq!(window.month(), BengaliMonth::Boishakh);
        assert_eq!(window.year(), 1431);
    }

    #[test]
    fn test_navigate_bengali_previous() {
        let previous =
            navigate(gdate(2024, 4, 20), CalendarSystem::Bengali, Direction::Previous).expect("previous month");
        assert_eq!(previous, gdate(2024, 4, 9));
        let window = BengaliMonthWindow::containing(previous);
        assert_eq!(window.month(), BengaliMonth::Choitro);
        assert_eq!(window.year(), 1430);
    }

    #[test]
    fn test_navigate_bengali_visits_every_month() {
        let mut cursor = gdate(1999, 4, 14);
        let mut expected = 0;
        for _ in 0..(12 * 30) {
            let window = BengaliMonthWindow::containing(cursor);
            assert_eq!(window.month_index(), expected, "skipped a month at {cursor}");
            cursor = navigate(cursor, CalendarSystem::Bengali, Direction::Next).expect("next month");
            expected = (expected + 1) % 12;
        }

        for _ in 0..(12 * 30) {
            expected = (expected + 11) % 12;
            cursor = navigate(cursor, CalendarSystem::Bengali, Direction::Previous).expect("previous month");
            assert_eq!(BengaliMonthWindow::containing(cursor).month_index(), expected);
        }
    }

    #[test]
    fn test_navigate_out_of_range() {
        assert_eq!(
            navigate(gdate(9999, 12, 5), CalendarSystem::Gregorian, Direction::Next),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            navigate(gdate(1, 1, 20), CalendarSystem::Gregorian, Direction::Previous),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            navigate(gdate(9999, 12, 20), CalendarSystem::Bengali, Direction::Next),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            navigate(gdate(1, 1, 5), CalendarSystem::Bengali, Direction::Previous),
            Err(CalendarError::OutOfRange)
        );
    }

    #[test]
    fn test_grids_at_range_edges() {
        struct TestCase {
            date:        GregorianDate,
            system:      CalendarSystem,
            days:        Vec<u8>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        gdate(1, 1, 1),
                system:      CalendarSystem::Bengali,
                days:        (17..=30).collect(),
                description: "Poush before the first supported day is blank",
            },
            TestCase {
                date:        gdate(9999, 12, 31),
                system:      CalendarSystem::Bengali,
                days:        (1..=16).collect(),
                description: "Poush after the last supported day is blank",
            },
            TestCase {
                date:        gdate(1, 1, 1),
                system:      CalendarSystem::Gregorian,
                days:        (1..=31).collect(),
                description: "January of the first year is whole",
            },
            TestCase {
                date:        gdate(9999, 12, 31),
                system:      CalendarSystem::Gregorian,
                days:        (1..=31).collect(),
                description: "December of the last year is whole",
            },
        ];

        for case in &cases {
            let grid = build_month_grid(case.date, case.system, case.date);
            assert_eq!(
                grid.len(),
                grid.leading_blanks() + usize::from(grid.days_in_month()),
                "{}",
                case.description
            );
            assert_eq!(day_numbers(&grid), case.days, "{}", case.description);

            for day in day_numbers(&grid) {
                let date = grid.date_for_day(day).expect("rendered day should resolve");
                let json = serde_json::to_string(&date).expect("serialize");
                let parsed: GregorianDate = serde_json::from_str(&json).expect("deserialize");
                assert_eq!(parsed, date, "{}", case.description);
            }

            let today: Vec<u8> = grid
                .cells()
                .iter()
                .filter(|cell| cell.is_today())
                .filter_map(CalendarCell::day)
                .collect();
            assert_eq!(today.len(), 1, "{}", case.description);
            assert_eq!(grid.date_for_day(today[0]), Ok(case.date), "{}", case.description);
        }

        let first = build_month_grid(gdate(1, 1, 1), CalendarSystem::Bengali, gdate(1, 1, 1));
        assert_eq!(first.first_day(), naive(0, 12, 16));
        assert_eq!(first.date_for_day(16), Err(CalendarError::OutOfRange));
    }
}
