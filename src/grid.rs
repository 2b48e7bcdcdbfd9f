//! Month grid layout.

use chrono::{Datelike, Days, NaiveDate};

use crate::consts::{GRID_CELLS, GRID_COLUMNS, GRID_ROWS};

/// Returns the six Monday-first weeks covering the month of `reference`.
///
/// Only the year and month of `reference` matter. The first cell is the
/// Monday on or before the first of the month, and the 42 cells are
/// consecutive days, spilling into the neighboring months as needed.
///
/// ```
/// use academic_calendar::month_grid;
/// use chrono::NaiveDate;
///
/// // June 2025 starts on a Sunday, so the grid starts six days earlier.
/// let grid = month_grid(NaiveDate::from_ymd_opt(2025, 6, 18).unwrap());
/// assert_eq!(grid[0], NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
/// assert_eq!(grid[41], NaiveDate::from_ymd_opt(2025, 7, 6).unwrap());
/// ```
///
/// # Panics
/// Panics if the grid would extend past the range of `NaiveDate`, which only
/// happens for months at the very ends of that range.
pub fn month_grid(reference: NaiveDate) -> [NaiveDate; GRID_CELLS] {
    let first = reference - Days::new(u64::from(reference.day0()));
    let lead = first.weekday().num_days_from_monday();
    let start = first - Days::new(u64::from(lead));
    std::array::from_fn(|offset| start + Days::new(offset as u64))
}

/// [`month_grid`] split into week rows
pub fn month_grid_rows(reference: NaiveDate) -> [[NaiveDate; GRID_COLUMNS]; GRID_ROWS] {
    let cells = month_grid(reference);
    std::array::from_fn(|row| std::array::from_fn(|column| cells[row * GRID_COLUMNS + column]))
}
