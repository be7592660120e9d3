//! One-week cyclic grid shifts.
//!
//! # Responsibility
//! - Move every record seven days forward or backward in time.
//!
//! # Invariants
//! - The rotation runs over the zero-filled day sequence of all years present
//!   in the grid plus one extra year in the shift direction.
//! - The returned grid holds no level-0 records.
//! - An empty grid is returned unchanged.

use crate::calendar::all_dates_in_years;
use crate::model::contribution::{ContributionRecord, Grid, Level};

const SHIFT_DAYS: usize = 7;

/// Direction of a one-week shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Earlier in time.
    Left,
    /// Later in time.
    Right,
}

impl ShiftDirection {
    /// Edit operation name used in logs.
    pub fn op_name(self) -> &'static str {
        match self {
            Self::Left => "shift_left",
            Self::Right => "shift_right",
        }
    }
}

/// Shifts every record one week in `direction`.
pub fn shift_grid(grid: &Grid, direction: ShiftDirection) -> Grid {
    let Some((min_year, max_year)) = grid.year_span() else {
        return grid.clone();
    };
    let (first_year, last_year) = match direction {
        ShiftDirection::Left => (min_year - 1, max_year),
        ShiftDirection::Right => (min_year, max_year + 1),
    };

    let dates = all_dates_in_years(first_year, last_year);
    let mut levels: Vec<Level> = dates.iter().map(|date| grid.level_at(*date)).collect();
    if levels.len() < SHIFT_DAYS {
        return grid.clone();
    }
    match direction {
        ShiftDirection::Left => levels.rotate_left(SHIFT_DAYS),
        ShiftDirection::Right => levels.rotate_right(SHIFT_DAYS),
    }

    dates
        .into_iter()
        .zip(levels)
        .filter(|(_, level)| !level.is_zero())
        .map(|(date, level)| ContributionRecord::new(date, level))
        .collect()
}

pub fn shift_right(grid: &Grid) -> Grid {
    shift_grid(grid, ShiftDirection::Right)
}

pub fn shift_left(grid: &Grid) -> Grid {
    shift_grid(grid, ShiftDirection::Left)
}

#[cfg(test)]
mod tests {
    use super::{shift_left, shift_right};
    use crate::model::contribution::{ContributionRecord, Grid, Level};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_grid_is_identity() {
        assert_eq!(shift_right(&Grid::new()), Grid::new());
        assert_eq!(shift_left(&Grid::new()), Grid::new());
    }

    #[test]
    fn right_shift_moves_one_week_later_and_drops_zeros() {
        let grid = Grid::from_records([
            ContributionRecord::new(day(2024, 6, 1), Level::MAX),
            ContributionRecord::new(day(2024, 6, 2), Level::NONE),
        ]);
        let shifted = shift_right(&grid);
        assert_eq!(
            shifted.records(),
            vec![ContributionRecord::new(day(2024, 6, 8), Level::MAX)]
        );
    }
}
