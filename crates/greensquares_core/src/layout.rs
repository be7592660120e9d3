//! Contribution chart layout.
//!
//! # Responsibility
//! - Place every day of one year on a 7-row by N-column week grid.
//! - Compute month label columns and per-level colors for front ends.
//!
//! # Invariants
//! - `cells` has one entry per day of the year, in date order.
//! - `start_day_offset` is always within `0..=6`.
//! - Row `r` holds the days whose weekday is `r` counted from Sunday, so
//!   the `Mon` label row holds every Monday.
//! - Dates absent from the grid render as level 0.

use crate::calendar::{all_dates_in_year, year_start};
use crate::model::contribution::{Grid, Level};
use chrono::{Datelike, NaiveDate};
use std::fmt::{Display, Formatter};

/// Row labels, top to bottom.
pub const WEEKDAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Fill and border color of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColors {
    pub fill: Rgb,
    pub border: Rgb,
}

const LEVEL_COLORS: [LevelColors; 5] = [
    LevelColors {
        fill: Rgb::new(22, 27, 34),
        border: Rgb::new(22, 27, 34),
    },
    LevelColors {
        fill: Rgb::new(15, 68, 42),
        border: Rgb::new(27, 78, 53),
    },
    LevelColors {
        fill: Rgb::new(4, 108, 52),
        border: Rgb::new(17, 116, 62),
    },
    LevelColors {
        fill: Rgb::new(41, 165, 69),
        border: Rgb::new(52, 170, 78),
    },
    LevelColors {
        fill: Rgb::new(60, 210, 89),
        border: Rgb::new(60, 210, 89),
    },
];

/// Color pair for a raw level value; anything outside `0..=4` uses level 0.
pub fn level_colors(level: u8) -> LevelColors {
    LEVEL_COLORS
        .get(usize::from(level))
        .copied()
        .unwrap_or(LEVEL_COLORS[0])
}

/// Legend swatches from "Less" (level 0) to "More" (level 4).
pub fn legend() -> [LevelColors; 5] {
    LEVEL_COLORS
}

/// Row of January 1, counted from Sunday (row 0) to Saturday (row 6).
pub fn start_day_offset(year: i32) -> usize {
    year_start(year)
        .map(|first| first.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0)
}

/// One day placed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCell {
    pub date: NaiveDate,
    pub level: Level,
    /// Column, 0-based.
    pub week_index: usize,
    /// Row, 0-based.
    pub day_of_week: usize,
}

impl ChartCell {
    pub fn colors(&self) -> LevelColors {
        level_colors(self.level.value())
    }
}

/// Month abbreviation anchored above the column holding the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub label: &'static str,
    pub week_index: usize,
}

/// Full placement of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    pub year: i32,
    pub start_day_offset: usize,
    pub num_weeks: usize,
    pub cells: Vec<ChartCell>,
    pub month_labels: Vec<MonthLabel>,
}

impl ChartLayout {
    /// Lays out `year` using the levels stored in `grid`.
    pub fn compute(grid: &Grid, year: i32) -> Self {
        let dates = all_dates_in_year(year);
        let offset = start_day_offset(year);
        let num_weeks = (dates.len() + offset).div_ceil(7);

        let mut cells = Vec::with_capacity(dates.len());
        let mut month_labels = Vec::with_capacity(MONTH_ABBREVIATIONS.len());
        for (index, date) in dates.into_iter().enumerate() {
            let slot = index + offset;
            let week_index = slot / 7;
            if date.day() == 1 {
                month_labels.push(MonthLabel {
                    label: MONTH_ABBREVIATIONS[date.month0() as usize],
                    week_index,
                });
            }
            cells.push(ChartCell {
                date,
                level: grid.level_at(date),
                week_index,
                day_of_week: slot % 7,
            });
        }

        Self {
            year,
            start_day_offset: offset,
            num_weeks,
            cells,
            month_labels,
        }
    }

    /// Cell at a grid position, if that position holds a day of this year.
    pub fn cell_at(&self, week_index: usize, day_of_week: usize) -> Option<&ChartCell> {
        if day_of_week >= 7 {
            return None;
        }
        let slot = week_index * 7 + day_of_week;
        slot.checked_sub(self.start_day_offset)
            .and_then(|index| self.cells.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{level_colors, start_day_offset, ChartLayout, Rgb};
    use crate::model::contribution::{ContributionRecord, Grid, Level};
    use chrono::NaiveDate;

    #[test]
    fn offset_is_weekday_of_january_first() {
        // 2022-01-01 is a Saturday, 2023-01-01 a Sunday, 2024-01-01 a Monday.
        assert_eq!(start_day_offset(2022), 6);
        assert_eq!(start_day_offset(2023), 0);
        assert_eq!(start_day_offset(2024), 1);
    }

    #[test]
    fn out_of_range_levels_use_empty_color() {
        assert_eq!(level_colors(9), level_colors(0));
        assert_eq!(level_colors(4).fill, Rgb::new(60, 210, 89));
        assert_eq!(level_colors(0).fill.to_string(), "rgb(22, 27, 34)");
    }

    #[test]
    fn cell_lookup_matches_placement() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let grid = Grid::from_records([ContributionRecord::new(date, Level::new(3).unwrap())]);
        let layout = ChartLayout::compute(&grid, 2024);
        let cell = layout
            .cells
            .iter()
            .find(|cell| cell.date == date)
            .copied()
            .unwrap();
        assert_eq!(
            layout.cell_at(cell.week_index, cell.day_of_week),
            Some(&cell)
        );
        assert_eq!(cell.level.value(), 3);
        assert_eq!(layout.cell_at(0, 0), None);
    }
}
