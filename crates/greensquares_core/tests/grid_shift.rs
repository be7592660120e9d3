use chrono::NaiveDate;
use greensquares_core::{
    shift_grid, shift_left, shift_right, ContributionRecord, Grid, Level, ShiftDirection,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn level(value: u8) -> Level {
    Level::new(value).unwrap()
}

#[test]
fn right_then_left_restores_every_record() {
    let grid = Grid::from_records([
        ContributionRecord::new(day(2023, 6, 15), level(4)),
        ContributionRecord::new(day(2024, 1, 3), level(2)),
        ContributionRecord::new(day(2024, 12, 28), level(3)),
    ]);

    let there = shift_right(&grid);
    assert_eq!(there.get(day(2025, 1, 4)), Some(level(3)));
    assert_eq!(there.get(day(2024, 1, 10)), Some(level(2)));
    assert_eq!(there.get(day(2023, 6, 22)), Some(level(4)));

    assert_eq!(shift_left(&there), grid);
}

#[test]
fn left_then_right_restores_every_record() {
    let grid = Grid::from_records([
        ContributionRecord::new(day(2024, 1, 3), level(2)),
        ContributionRecord::new(day(2024, 2, 29), level(1)),
    ]);

    let there = shift_left(&grid);
    assert_eq!(there.get(day(2023, 12, 27)), Some(level(2)));
    assert_eq!(there.get(day(2024, 2, 22)), Some(level(1)));

    assert_eq!(shift_right(&there), grid);
}

#[test]
fn shifts_cross_year_boundaries_without_wrapping() {
    let last_day = Grid::from_records([ContributionRecord::new(day(2024, 12, 31), level(4))]);
    assert_eq!(
        shift_right(&last_day).records(),
        vec![ContributionRecord::new(day(2025, 1, 7), level(4))]
    );

    let first_day = Grid::from_records([ContributionRecord::new(day(2024, 1, 1), level(4))]);
    assert_eq!(
        shift_left(&first_day).records(),
        vec![ContributionRecord::new(day(2023, 12, 25), level(4))]
    );
}

#[test]
fn zero_level_records_widen_the_range_but_are_dropped() {
    let grid = Grid::from_records([
        ContributionRecord::new(day(2020, 5, 5), Level::NONE),
        ContributionRecord::new(day(2024, 5, 5), level(2)),
    ]);

    let shifted = shift_grid(&grid, ShiftDirection::Right);
    assert_eq!(
        shifted.records(),
        vec![ContributionRecord::new(day(2024, 5, 12), level(2))]
    );
}

#[test]
fn shifting_keeps_record_count_for_non_zero_levels() {
    let grid: Grid = (1..=28)
        .map(|d| ContributionRecord::new(day(2024, 2, d), level((d % 4 + 1) as u8)))
        .collect();
    let shifted = shift_grid(&grid, ShiftDirection::Left);
    assert_eq!(shifted.len(), grid.len());
    assert_eq!(shifted.get(day(2024, 1, 25)), grid.get(day(2024, 2, 1)));
}
