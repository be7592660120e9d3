//! Calendar date ranges.
//!
//! # Invariants
//! - Every range is contiguous, strictly ascending and has one entry per day.
//! - A single year spans `YYYY-01-01..=YYYY-12-31` (365 or 366 entries).

use chrono::NaiveDate;

/// First day of `year`, or `None` when the year is outside chrono's range.
pub fn year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Returns `true` when `year` has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    year_start(year).is_some_and(|first| first.leap_year())
}

/// Number of days in `year`; 0 for years chrono cannot represent.
pub fn days_in_year(year: i32) -> usize {
    match year_start(year) {
        Some(first) if first.leap_year() => 366,
        Some(_) => 365,
        None => 0,
    }
}

/// Every calendar date of `year`, January 1 through December 31.
///
/// Returns an empty sequence for years chrono cannot represent.
pub fn all_dates_in_year(year: i32) -> Vec<NaiveDate> {
    all_dates_in_years(year, year)
}

/// Every calendar date from January 1 of `first_year` through December 31 of
/// `last_year`, inclusive. Empty when `first_year > last_year`.
pub fn all_dates_in_years(first_year: i32, last_year: i32) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (
        year_start(first_year),
        NaiveDate::from_ymd_opt(last_year, 12, 31),
    ) else {
        return Vec::new();
    };
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|date| *date <= end).collect()
}

#[cfg(test)]
mod tests {
    use super::{all_dates_in_year, all_dates_in_years, days_in_year, is_leap_year};
    use chrono::NaiveDate;

    #[test]
    fn leap_years_follow_gregorian_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn year_range_is_bounded_and_contiguous() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            let dates = all_dates_in_year(year);
            assert_eq!(dates.len(), days_in_year(year));
            assert_eq!(dates[0], NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
            assert_eq!(
                *dates.last().unwrap(),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap()
            );
            assert!(dates.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
        }
    }

    #[test]
    fn multi_year_range_concatenates_years() {
        let dates = all_dates_in_years(2023, 2024);
        assert_eq!(dates.len(), 365 + 366);
        assert!(all_dates_in_years(2025, 2024).is_empty());
    }

    #[test]
    fn unrepresentable_years_are_empty() {
        let year = i32::MAX;
        assert!(!is_leap_year(year));
        assert_eq!(days_in_year(year), 0);
        assert!(all_dates_in_year(year).is_empty());
    }
}
