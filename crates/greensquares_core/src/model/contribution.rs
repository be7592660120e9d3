//! Contribution record and grid model.
//!
//! # Responsibility
//! - Define the `{date, level}` record used on the wire and in memory.
//! - Provide the date-keyed `Grid` that every edit operation produces.
//!
//! # Invariants
//! - `Level` is always within `0..=4`.
//! - `Grid` holds at most one record per date; later writes win.
//! - Level-0 records may live in a `Grid` but are never persisted.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Activity intensity of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub struct Level(u8);

impl Level {
    /// No activity. Omitted from persisted state.
    pub const NONE: Level = Level(0);
    /// Lowest activity; first click on an empty day.
    pub const LOW: Level = Level(1);
    /// Highest intensity; used for pattern pixels.
    pub const MAX: Level = Level(4);
    /// Number of distinct levels.
    pub const COUNT: u8 = 5;

    /// Builds a level, rejecting values above `4`.
    pub fn new(value: u8) -> Result<Self, RecordValidationError> {
        if value >= Self::COUNT {
            return Err(RecordValidationError::LevelOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Raw numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Next level in the click cycle `0 -> 1 -> 2 -> 3 -> 4 -> 0`.
    pub fn cycled(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        value.0
    }
}

impl TryFrom<u8> for Level {
    type Error = RecordValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for externally supplied records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Level is not within `0..=4`.
    LevelOutOfRange(i64),
    /// Date string is not shaped like `YYYY-MM-DD`.
    MalformedDate(String),
    /// Date string is well-formed but names no calendar day.
    InvalidDate(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LevelOutOfRange(value) => {
                write!(f, "level {value} is out of range; expected 0..=4")
            }
            Self::MalformedDate(value) => {
                write!(f, "date `{value}` is not formatted as YYYY-MM-DD")
            }
            Self::InvalidDate(value) => write!(f, "date `{value}` is not a calendar day"),
        }
    }
}

impl Error for RecordValidationError {}

/// Parses a strict ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, RecordValidationError> {
    let trimmed = value.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(RecordValidationError::MalformedDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| RecordValidationError::InvalidDate(value.to_string()))
}

/// Formats a date the way records are persisted.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// One day of activity.
///
/// Serialized as `{"date": "YYYY-MM-DD", "level": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ContributionRecord {
    #[serde(serialize_with = "iso_date::serialize")]
    pub date: NaiveDate,
    pub level: Level,
}

impl ContributionRecord {
    pub fn new(date: NaiveDate, level: Level) -> Self {
        Self { date, level }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    date: String,
    level: i64,
}

impl TryFrom<RawRecord> for ContributionRecord {
    type Error = RecordValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&raw.date)?;
        let level = u8::try_from(raw.level)
            .ok()
            .and_then(|value| Level::new(value).ok())
            .ok_or(RecordValidationError::LevelOutOfRange(raw.level))?;
        Ok(Self { date, level })
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }
}

/// The full in-memory set of records, keyed by date.
///
/// Records for years other than the displayed one are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    entries: BTreeMap<NaiveDate, Level>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from records; for duplicate dates the last record wins.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ContributionRecord>,
    {
        let mut grid = Self::new();
        grid.merge(records);
        grid
    }

    /// Number of records, including level-0 ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored record level, if a record exists for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<Level> {
        self.entries.get(&date).copied()
    }

    /// Returns the level shown for `date`; absent dates read as level 0.
    pub fn level_at(&self, date: NaiveDate) -> Level {
        self.get(date).unwrap_or_default()
    }

    /// Inserts or overwrites one record.
    pub fn set(&mut self, date: NaiveDate, level: Level) {
        self.entries.insert(date, level);
    }

    /// Overwrites existing dates and inserts new ones; other dates are untouched.
    pub fn merge<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ContributionRecord>,
    {
        for record in records {
            self.entries.insert(record.date, record.level);
        }
    }

    /// Records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = ContributionRecord> + '_ {
        self.entries
            .iter()
            .map(|(date, level)| ContributionRecord::new(*date, *level))
    }

    pub fn records(&self) -> Vec<ContributionRecord> {
        self.iter().collect()
    }

    /// Records with a non-zero level, in ascending date order.
    pub fn non_zero_records(&self) -> Vec<ContributionRecord> {
        self.iter().filter(|record| !record.level.is_zero()).collect()
    }

    /// Smallest and largest year with at least one record (of any level).
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some((first.year(), last.year()))
    }
}

impl FromIterator<ContributionRecord> for Grid {
    fn from_iter<T: IntoIterator<Item = ContributionRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}
