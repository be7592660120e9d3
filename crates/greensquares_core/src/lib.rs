//! Core domain logic for the Green Squares contribution-chart editor.
//! This crate is the single source of truth for grid invariants.

pub mod calendar;
pub mod history;
pub mod layout;
pub mod logging;
pub mod model;
pub mod pattern;
pub mod randomizer;
pub mod service;
pub mod shift;
pub mod store;

pub use calendar::{all_dates_in_year, all_dates_in_years, days_in_year, is_leap_year};
pub use history::History;
pub use layout::{level_colors, ChartCell, ChartLayout, LevelColors, MonthLabel, Rgb};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contribution::{
    format_iso_date, parse_iso_date, ContributionRecord, Grid, Level, RecordValidationError,
};
pub use pattern::{text_to_pattern, PatternError};
pub use randomizer::{randomize, Intensity, RandomizeError};
pub use service::editor_service::{EditorError, EditorSession, LoadOutcome};
pub use shift::{shift_grid, shift_left, shift_right, ShiftDirection};
pub use store::{GridStore, JsonFileStore, MemoryGridStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
