//! Editor session use-case service.
//!
//! # Responsibility
//! - Own the grid, its edit history, the displayed year and the store for
//!   one interactive session.
//! - Route every grid mutation through `History` so undo/redo cover all edits.
//!
//! # Invariants
//! - Edits are cell click, randomize, pattern apply and shift left/right.
//!   Nothing else mutates the grid except undo/redo.
//! - A failed edit leaves grid and history untouched.
//! - Changing the displayed year is not an edit.
//! - Saves persist only non-zero records; a failed save changes nothing.

use crate::calendar::{all_dates_in_year, year_start};
use crate::history::History;
use crate::layout::ChartLayout;
use crate::model::contribution::{Grid, Level};
use crate::pattern::{text_to_pattern, PatternError};
use crate::randomizer::{randomize, Intensity};
use crate::shift::{shift_grid, ShiftDirection};
use crate::store::{GridStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by editor actions.
#[derive(Debug)]
pub enum EditorError {
    /// Text contains a character outside the glyph table.
    Pattern(PatternError),
    /// Compiled text does not fit into the displayed year.
    PatternOutOfRange { cell_index: usize, days_in_year: usize },
    /// Year cannot be represented on the calendar.
    YearOutOfRange(i32),
    /// Persistence failure.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "{err}"),
            Self::PatternOutOfRange {
                cell_index,
                days_in_year,
            } => write!(
                f,
                "pattern does not fit the year: cell {cell_index} exceeds {days_in_year} days"
            ),
            Self::YearOutOfRange(year) => write!(f, "year {year} is out of range"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::PatternOutOfRange { .. } | Self::YearOutOfRange(_) => None,
        }
    }
}

impl From<PatternError> for EditorError {
    fn from(value: PatternError) -> Self {
        Self::Pattern(value)
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// How the initial grid was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were read from the store.
    Loaded { records: usize },
    /// The store failed; the session started empty.
    StartedEmpty,
}

/// One interactive editing session.
pub struct EditorSession<S: GridStore> {
    store: S,
    grid: Grid,
    history: History<Grid>,
    selected_year: i32,
    load_outcome: LoadOutcome,
}

impl<S: GridStore> EditorSession<S> {
    /// Opens a session, loading the grid from `store`.
    ///
    /// Load failures never abort: the session starts with an empty grid.
    pub fn open(store: S, selected_year: i32) -> Self {
        let (grid, load_outcome) = match store.load() {
            Ok(records) => {
                let count = records.len();
                (Grid::from_records(records), LoadOutcome::Loaded { records: count })
            }
            Err(err) => {
                warn!(
                    "event=session_open module=editor status=fallback reason=load_failed error={}",
                    err
                );
                (Grid::new(), LoadOutcome::StartedEmpty)
            }
        };
        info!(
            "event=session_open module=editor status=ok records={} year={}",
            grid.len(),
            selected_year
        );

        Self {
            store,
            grid,
            history: History::new(),
            selected_year,
            load_outcome,
        }
    }

    /// Starts a session from an in-memory grid without touching the store.
    pub fn with_grid(store: S, grid: Grid, selected_year: i32) -> Self {
        let records = grid.len();
        Self {
            store,
            grid,
            history: History::new(),
            selected_year,
            load_outcome: LoadOutcome::Loaded { records },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// Switches the displayed year. Not recorded in history.
    pub fn set_selected_year(&mut self, year: i32) -> Result<(), EditorError> {
        if year_start(year).is_none() {
            return Err(EditorError::YearOutOfRange(year));
        }
        self.selected_year = year;
        Ok(())
    }

    /// Layout of the displayed year.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::compute(&self.grid, self.selected_year)
    }

    /// Cycles the level of `date` and returns the new level.
    ///
    /// Dates without a record start at level 1.
    pub fn click_cell(&mut self, date: NaiveDate) -> Level {
        let next_level = match self.grid.get(date) {
            Some(level) => level.cycled(),
            None => Level::LOW,
        };
        self.history.apply_edit(&mut self.grid, |grid| {
            let mut next = grid.clone();
            next.set(date, next_level);
            next
        });
        self.log_edit("cell_click");
        next_level
    }

    /// Randomizes every day of the displayed year and merges the result.
    ///
    /// Returns the number of randomized days.
    pub fn randomize<R>(&mut self, intensity: Intensity, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let dates = all_dates_in_year(self.selected_year);
        let records = randomize(&dates, intensity, rng);
        let count = records.len();
        self.history.apply_edit(&mut self.grid, |grid| {
            let mut next = grid.clone();
            next.merge(records);
            next
        });
        self.log_edit("randomize");
        count
    }

    /// Writes `text` onto the displayed year at full intensity.
    ///
    /// Returns the number of lit cells. Unsupported characters or text that
    /// overflows the year fail without changing anything.
    pub fn apply_text_pattern(&mut self, text: &str) -> Result<usize, EditorError> {
        let cells = text_to_pattern(text)?;
        let dates = all_dates_in_year(self.selected_year);
        self.history.try_apply_edit(&mut self.grid, |grid| {
            let mut next = grid.clone();
            for index in &cells {
                let date = dates.get(*index).ok_or(EditorError::PatternOutOfRange {
                    cell_index: *index,
                    days_in_year: dates.len(),
                })?;
                next.set(*date, Level::MAX);
            }
            Ok::<_, EditorError>(next)
        })?;
        self.log_edit("pattern_apply");
        Ok(cells.len())
    }

    /// Shifts every record one week in `direction`.
    pub fn shift(&mut self, direction: ShiftDirection) {
        self.history
            .apply_edit(&mut self.grid, |grid| shift_grid(grid, direction));
        self.log_edit(direction.op_name());
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Persists all non-zero records and returns how many were written.
    pub fn save(&self) -> Result<usize, EditorError> {
        let records = self.grid.non_zero_records();
        match self.store.save(&records) {
            Ok(()) => {
                info!(
                    "event=session_save module=editor status=ok records={}",
                    records.len()
                );
                Ok(records.len())
            }
            Err(err) => {
                warn!(
                    "event=session_save module=editor status=error error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn log_edit(&self, op: &str) {
        info!(
            "event=edit_apply module=editor status=ok op={} records={} undo_depth={}",
            op,
            self.grid.len(),
            self.history.undo_depth()
        );
    }
}
