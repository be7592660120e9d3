//! Grid persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save boundary used by the editor session.
//! - Keep file and serialization details out of editing logic.
//!
//! # Invariants
//! - A save either replaces the whole document or leaves the prior one intact.
//! - Loads reject invalid persisted records instead of masking them.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::contribution::ContributionRecord;

pub mod json_store;
pub mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryGridStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Backend refused the request.
    Unavailable(String),
}

impl StoreError {
    /// `true` when the backing document does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid contributions document: {err}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Storage interface for the contributions document.
pub trait GridStore {
    /// Reads every persisted record.
    fn load(&self) -> StoreResult<Vec<ContributionRecord>>;
    /// Replaces the persisted document with `records`.
    fn save(&self, records: &[ContributionRecord]) -> StoreResult<()>;
}

impl<S: GridStore + ?Sized> GridStore for &S {
    fn load(&self) -> StoreResult<Vec<ContributionRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[ContributionRecord]) -> StoreResult<()> {
        (**self).save(records)
    }
}
