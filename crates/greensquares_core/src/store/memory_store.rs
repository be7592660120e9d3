//! In-memory store for tests and throwaway sessions.

use super::{GridStore, StoreError, StoreResult};
use crate::model::contribution::ContributionRecord;
use std::cell::{Cell, RefCell};

/// Store that keeps the last saved document in memory.
///
/// A store built with [`MemoryGridStore::unavailable`] fails every call until
/// [`MemoryGridStore::set_available`] is used.
#[derive(Debug, Default)]
pub struct MemoryGridStore {
    document: RefCell<Vec<ContributionRecord>>,
    unavailable: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryGridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `records`.
    pub fn with_records(records: Vec<ContributionRecord>) -> Self {
        Self {
            document: RefCell::new(records),
            ..Self::default()
        }
    }

    /// Store that rejects loads and saves.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.set(true);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    /// Current persisted document.
    pub fn document(&self) -> Vec<ContributionRecord> {
        self.document.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl GridStore for MemoryGridStore {
    fn load(&self) -> StoreResult<Vec<ContributionRecord>> {
        self.check_available()?;
        Ok(self.document())
    }

    fn save(&self, records: &[ContributionRecord]) -> StoreResult<()> {
        self.check_available()?;
        *self.document.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
