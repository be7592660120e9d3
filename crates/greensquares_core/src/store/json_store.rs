//! JSON file store.
//!
//! The document is a pretty-printed array of `{"date", "level"}` objects.
//! Saves go through a sibling temp file that is renamed over the target.

use super::{GridStore, StoreResult};
use crate::model::contribution::ContributionRecord;
use log::{error, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Default document name used by front ends.
pub const DEFAULT_FILE_NAME: &str = "contributions.json";

const TEMP_SUFFIX: &str = "tmp";

/// Store backed by one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    fn read_document(&self) -> StoreResult<Vec<ContributionRecord>> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_document(&self, records: &[ContributionRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut body = serde_json::to_vec_pretty(records)?;
        body.push(b'\n');

        let temp_path = self.temp_path();
        let write_result = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(&body)?;
            file.sync_all()
        });
        if let Err(err) = write_result.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

impl GridStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<ContributionRecord>> {
        let started_at = Instant::now();
        let result = self.read_document();

        match &result {
            Ok(records) => info!(
                "event=store_load module=store status=ok records={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) if err.is_not_found() => warn!(
                "event=store_load module=store status=missing duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn save(&self, records: &[ContributionRecord]) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.write_document(records);

        match &result {
            Ok(()) => info!(
                "event=store_save module=store status=ok records={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_save module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}
