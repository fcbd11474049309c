// JSON Record Store
// Persists file records as a pretty-printed JSON array on disk

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::{count_in, find_in, remove_from, FileRecord, RecordStore};
use crate::error::{StoreError, StoreResult};

/// File-backed record store.
///
/// The whole file is read on every call and rewritten on every mutation. A
/// missing file reads as an empty store; it is created on the first add.
/// Duplicate names only appear if the file is edited by hand.
#[derive(Debug)]
pub struct JsonRecordStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    guard: Mutex<()>,
}

impl JsonRecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, ()>> {
        self.guard.lock().map_err(|_| StoreError::Poisoned)
    }

    fn load(&self) -> StoreResult<Vec<FileRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, records: &[FileRecord]) -> StoreResult<()> {
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!(path = %self.path.display(), records = records.len(), "saved record store");
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn add(&self, record: FileRecord) -> StoreResult<bool> {
        let _guard = self.lock()?;
        let mut records = self.load()?;
        if count_in(&records, &record.file_name) > 0 {
            return Ok(false);
        }
        records.push(record);
        self.save(&records)?;
        Ok(true)
    }

    fn find_one_by_name(&self, file_name: &str) -> StoreResult<Option<FileRecord>> {
        let _guard = self.lock()?;
        Ok(find_in(&self.load()?, file_name))
    }

    fn count_by_name(&self, file_name: &str) -> StoreResult<usize> {
        let _guard = self.lock()?;
        Ok(count_in(&self.load()?, file_name))
    }

    fn delete_by_name(&self, file_name: &str) -> StoreResult<bool> {
        let _guard = self.lock()?;
        let mut records = self.load()?;
        if !remove_from(&mut records, file_name) {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }
}
