// In-Memory Record Store
// Keeps file records in a mutex-guarded list for tests and embedding

use std::sync::{Mutex, MutexGuard};

use super::{count_in, find_in, remove_from, FileRecord, RecordStore};
use crate::error::{StoreError, StoreResult};

/// Record store held entirely in memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<FileRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records without the duplicate-name check.
    pub fn with_records(records: Vec<FileRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Snapshot of every record currently held.
    pub fn records(&self) -> StoreResult<Vec<FileRecord>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<FileRecord>>> {
        self.records.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl RecordStore for MemoryRecordStore {
    fn add(&self, record: FileRecord) -> StoreResult<bool> {
        let mut records = self.lock()?;
        if count_in(&records, &record.file_name) > 0 {
            return Ok(false);
        }
        records.push(record);
        Ok(true)
    }

    fn find_one_by_name(&self, file_name: &str) -> StoreResult<Option<FileRecord>> {
        Ok(find_in(&self.lock()?, file_name))
    }

    fn count_by_name(&self, file_name: &str) -> StoreResult<usize> {
        Ok(count_in(&self.lock()?, file_name))
    }

    fn delete_by_name(&self, file_name: &str) -> StoreResult<bool> {
        let mut records = self.lock()?;
        Ok(remove_from(&mut records, file_name))
    }
}
