// Record Store Module
// Maps a file name to its ciphertext location and key material behind one trait

mod json;
mod memory;

pub use json::JsonRecordStore;
pub use memory::MemoryRecordStore;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Metadata tying a plaintext file name to its ciphertext and key pair.
///
/// Key components are stored as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_name: String,
    pub location: String,
    pub n: String,
    pub e: String,
    pub d: String,
}

/// Capability interface over whatever backend holds the records.
pub trait RecordStore {
    /// Add a record. Returns `false` without storing anything if the name is taken.
    fn add(&self, record: FileRecord) -> StoreResult<bool>;

    /// Return the first record with this file name, if any.
    fn find_one_by_name(&self, file_name: &str) -> StoreResult<Option<FileRecord>>;

    /// Number of records with this file name.
    fn count_by_name(&self, file_name: &str) -> StoreResult<usize>;

    /// Remove every record with this file name. Returns whether any was removed.
    fn delete_by_name(&self, file_name: &str) -> StoreResult<bool>;
}

// Shared by both backends over their in-memory record list.

pub(crate) fn find_in(records: &[FileRecord], file_name: &str) -> Option<FileRecord> {
    records.iter().find(|r| r.file_name == file_name).cloned()
}

pub(crate) fn count_in(records: &[FileRecord], file_name: &str) -> usize {
    records.iter().filter(|r| r.file_name == file_name).count()
}

pub(crate) fn remove_from(records: &mut Vec<FileRecord>, file_name: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.file_name != file_name);
    records.len() != before
}
