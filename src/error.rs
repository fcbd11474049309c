// Vault Error Types
// Errors raised by the RSA core, the record store and the file workflow

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while generating keys or processing files
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("encryption path {0:?} is not an existing directory, change it and try again")]
    ConfigInvalid(PathBuf),

    #[error("invalid path: {0:?} is not an existing file")]
    SourceNotFound(PathBuf),

    #[error("couldn't access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no prime candidates below {bound}")]
    EmptyCandidateSet { bound: u64 },

    #[error("p and q must be distinct (both were {0})")]
    IdenticalPrimes(u64),

    #[error("prime candidates {p} and {q} give a degenerate modulus")]
    DegenerateModulus { p: u64, q: u64 },

    #[error("decrypted value {0} is not a valid character")]
    InvalidCodePoint(String),

    #[error("unable to decrypt: {count} records share the name {file_name:?}")]
    AmbiguousLookup { file_name: String, count: usize },

    #[error("no record found for {0:?}")]
    RecordNotFound(String),

    #[error("malformed ciphertext token {token:?} at position {index}")]
    MalformedCiphertext { index: usize, token: String },

    #[error("record {file_name:?} has a corrupt {field} field")]
    CorruptRecord { file_name: String, field: &'static str },

    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}

impl VaultError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VaultError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by a record store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}
