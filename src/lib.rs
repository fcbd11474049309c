//! Textbook RSA file vault.
//!
//! Encrypts a file one character at a time under a freshly generated key pair,
//! writes the ciphertext as comma-separated integers and keeps the key material
//! in a [`store::RecordStore`]. Decryption looks the record up by file name.
//!
//! This is un-padded RSA with small moduli and offers no real confidentiality.

pub mod config;
pub mod error;
pub mod rsa;
pub mod store;
pub mod ui;
pub mod util;
pub mod workflow;

pub use config::{Cli, VaultConfig};
pub use error::{StoreError, VaultError, VaultResult};
pub use store::{FileRecord, JsonRecordStore, MemoryRecordStore, RecordStore};
pub use workflow::{EncryptReport, FileCryptoWorkflow};
