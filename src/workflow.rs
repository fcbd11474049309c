// File Encryption Workflow
// Store, read and delete commands over key generation, the cipher and the record store

use std::path::{Path, PathBuf};
use std::str::FromStr;

use num_traits::Zero;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::VaultConfig;
use crate::error::{VaultError, VaultResult};
use crate::rsa::keygen::PRIME_BOUND;
use crate::rsa::{
    generate_key_tuples, parse_ciphertext, render_ciphertext, RsaBigInt, RsaPrivateKey,
};
use crate::store::{FileRecord, RecordStore};
use crate::util::file_ops::{base_name, read_file_text, write_file_text};

/// Outcome of a store (encrypt) command that got as far as writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptReport {
    pub file_name: String,
    pub destination: PathBuf,
    /// False when a record with this name already existed.
    pub record_added: bool,
    pub ciphertext_written: bool,
    pub ciphertext_len: u64,
    /// Reason the ciphertext write failed, if it did.
    pub write_error: Option<String>,
}

pub struct FileCryptoWorkflow<'a, S: RecordStore + ?Sized> {
    config: &'a VaultConfig,
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> FileCryptoWorkflow<'a, S> {
    pub fn new(config: &'a VaultConfig, store: &'a S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &VaultConfig {
        self.config
    }

    /// Encrypt the file at `path` with a freshly generated key pair.
    pub fn encrypt_file(&self, path: &Path) -> VaultResult<EncryptReport> {
        self.encrypt_file_with_rng(path, &mut rand::thread_rng())
    }

    /// As [`encrypt_file`](Self::encrypt_file), drawing keys from `rng`.
    ///
    /// A duplicate record name does not stop the ciphertext write, and a
    /// failed write is reported in the result rather than returned as an error.
    pub fn encrypt_file_with_rng<R: Rng + ?Sized>(
        &self,
        path: &Path,
        rng: &mut R,
    ) -> VaultResult<EncryptReport> {
        self.config.validate()?;
        if !path.is_file() {
            return Err(VaultError::SourceNotFound(path.to_path_buf()));
        }

        let keypair = generate_key_tuples(rng, PRIME_BOUND, self.config.primality)?;
        let message = read_file_text(path)?;

        let encoded = render_ciphertext(&keypair.public_key.encrypt(&message));
        let file_name = base_name(path);
        let destination = self.config.destination_for(&file_name);
        debug!(file = %file_name, chars = message.chars().count(), "encrypted file content");

        let record = FileRecord {
            file_name: file_name.clone(),
            location: destination.to_string_lossy().into_owned(),
            n: keypair.public_key.n.to_string(),
            e: keypair.public_key.e.to_string(),
            d: keypair.private_key.d.to_string(),
        };
        let record_added = self.store.add(record)?;
        if !record_added {
            warn!(file = %file_name, "record already exists, writing ciphertext anyway");
        }

        let write_error = match write_file_text(&destination, &encoded) {
            Ok(()) => {
                info!(file = %file_name, destination = %destination.display(), "stored encrypted file");
                None
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "couldn't write encrypted message");
                Some(e.to_string())
            }
        };

        Ok(EncryptReport {
            file_name,
            destination,
            record_added,
            ciphertext_written: write_error.is_none(),
            ciphertext_len: encoded.len() as u64,
            write_error,
        })
    }

    /// Decrypt the stored file recorded under `file_name` and return its text.
    pub fn decrypt_file(&self, file_name: &str) -> VaultResult<String> {
        self.config.validate()?;

        let record = self
            .store
            .find_one_by_name(file_name)?
            .ok_or_else(|| VaultError::RecordNotFound(file_name.to_string()))?;

        let count = self.store.count_by_name(file_name)?;
        if count > 1 {
            return Err(VaultError::AmbiguousLookup {
                file_name: file_name.to_string(),
                count,
            });
        }

        let n = record_field(&record, "n", &record.n)?;
        // A zero modulus would divide by zero during exponentiation
        if n.is_zero() {
            return Err(VaultError::CorruptRecord {
                file_name: record.file_name.clone(),
                field: "n",
            });
        }
        let private_key = RsaPrivateKey {
            n,
            d: record_field(&record, "d", &record.d)?,
        };

        let content = read_file_text(Path::new(&record.location))?;
        let ciphertext = parse_ciphertext(&content)?;
        let plaintext = private_key.decrypt(&ciphertext)?;
        info!(file = %file_name, chars = ciphertext.len(), "decrypted file");
        Ok(plaintext)
    }

    /// Forget the record for `file_name`. The ciphertext file stays on disk.
    pub fn delete_record(&self, file_name: &str) -> VaultResult<bool> {
        self.config.validate()?;
        let removed = self.store.delete_by_name(file_name)?;
        if removed {
            info!(file = %file_name, "deleted record");
        }
        Ok(removed)
    }
}

fn record_field(record: &FileRecord, field: &'static str, value: &str) -> VaultResult<RsaBigInt> {
    RsaBigInt::from_str(value.trim()).map_err(|_| VaultError::CorruptRecord {
        file_name: record.file_name.clone(),
        field,
    })
}
