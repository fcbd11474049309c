// Vault Configuration
// Command-line flags and the configuration passed to the workflow

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{VaultError, VaultResult};
use crate::rsa::PrimalityMode;

#[derive(Parser, Debug)]
#[command(name = "rsa_vault")]
#[command(version)]
#[command(about = "Encrypt and decrypt files with textbook RSA", long_about = "Encrypt and decrypt files with textbook RSA\n\nStarts an interactive menu: 1 - store, 2 - read, 3 - delete, q - quit.")]
pub struct Cli {
    /// Directory that receives encrypted files
    #[arg(long, env = "RSA_VAULT_OUTPUT_DIR", default_value = "encrypted")]
    pub output_dir: PathBuf,

    /// JSON file holding the file-to-key records
    #[arg(long, env = "RSA_VAULT_STORE", default_value = "records.json")]
    pub store: PathBuf,

    /// Primality test used when sampling prime candidates
    #[arg(long, value_enum, default_value_t = PrimalityMode::TrialDivision)]
    pub primality: PrimalityMode,
}

/// Configuration built once at startup and passed by reference
#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub output_dir: PathBuf,
    pub store_path: PathBuf,
    pub primality: PrimalityMode,
}

impl VaultConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            store_path: PathBuf::from("records.json"),
            primality: PrimalityMode::default(),
        }
    }

    pub fn with_primality(mut self, mode: PrimalityMode) -> Self {
        self.primality = mode;
        self
    }

    /// The output directory must exist before any operation proceeds.
    pub fn validate(&self) -> VaultResult<()> {
        if !self.output_dir.is_dir() {
            return Err(VaultError::ConfigInvalid(self.output_dir.clone()));
        }
        Ok(())
    }

    /// Where the ciphertext for `file_name` is written
    pub fn destination_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl From<Cli> for VaultConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output_dir: cli.output_dir,
            store_path: cli.store,
            primality: cli.primality,
        }
    }
}
