use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rsa_vault::{Cli, FileCryptoWorkflow, JsonRecordStore, VaultConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = VaultConfig::from(Cli::parse());
    if let Err(e) = config.validate() {
        // Not fatal: every command re-checks and reports it
        tracing::warn!("{}", e);
    }

    let store = JsonRecordStore::open(&config.store_path);
    let workflow = FileCryptoWorkflow::new(&config, &store);

    let stdin = io::stdin();
    rsa_vault::ui::run_menu(&workflow, stdin.lock(), io::stdout().lock())
        .context("menu I/O failed")
}
