// File Operations for RSA Encryption/Decryption
// Reading plaintext and ciphertext files and writing ciphertext output

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{VaultError, VaultResult};

/// Read an entire file as UTF-8 text
pub fn read_file_text(path: &Path) -> VaultResult<String> {
    let mut file = File::open(path).map_err(|e| VaultError::io(path, e))?;
    let mut data = String::new();
    file.read_to_string(&mut data)
        .map_err(|e| VaultError::io(path, e))?;
    Ok(data)
}

/// Write text to a file, replacing any existing content
///
/// Not atomic: a crash mid-write leaves a partial file.
pub fn write_file_text(path: &Path, data: &str) -> VaultResult<()> {
    let mut file = File::create(path).map_err(|e| VaultError::io(path, e))?;
    file.write_all(data.as_bytes())
        .map_err(|e| VaultError::io(path, e))?;
    Ok(())
}

/// Final path component as a string, or the whole input if there is none
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Format file size for display
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
