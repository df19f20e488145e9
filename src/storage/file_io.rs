//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave a partial file behind on
//! failure: data goes to a sibling temp file which is renamed into place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FinModelError;

/// Temp file used while writing `path` (same directory, `.tmp` appended)
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), FinModelError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinModelError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = write_and_sync(&temp_path, bytes).and_then(|_| {
        fs::rename(&temp_path, path).map_err(|e| {
            FinModelError::Io(format!(
                "Failed to move temp file into {}: {}",
                path.display(),
                e
            ))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_and_sync(temp_path: &Path, bytes: &[u8]) -> Result<(), FinModelError> {
    let file = File::create(temp_path).map_err(|e| {
        FinModelError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| FinModelError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinModelError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinModelError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// Write pretty-printed JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinModelError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| FinModelError::Json(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &bytes)
}

/// Write YAML to a file atomically
pub fn write_yaml_atomic<T, P>(path: P, data: &T) -> Result<(), FinModelError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let text = serde_yaml::to_string(data)
        .map_err(|e| FinModelError::Yaml(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, text.as_bytes())
}
