// this_file: fontindex/src/utils.rs
//
// Utility functions and helpers

use crate::{index::Indices, FontindexError, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolve a possibly relative path against the current directory
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Serialize a value as compact JSON, creating parent directories as needed.
///
/// Any existing file at `path` is replaced.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let path = resolve_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                FontindexError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let json = serde_json::to_string(value)?;
    fs::write(&path, json)
        .map_err(|e| FontindexError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Load an index previously written by `collect`
pub fn read_index(path: &Path) -> Result<Indices> {
    let data = fs::read_to_string(path)
        .map_err(|e| FontindexError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&data)?)
}
