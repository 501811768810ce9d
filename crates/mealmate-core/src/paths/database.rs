//! Database path resolution.
//!
//! Provides the canonical path to the mealmate `SQLite` database file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// File name of the catalog database.
pub const DATABASE_FILE: &str = "mealmate.db";

/// Get the path to the mealmate database file.
///
/// Returns `<data root>/data/mealmate.db`, creating the `data/` directory if
/// it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Same as [`database_path`] under an explicit root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE))
}
