//! Data root resolution and user path normalization.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "MEALMATE_DATA_DIR";

/// Get the root directory for application data (database, config).
///
/// Resolution order:
/// 1. `MEALMATE_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/mealmate`)
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok().as_deref())
}

/// Pure form of [`data_root`] with the override passed in explicitly.
pub fn resolve_data_root(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    // 1. Runtime override (highest priority)
    if let Some(raw) = override_dir.filter(|s| !s.trim().is_empty()) {
        return normalize_user_path(raw);
    }

    // 2. Default to system data directory
    let root = dirs::data_local_dir()
        .ok_or(PathError::NoDataDir)?
        .join("mealmate");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
