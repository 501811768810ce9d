//! Path utilities for mealmate data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path, resolve_data_root};
