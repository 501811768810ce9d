//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms. Filtering and
//! searching belong to the catalog engine.

pub mod dish_display;
pub mod tables;

// Re-export commonly used items
pub use dish_display::{DishSummaryOpts, display_dish_summary, format_rating};
pub use tables::{format_optional, print_separator, truncate_string};
