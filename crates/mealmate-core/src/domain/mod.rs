//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `dish` - Dish records, drafts and edits
//! - `category` - Category tags and filters
//! - `allergens` - Allergen labels and their text encoding
//! - `display` - Presentation metadata (badges, chips, headlines)

pub mod allergens;
pub mod category;
pub mod display;
mod dish;

pub use allergens::{
    AllergenGroup, DEFAULT_ALLERGENS, add_allergen, decode_allergens, encode_allergens,
    normalize_allergen,
};
pub use category::{Category, CategoryFilter, DishCategory};
pub use display::{CategoryMeta, RestaurantHeadline};
pub use dish::{
    DEFAULT_RESTAURANT, Dish, DishEdit, DishValidationError, MAX_RATING, NewDish, Tasting,
    now_millis,
};
