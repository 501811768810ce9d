//! Domain types, persistence ports and the reactive catalog engine behind
//! mealmate, a personal catalog of restaurant dishes to try.
//!
//! Concrete storage lives in `mealmate-db`; this crate only defines the
//! `DishStore` port it expects.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    AllergenGroup, Category, CategoryFilter, CategoryMeta, DEFAULT_ALLERGENS, DEFAULT_RESTAURANT,
    Dish, DishCategory, DishEdit, DishValidationError, MAX_RATING, NewDish, RestaurantHeadline,
    Tasting,
};
pub use events::CatalogEvent;
pub use ports::{
    CatalogEventEmitter, CoreError, DishQuery, DishStore, LiveQuery, NoopEmitter,
    RepositoryError, Snapshot,
};
pub use services::{CatalogEngine, CatalogRepository, DishList, seed_if_empty};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
