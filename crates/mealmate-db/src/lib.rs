//! `SQLite` persistence for mealmate.
//!
//! Implements the `DishStore` port from `mealmate-core` and owns the
//! database schema. Nothing outside this crate sees a `sqlx` type except
//! the pool handed back by [`setup_database`].
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqliteDishRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
