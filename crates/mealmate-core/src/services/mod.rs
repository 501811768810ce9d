//! Core services - the catalog's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They never know about concrete store implementations.

mod catalog_engine;
mod catalog_repository;
mod seed;
mod views;

pub use catalog_engine::{CatalogEngine, DishList};
pub use catalog_repository::CatalogRepository;
pub use seed::{sample_dishes, seed, seed_if_empty};
pub use views::{filter_dishes, search_dishes};
