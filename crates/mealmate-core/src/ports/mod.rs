//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Live observation is expressed through `tokio::sync::watch` cells

pub mod dish_store;
pub mod event_emitter;

use thiserror::Error;

use crate::domain::DishValidationError;
use crate::paths::PathError;

pub use dish_store::{DishQuery, DishStore, LiveQuery, Snapshot};
pub use event_emitter::{CatalogEventEmitter, NoopEmitter};

#[cfg(test)]
pub use dish_store::MockDishStore;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., unique or check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A write was rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] DishValidationError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
