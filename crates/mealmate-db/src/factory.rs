//! Composition utilities for wiring the catalog with a `SQLite` store.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use mealmate_core::CatalogRepository;

use crate::repositories::SqliteDishRepository;

/// Factory for creating store instances with `SQLite` backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:/path/to/mealmate.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create the dish store for a pool.
    pub fn dish_store(pool: SqlitePool) -> Arc<SqliteDishRepository> {
        Arc::new(SqliteDishRepository::new(pool))
    }

    /// Build the catalog repository from a pool.
    ///
    /// This is the recommended way for adapters to obtain a repository:
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let repo = StoreFactory::build_repository(pool);
    /// let engine = CatalogEngine::new(repo, emitter);
    /// ```
    pub fn build_repository(pool: SqlitePool) -> CatalogRepository {
        CatalogRepository::new(Self::dish_store(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a dish store using this test database.
    pub fn dish_store(&self) -> Arc<SqliteDishRepository> {
        StoreFactory::dish_store(self.pool.clone())
    }

    /// Create a catalog repository using this test database.
    pub fn repository(&self) -> CatalogRepository {
        StoreFactory::build_repository(self.pool.clone())
    }
}
