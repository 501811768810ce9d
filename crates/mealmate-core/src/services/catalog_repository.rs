//! Catalog repository - forwards persistence port operations.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::{Category, Dish, NewDish, Tasting};
use crate::ports::{CoreError, DishQuery, DishStore, LiveQuery, Snapshot};

/// Thin facade over the injected `DishStore`.
///
/// It adds no filtering, caching or validation: every method forwards to
/// the store under the same contract and only maps the error type. It
/// exists so the catalog engine never depends on a concrete store.
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn DishStore>,
}

impl CatalogRepository {
    /// Create a new repository over the given store.
    pub fn new(store: Arc<dyn DishStore>) -> Self {
        Self { store }
    }

    /// Live view of every dish, newest first.
    pub fn get_all(&self) -> LiveQuery {
        LiveQuery::new(Arc::clone(&self.store), DishQuery::All)
    }

    /// Live view of one category, newest first.
    pub fn get_by_category(&self, category: Category) -> LiveQuery {
        LiveQuery::new(Arc::clone(&self.store), DishQuery::ByCategory(category))
    }

    /// Live view of untried dishes, newest first.
    pub fn get_to_try(&self) -> LiveQuery {
        LiveQuery::new(Arc::clone(&self.store), DishQuery::ToTry)
    }

    /// Live view of tried dishes, most recently tried first.
    pub fn get_tried(&self) -> LiveQuery {
        LiveQuery::new(Arc::clone(&self.store), DishQuery::Tried)
    }

    /// One-shot read of a query.
    pub async fn snapshot(&self, query: DishQuery) -> Result<Snapshot, CoreError> {
        self.store.query(query).await.map_err(CoreError::from)
    }

    /// Get a dish by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Dish>, CoreError> {
        self.store.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Insert a dish and return its assigned id.
    pub async fn insert(&self, dish: &NewDish) -> Result<i64, CoreError> {
        self.store.insert(dish).await.map_err(CoreError::from)
    }

    /// Save a dish's editable fields.
    pub async fn update(&self, dish: &Dish) -> Result<(), CoreError> {
        self.store.update(dish).await.map_err(CoreError::from)
    }

    /// Delete a dish.
    pub async fn delete(&self, dish: &Dish) -> Result<(), CoreError> {
        self.store.delete(dish).await.map_err(CoreError::from)
    }

    /// Atomically mark a dish tried.
    pub async fn mark_tried(
        &self,
        id: i64,
        tasting: &Tasting,
        tried_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.store
            .mark_tried(id, tasting, tried_at)
            .await
            .map_err(CoreError::from)
    }
}
