//! Persistence port for dish records.
//!
//! This port defines the interface the catalog expects from durable storage.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;

use super::RepositoryError;
use crate::domain::{Category, Dish, NewDish, Tasting};

/// Which slice of the collection a query returns.
///
/// Every variant orders by `date_added` descending except `Tried`, which
/// orders by `date_tried` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishQuery {
    All,
    ByCategory(Category),
    ToTry,
    Tried,
}

impl DishQuery {
    /// Whether a dish belongs to this slice.
    pub fn includes(&self, dish: &Dish) -> bool {
        match self {
            Self::All => true,
            Self::ByCategory(category) => dish.category.known() == Some(*category),
            Self::ToTry => !dish.is_tried,
            Self::Tried => dish.is_tried,
        }
    }
}

/// A full, ordered query result tagged with the store revision it was read at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Store revision observed before the rows were read.
    pub revision: u64,
    pub dishes: Vec<Dish>,
}

/// Durable storage for dishes.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Every committed write bumps the revision cell returned by `revisions()`
/// - `mark_tried` is a single atomic write, never a read-modify-write
/// - Filtering for presentation belongs in the catalog engine, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishStore: Send + Sync {
    /// Change notification cell. The value is a monotonically increasing
    /// revision counter.
    fn revisions(&self) -> watch::Receiver<u64>;

    /// Run a query against the current contents.
    async fn query(&self, query: DishQuery) -> Result<Snapshot, RepositoryError>;

    /// Point lookup. An absent id is `Ok(None)`.
    async fn get_by_id(&self, id: i64) -> Result<Option<Dish>, RepositoryError>;

    /// Persist a new dish and return its id.
    ///
    /// A draft carrying an id that already exists replaces that record
    /// wholesale, tasting included.
    async fn insert(&self, dish: &NewDish) -> Result<i64, RepositoryError>;

    /// Save the editable fields (name, description, category, restaurant,
    /// allergens) of the record with the same id. Tried status, tasting
    /// fields and timestamps are left as stored.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the id doesn't exist.
    async fn update(&self, dish: &Dish) -> Result<(), RepositoryError>;

    /// Delete the record with the dish's id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the id doesn't exist.
    async fn delete(&self, dish: &Dish) -> Result<(), RepositoryError>;

    /// Atomically mark a dish tried, overwriting rating, notes, photo and
    /// tried timestamp.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the id doesn't exist.
    async fn mark_tried(
        &self,
        id: i64,
        tasting: &Tasting,
        tried_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}

/// A query that re-runs every time the store commits a write.
///
/// The first call to [`LiveQuery::next`] yields the current result
/// immediately; later calls wait for the next revision.
pub struct LiveQuery {
    store: Arc<dyn DishStore>,
    query: DishQuery,
    revisions: watch::Receiver<u64>,
    primed: bool,
}

impl LiveQuery {
    pub fn new(store: Arc<dyn DishStore>, query: DishQuery) -> Self {
        let revisions = store.revisions();
        Self {
            store,
            query,
            revisions,
            primed: false,
        }
    }

    pub const fn query(&self) -> DishQuery {
        self.query
    }

    /// Wait for the next result. Returns `None` once the store has shut
    /// down its revision cell.
    pub async fn next(&mut self) -> Option<Result<Snapshot, RepositoryError>> {
        if self.primed {
            self.revisions.changed().await.ok()?;
        } else {
            self.primed = true;
        }
        self.revisions.borrow_and_update();
        Some(self.store.query(self.query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_query_includes() {
        let mut dish = NewDish::new("a", "b", Category::Side).into_dish(1);
        assert!(DishQuery::All.includes(&dish));
        assert!(DishQuery::ByCategory(Category::Side).includes(&dish));
        assert!(!DishQuery::ByCategory(Category::Main).includes(&dish));
        assert!(DishQuery::ToTry.includes(&dish));

        dish.is_tried = true;
        assert!(DishQuery::Tried.includes(&dish));
        assert!(!DishQuery::ToTry.includes(&dish));
    }

    #[tokio::test]
    async fn test_live_query_emits_then_waits_for_revision() {
        let (tx, rx) = watch::channel(0_u64);
        let mut store = MockDishStore::new();
        store.expect_revisions().return_const(rx);
        store
            .expect_query()
            .returning(|_| Ok(Snapshot::default()));

        let mut live = LiveQuery::new(Arc::new(store), DishQuery::All);
        assert!(live.next().await.unwrap().is_ok());

        tx.send_replace(1);
        let snapshot = live.next().await.unwrap().unwrap();
        assert!(snapshot.dishes.is_empty());
    }

    #[tokio::test]
    async fn test_live_query_ends_when_store_closes() {
        let (tx, rx) = watch::channel(0_u64);
        let mut store = MockDishStore::new();
        store.expect_revisions().return_const(rx);
        store
            .expect_query()
            .returning(|_| Ok(Snapshot::default()));

        let mut live = LiveQuery::new(Arc::new(store), DishQuery::Tried);
        assert!(live.next().await.is_some());
        drop(tx);
        assert!(live.next().await.is_none());
    }
}
