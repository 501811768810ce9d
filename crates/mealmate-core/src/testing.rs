//! In-memory `DishStore` for tests and embedding hosts without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

use crate::domain::{Dish, NewDish, Tasting};
use crate::ports::{DishQuery, DishStore, RepositoryError, Snapshot};

#[derive(Default)]
struct Inner {
    next_id: i64,
    dishes: Vec<Dish>,
}

/// A `DishStore` keeping every record in a `Vec` behind a mutex.
///
/// Ordering and not-found behavior match the `SQLite` store.
pub struct InMemoryDishStore {
    inner: Mutex<Inner>,
    revision: watch::Sender<u64>,
}

impl Default for InMemoryDishStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDishStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                dishes: Vec::new(),
            }),
            revision,
        }
    }

    /// Store pre-populated with complete records, ids included.
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.next_id = dishes.iter().map(|d| d.id).max().unwrap_or(0) + 1;
            inner.dishes = dishes;
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

fn sort_for(query: DishQuery, dishes: &mut [Dish]) {
    match query {
        DishQuery::Tried => dishes.sort_by(|a, b| b.date_tried.cmp(&a.date_tried)),
        _ => dishes.sort_by(|a, b| b.date_added.cmp(&a.date_added).then(b.id.cmp(&a.id))),
    }
}

#[async_trait]
impl DishStore for InMemoryDishStore {
    fn revisions(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    async fn query(&self, query: DishQuery) -> Result<Snapshot, RepositoryError> {
        let revision = *self.revision.borrow();
        let mut dishes: Vec<Dish> = self
            .lock()
            .dishes
            .iter()
            .filter(|d| query.includes(d))
            .cloned()
            .collect();
        sort_for(query, &mut dishes);
        Ok(Snapshot { revision, dishes })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Dish>, RepositoryError> {
        Ok(self.lock().dishes.iter().find(|d| d.id == id).cloned())
    }

    async fn insert(&self, dish: &NewDish) -> Result<i64, RepositoryError> {
        let id = {
            let mut inner = self.lock();
            let id = dish.id.unwrap_or(inner.next_id);
            inner.next_id = inner.next_id.max(id + 1);
            inner.dishes.retain(|d| d.id != id);
            inner.dishes.push(dish.clone().into_dish(id));
            id
        };
        self.bump();
        Ok(id)
    }

    async fn update(&self, dish: &Dish) -> Result<(), RepositoryError> {
        {
            let mut inner = self.lock();
            let slot = inner
                .dishes
                .iter_mut()
                .find(|d| d.id == dish.id)
                .ok_or_else(|| RepositoryError::NotFound(format!("Dish with ID {}", dish.id)))?;
            slot.name.clone_from(&dish.name);
            slot.description.clone_from(&dish.description);
            slot.category = dish.category.clone();
            slot.restaurant.clone_from(&dish.restaurant);
            slot.allergens.clone_from(&dish.allergens);
        }
        self.bump();
        Ok(())
    }

    async fn delete(&self, dish: &Dish) -> Result<(), RepositoryError> {
        {
            let mut inner = self.lock();
            let before = inner.dishes.len();
            inner.dishes.retain(|d| d.id != dish.id);
            if inner.dishes.len() == before {
                return Err(RepositoryError::NotFound(format!("Dish with ID {}", dish.id)));
            }
        }
        self.bump();
        Ok(())
    }

    async fn mark_tried(
        &self,
        id: i64,
        tasting: &Tasting,
        tried_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        {
            let mut inner = self.lock();
            let dish = inner
                .dishes
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| RepositoryError::NotFound(format!("Dish with ID {id}")))?;
            dish.is_tried = true;
            dish.rating = tasting.rating;
            dish.tasting_notes.clone_from(&tasting.notes);
            dish.photo_path.clone_from(&tasting.photo_path);
            dish.date_tried = Some(tried_at);
        }
        self.bump();
        Ok(())
    }
}
