//! `SQLite` implementation of the `DishStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::debug;

use mealmate_core::domain::encode_allergens;
use mealmate_core::{Dish, DishQuery, DishStore, NewDish, RepositoryError, Snapshot, Tasting};

use super::row_mappers::{DISH_SELECT_COLUMNS, row_to_dish};

/// `SQLite` implementation of the `DishStore` trait.
///
/// Every committed write bumps an in-process revision counter, which is what
/// drives live queries. Build one store per pool and share it through an
/// `Arc`: writes made through another store instance are not observed.
pub struct SqliteDishRepository {
    pool: SqlitePool,
    revision: watch::Sender<u64>,
}

impl SqliteDishRepository {
    /// Create a new `SQLite` dish repository.
    pub fn new(pool: SqlitePool) -> Self {
        let (revision, _) = watch::channel(0);
        Self { pool, revision }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
        debug!(revision = *self.revision.borrow(), "Dish store revision bumped");
    }
}

fn where_clause(query: DishQuery) -> (&'static str, Option<&'static str>) {
    match query {
        DishQuery::All => ("ORDER BY date_added DESC, id DESC", None),
        DishQuery::ByCategory(category) => (
            "WHERE category = ? ORDER BY date_added DESC, id DESC",
            Some(category.tag()),
        ),
        DishQuery::ToTry => ("WHERE is_tried = 0 ORDER BY date_added DESC, id DESC", None),
        DishQuery::Tried => ("WHERE is_tried = 1 ORDER BY date_tried DESC, id DESC", None),
    }
}

#[async_trait]
impl DishStore for SqliteDishRepository {
    fn revisions(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    async fn query(&self, query: DishQuery) -> Result<Snapshot, RepositoryError> {
        // Read the revision first: a write landing mid-query yields a newer
        // revision and a follow-up snapshot.
        let revision = *self.revision.borrow();

        let (clause, bind) = where_clause(query);
        let sql = format!("SELECT {DISH_SELECT_COLUMNS} FROM dishes {clause}");

        let mut statement = sqlx::query(&sql);
        if let Some(value) = bind {
            statement = statement.bind(value);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let dishes = rows.iter().map(row_to_dish).collect::<Result<Vec<_>, _>>()?;
        Ok(Snapshot { revision, dishes })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Dish>, RepositoryError> {
        let sql = format!("SELECT {DISH_SELECT_COLUMNS} FROM dishes WHERE id = ?");

        sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .as_ref()
            .map(row_to_dish)
            .transpose()
    }

    async fn insert(&self, dish: &NewDish) -> Result<i64, RepositoryError> {
        // A NULL id lets SQLite assign one; an existing id replaces the row.
        let result = sqlx::query(
            r"INSERT OR REPLACE INTO dishes (
                id, name, description, category, restaurant, allergens, date_added
            ) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(dish.id)
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(dish.category.as_tag())
        .bind(&dish.restaurant)
        .bind(encode_allergens(&dish.allergens))
        .bind(dish.date_added.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.bump();
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, dish: &Dish) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE dishes SET name = ?, description = ?, category = ?, restaurant = ?, allergens = ? WHERE id = ?",
        )
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(dish.category.as_tag())
        .bind(&dish.restaurant)
        .bind(encode_allergens(&dish.allergens))
        .bind(dish.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Dish with ID {}",
                dish.id
            )));
        }

        self.bump();
        Ok(())
    }

    async fn delete(&self, dish: &Dish) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = ?")
            .bind(dish.id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Dish with ID {}",
                dish.id
            )));
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
        // Single statement: no read-modify-write window.
        let result = sqlx::query(
            "UPDATE dishes SET is_tried = 1, rating = ?, tasting_notes = ?, photo_path = ?, date_tried = ? WHERE id = ?",
        )
        .bind(tasting.rating)
        .bind(&tasting.notes)
        .bind(&tasting.photo_path)
        .bind(tried_at.timestamp_millis())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Dish with ID {id}")));
        }

        self.bump();
        Ok(())
    }
}
