//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use mealmate_core::domain::decode_allergens;
use mealmate_core::{Dish, DishCategory, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for dish queries.
pub const DISH_SELECT_COLUMNS: &str = "id, name, description, category, restaurant, allergens, is_tried, rating, tasting_notes, photo_path, date_added, date_tried";

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Convert a stored millisecond timestamp.
pub fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid timestamp: {millis}")))
}

/// Parse a database row into a `Dish`.
pub fn row_to_dish(row: &SqliteRow) -> Result<Dish, RepositoryError> {
    let category: String = row.try_get("category").map_err(storage)?;
    let allergens_json: String = row.try_get("allergens").map_err(storage)?;
    let date_added: i64 = row.try_get("date_added").map_err(storage)?;
    let date_tried: Option<i64> = row.try_get("date_tried").map_err(storage)?;

    Ok(Dish {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        description: row.try_get("description").map_err(storage)?,
        category: DishCategory::from_tag(&category),
        restaurant: row.try_get("restaurant").map_err(storage)?,
        allergens: decode_allergens(&allergens_json),
        is_tried: row.try_get("is_tried").map_err(storage)?,
        rating: row.try_get("rating").map_err(storage)?,
        tasting_notes: row.try_get("tasting_notes").map_err(storage)?,
        photo_path: row.try_get("photo_path").map_err(storage)?,
        date_added: millis_to_datetime(date_added)?,
        date_tried: date_tried.map(millis_to_datetime).transpose()?,
    })
}
