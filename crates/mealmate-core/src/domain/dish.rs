//! Dish domain types.
//!
//! A dish is a whole-value, replace-on-write record: edits produce a new
//! complete `Dish` sharing the same `id`. Use `NewDish` for drafts that have
//! not been persisted yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::DishCategory;

/// Venue used when a dish is saved without a restaurant.
pub const DEFAULT_RESTAURANT: &str = "Seagrass Boutique Hospitality";

/// Highest rating a tried dish can carry.
pub const MAX_RATING: f32 = 5.0;

/// Current time truncated to millisecond precision, which is what storage
/// keeps.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Reasons a dish write is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DishValidationError {
    #[error("Dish name is required")]
    MissingName,

    #[error("Description is required")]
    MissingDescription,

    #[error("Allergen name is required")]
    MissingAllergen,

    #[error("Rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted record
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Storage-assigned identity; stable across edits.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub restaurant: String,
    /// Ordered allergen labels.
    pub allergens: Vec<String>,
    pub is_tried: bool,
    /// 0..=5; only meaningful once tried.
    pub rating: f32,
    /// Only meaningful once tried.
    pub tasting_notes: String,
    /// Only meaningful once tried.
    pub photo_path: Option<String>,
    /// Set once at creation.
    pub date_added: DateTime<Utc>,
    /// Set when the dish is marked tried.
    pub date_tried: Option<DateTime<Utc>>,
}

/// Rating, notes and photo recorded when a dish is marked tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tasting {
    pub rating: f32,
    pub notes: String,
    pub photo_path: Option<String>,
}

impl Tasting {
    /// Build a tasting, trimming the notes and dropping a blank photo path.
    pub fn new(rating: f32, notes: impl Into<String>, photo_path: Option<String>) -> Self {
        Self {
            rating,
            notes: notes.into().trim().to_string(),
            photo_path: photo_path.filter(|p| !p.trim().is_empty()),
        }
    }

    /// Check the rating bounds.
    pub fn validate(&self) -> Result<(), DishValidationError> {
        if self.rating.is_finite() && (0.0..=MAX_RATING).contains(&self.rating) {
            Ok(())
        } else {
            Err(DishValidationError::RatingOutOfRange(self.rating.to_string()))
        }
    }
}

impl Dish {
    /// Tasting details, present only for tried dishes.
    ///
    /// Presentation code should go through this accessor so that stale
    /// rating/notes on an untried dish are never shown.
    pub fn tasting(&self) -> Option<Tasting> {
        self.is_tried.then(|| Tasting {
            rating: self.rating,
            notes: self.tasting_notes.clone(),
            photo_path: self.photo_path.clone(),
        })
    }

    /// Whether `needle` (already lower-cased) occurs in the name,
    /// description, restaurant or any allergen label.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.restaurant.to_lowercase().contains(needle)
            || self
                .allergens
                .iter()
                .any(|a| a.to_lowercase().contains(needle))
    }

    /// Apply user edits, preserving id, status and timestamps.
    ///
    /// The result is validated and normalized the same way a new draft is.
    pub fn edited(&self, edit: DishEdit) -> Result<Self, DishValidationError> {
        let mut dish = self.clone();
        if let Some(name) = edit.name {
            dish.name = name;
        }
        if let Some(description) = edit.description {
            dish.description = description;
        }
        if let Some(category) = edit.category {
            dish.category = category;
        }
        if let Some(restaurant) = edit.restaurant {
            dish.restaurant = restaurant;
        }
        if let Some(allergens) = edit.allergens {
            dish.allergens = allergens;
        }
        dish.normalize()?;
        Ok(dish)
    }

    /// Trim text fields, default the restaurant, and reject blank required
    /// fields.
    pub fn normalize(&mut self) -> Result<(), DishValidationError> {
        normalize_text_fields(&mut self.name, &mut self.description, &mut self.restaurant)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Drafts and edits
// ─────────────────────────────────────────────────────────────────────────────

/// A dish to be inserted (always untried).
///
/// `id` is normally `None` and storage assigns one. With an explicit id the
/// insert replaces any record already holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub restaurant: String,
    pub allergens: Vec<String>,
    pub date_added: DateTime<Utc>,
}

impl NewDish {
    /// Create a draft at the default restaurant, stamped now.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<DishCategory>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            restaurant: DEFAULT_RESTAURANT.to_string(),
            allergens: Vec::new(),
            date_added: now_millis(),
        }
    }

    /// Insert under a fixed id, replacing whatever holds it.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_restaurant(mut self, restaurant: impl Into<String>) -> Self {
        self.restaurant = restaurant.into();
        self
    }

    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Trim text fields, default the restaurant, and reject blank required
    /// fields.
    pub fn normalize(&mut self) -> Result<(), DishValidationError> {
        normalize_text_fields(&mut self.name, &mut self.description, &mut self.restaurant)
    }

    /// The record storage would hold for this draft under `id`.
    pub fn into_dish(self, id: i64) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            restaurant: self.restaurant,
            allergens: self.allergens,
            is_tried: false,
            rating: 0.0,
            tasting_notes: String::new(),
            photo_path: None,
            date_added: self.date_added,
            date_tried: None,
        }
    }
}

/// Field-level edits collected from a form. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<DishCategory>,
    pub restaurant: Option<String>,
    pub allergens: Option<Vec<String>>,
}

fn normalize_text_fields(
    name: &mut String,
    description: &mut String,
    restaurant: &mut String,
) -> Result<(), DishValidationError> {
    *name = name.trim().to_string();
    *description = description.trim().to_string();
    *restaurant = restaurant.trim().to_string();

    if name.is_empty() {
        return Err(DishValidationError::MissingName);
    }
    if description.is_empty() {
        return Err(DishValidationError::MissingDescription);
    }
    if restaurant.is_empty() {
        *restaurant = DEFAULT_RESTAURANT.to_string();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn sample() -> Dish {
        NewDish::new("Lamb Skewer", "Marinated lamb backstrap", Category::Main)
            .with_allergens(["Gluten", "Milk"])
            .into_dish(7)
    }

    #[test]
    fn test_new_dish_defaults() {
        let draft = NewDish::new("Pavlova", "Crisp meringue", Category::Dessert);
        assert_eq!(draft.restaurant, DEFAULT_RESTAURANT);
        assert!(draft.allergens.is_empty());

        let dish = draft.into_dish(3);
        assert_eq!(dish.id, 3);
        assert!(!dish.is_tried);
        assert!(dish.date_tried.is_none());
    }

    #[test]
    fn test_normalize_rejects_blank_required_fields() {
        let mut draft = NewDish::new("   ", "desc", Category::Main);
        assert_eq!(draft.normalize(), Err(DishValidationError::MissingName));

        let mut draft = NewDish::new("Name", "\t", Category::Main);
        assert_eq!(
            draft.normalize(),
            Err(DishValidationError::MissingDescription)
        );
    }

    #[test]
    fn test_normalize_defaults_blank_restaurant() {
        let mut draft = NewDish::new(" Fondant ", " Warm ", Category::Dessert).with_restaurant(" ");
        draft.normalize().unwrap();
        assert_eq!(draft.name, "Fondant");
        assert_eq!(draft.description, "Warm");
        assert_eq!(draft.restaurant, DEFAULT_RESTAURANT);
    }

    #[test]
    fn test_tasting_hidden_until_tried() {
        let mut dish = sample();
        dish.rating = 3.0;
        dish.tasting_notes = "leftover".to_string();
        assert!(dish.tasting().is_none());

        dish.is_tried = true;
        assert_eq!(dish.tasting().unwrap().notes, "leftover");
    }

    #[test]
    fn test_tasting_validation() {
        assert!(Tasting::new(0.0, "", None).validate().is_ok());
        assert!(Tasting::new(4.5, "", None).validate().is_ok());
        assert!(Tasting::new(5.5, "", None).validate().is_err());
        assert!(Tasting::new(f32::NAN, "", None).validate().is_err());
        assert!(Tasting::new(1.0, "", Some("  ".into())).photo_path.is_none());
    }

    #[test]
    fn test_edited_preserves_identity_and_status() {
        let mut dish = sample();
        dish.is_tried = true;
        dish.date_tried = Some(now_millis());

        let edited = dish
            .edited(DishEdit {
                name: Some("Lamb Skewer v2".into()),
                category: Some(Category::Lunch.into()),
                ..DishEdit::default()
            })
            .unwrap();

        assert_eq!(edited.id, dish.id);
        assert_eq!(edited.name, "Lamb Skewer v2");
        assert_eq!(edited.category, Category::Lunch.into());
        assert!(edited.is_tried);
        assert_eq!(edited.date_added, dish.date_added);
        assert_eq!(edited.date_tried, dish.date_tried);
        assert_eq!(edited.allergens, dish.allergens);
    }

    #[test]
    fn test_edited_rejects_blank_name() {
        let result = sample().edited(DishEdit {
            name: Some(String::new()),
            ..DishEdit::default()
        });
        assert_eq!(result, Err(DishValidationError::MissingName));
    }

    #[test]
    fn test_contains_lowercase_searches_all_text_fields() {
        let dish = sample();
        assert!(dish.contains_lowercase("lamb"));
        assert!(dish.contains_lowercase("backstrap"));
        assert!(dish.contains_lowercase("seagrass"));
        assert!(dish.contains_lowercase("mil"));
        assert!(!dish.contains_lowercase("fish"));
    }
}
