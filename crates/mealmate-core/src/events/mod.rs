//! Catalog events emitted after successful writes.
//!
//! Adapters forward these to whatever transport they use. The engine's
//! derived views do not depend on them: views only change when a snapshot
//! arrives.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "dish_tried", "dishId": 4, "rating": 4.5 }
//! ```

use serde::{Deserialize, Serialize};

/// Canonical catalog events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// A dish was added to the catalog.
    DishAdded {
        #[serde(rename = "dishId")]
        dish_id: i64,
        name: String,
    },

    /// A dish's descriptive fields were replaced.
    DishUpdated {
        #[serde(rename = "dishId")]
        dish_id: i64,
    },

    /// A dish was deleted.
    DishRemoved {
        #[serde(rename = "dishId")]
        dish_id: i64,
    },

    /// A dish was marked tried (or its tasting was overwritten).
    DishTried {
        #[serde(rename = "dishId")]
        dish_id: i64,
        rating: f32,
    },

    /// Sample dishes were inserted into an empty catalog.
    CatalogSeeded { count: usize },
}

impl CatalogEvent {
    pub fn dish_added(dish_id: i64, name: impl Into<String>) -> Self {
        Self::DishAdded {
            dish_id,
            name: name.into(),
        }
    }

    pub const fn dish_updated(dish_id: i64) -> Self {
        Self::DishUpdated { dish_id }
    }

    pub const fn dish_removed(dish_id: i64) -> Self {
        Self::DishRemoved { dish_id }
    }

    pub const fn dish_tried(dish_id: i64, rating: f32) -> Self {
        Self::DishTried { dish_id, rating }
    }

    /// Short name used in logs.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::DishAdded { .. } => "dish_added",
            Self::DishUpdated { .. } => "dish_updated",
            Self::DishRemoved { .. } => "dish_removed",
            Self::DishTried { .. } => "dish_tried",
            Self::CatalogSeeded { .. } => "catalog_seeded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_type_tag() {
        let json = serde_json::to_value(CatalogEvent::dish_tried(4, 4.5)).unwrap();
        assert_eq!(json["type"], "dish_tried");
        assert_eq!(json["dishId"], 4);
        assert_eq!(json["rating"], 4.5);
    }

    #[test]
    fn test_round_trip() {
        let event = CatalogEvent::dish_added(2, "Pavlova");
        let json = serde_json::to_string(&event).unwrap();
        let back: CatalogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.event_name(), "dish_added");
    }
}
