//! Presentation metadata derived from domain values.
//!
//! Every mapping here is a total `match` so adapters never dispatch on
//! runtime strings themselves.

use std::collections::BTreeSet;

use super::category::{Category, CategoryFilter, DishCategory, OTHER_LABEL};
use super::dish::Dish;

/// Badge text, filter-chip label and icon key for one category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub badge: &'static str,
    pub chip_label: &'static str,
    pub icon: &'static str,
}

impl CategoryMeta {
    pub const fn of(category: Category) -> Self {
        match category {
            Category::Starter => Self {
                badge: "STARTER",
                chip_label: "Starters",
                icon: "starters",
            },
            Category::Main => Self {
                badge: "MAIN",
                chip_label: "Main Courses",
                icon: "main",
            },
            Category::Dessert => Self {
                badge: "DESSERT",
                chip_label: "Desserts",
                icon: "dessert",
            },
            Category::Side => Self {
                badge: "SIDE",
                chip_label: "Sides",
                icon: "side",
            },
            Category::Lunch => Self {
                badge: "LUNCH",
                chip_label: "Lunch",
                icon: "lunch",
            },
        }
    }

    /// Bucket used for tags outside the recognized set.
    pub const OTHER: Self = Self {
        badge: OTHER_LABEL,
        chip_label: "Other",
        icon: "main",
    };

    /// Metadata for a stored category, falling back to [`CategoryMeta::OTHER`].
    pub fn for_dish(category: &DishCategory) -> Self {
        category.known().map_or(Self::OTHER, Self::of)
    }
}

/// Filter chips in display order, starting with "All Dishes".
pub fn filter_chips() -> Vec<(CategoryFilter, &'static str)> {
    std::iter::once((CategoryFilter::All, "All Dishes"))
        .chain(
            Category::ALL
                .into_iter()
                .map(|c| (CategoryFilter::Only(c), CategoryMeta::of(c).chip_label)),
        )
        .collect()
}

/// Lifecycle label shown on a dish.
pub const fn status_label(dish: &Dish) -> &'static str {
    if dish.is_tried { "TRIED" } else { "TO TRY" }
}

/// One line of the search dropdown: `"<name> • <restaurant>"`.
pub fn suggestion_line(dish: &Dish) -> String {
    format!("{} \u{2022} {}", dish.name, dish.restaurant)
}

/// Catalog headline summarizing which venues the collection covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantHeadline {
    /// No dishes, or no dish names a venue.
    Placeholder,
    /// Every dish comes from this venue.
    Single(String),
    /// Number of distinct venues.
    Multiple(usize),
}

impl RestaurantHeadline {
    pub fn from_dishes(dishes: &[Dish]) -> Self {
        let venues: BTreeSet<&str> = dishes
            .iter()
            .map(|d| d.restaurant.trim())
            .filter(|r| !r.is_empty())
            .collect();

        match venues.len() {
            0 => Self::Placeholder,
            1 => venues
                .into_iter()
                .next()
                .map_or(Self::Placeholder, |v| Self::Single(v.to_string())),
            n => Self::Multiple(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewDish;

    fn dish_at(restaurant: &str) -> Dish {
        NewDish::new("n", "d", Category::Main)
            .with_restaurant(restaurant)
            .into_dish(1)
    }

    #[test]
    fn test_unrecognized_category_uses_other_bucket() {
        let meta = CategoryMeta::for_dish(&DishCategory::from_tag("BRUNCH"));
        assert_eq!(meta.badge, "OTHER");
        assert_eq!(
            CategoryMeta::for_dish(&Category::Dessert.into()).badge,
            "DESSERT"
        );
    }

    #[test]
    fn test_filter_chips_order() {
        let chips = filter_chips();
        assert_eq!(chips.len(), 6);
        assert_eq!(chips[0], (CategoryFilter::All, "All Dishes"));
        assert_eq!(chips[2], (CategoryFilter::Only(Category::Main), "Main Courses"));
    }

    #[test]
    fn test_suggestion_line() {
        let dish = dish_at("Harbour Grill");
        assert_eq!(suggestion_line(&dish), "n \u{2022} Harbour Grill");
    }

    #[test]
    fn test_restaurant_headline() {
        assert_eq!(
            RestaurantHeadline::from_dishes(&[]),
            RestaurantHeadline::Placeholder
        );
        assert_eq!(
            RestaurantHeadline::from_dishes(&[dish_at("A"), dish_at("A"), dish_at("  ")]),
            RestaurantHeadline::Single("A".to_string())
        );
        assert_eq!(
            RestaurantHeadline::from_dishes(&[dish_at("A"), dish_at("B")]),
            RestaurantHeadline::Multiple(2)
        );
    }
}
