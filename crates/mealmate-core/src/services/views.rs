//! Pure derivations behind the catalog engine's outputs.
//!
//! Both functions are total and order-preserving: they only ever drop
//! records from the input sequence.

use crate::domain::{CategoryFilter, Dish};

/// Dishes passing both the category and the tried-status criteria.
pub fn filter_dishes(dishes: &[Dish], category: &CategoryFilter, tried: bool) -> Vec<Dish> {
    dishes
        .iter()
        .filter(|d| category.matches(&d.category) && d.is_tried == tried)
        .cloned()
        .collect()
}

/// Dishes whose name, description, restaurant or allergens contain `query`,
/// ignoring case. A blank query matches nothing.
pub fn search_dishes(dishes: &[Dish], query: &str) -> Vec<Dish> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    dishes
        .iter()
        .filter(|d| d.contains_lowercase(&needle))
        .cloned()
        .collect()
}
