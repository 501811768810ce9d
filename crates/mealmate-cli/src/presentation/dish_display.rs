//! Dish summary display utilities for CLI output.

use chrono::{DateTime, Local, Utc};
use mealmate_core::domain::display::status_label;
use mealmate_core::{AllergenGroup, CategoryMeta, Dish, MAX_RATING};

/// Options for displaying a dish summary.
#[derive(Debug, Clone, Default)]
pub struct DishSummaryOpts<'a> {
    /// Optional title to display before the dish details.
    pub title: Option<&'a str>,
    /// Whether to include the dish ID.
    pub show_id: bool,
    /// Whether to include the tasting section for tried dishes.
    pub show_tasting: bool,
}

impl<'a> DishSummaryOpts<'a> {
    /// Full detail view.
    pub const fn detail() -> Self {
        Self {
            title: None,
            show_id: true,
            show_tasting: true,
        }
    }

    /// Create options with a title and the default fields.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            show_id: true,
            ..Default::default()
        }
    }

    /// Options for removal confirmation.
    pub const fn for_removal() -> Self {
        Self {
            title: Some("Dish to remove:"),
            show_id: true,
            show_tasting: true,
        }
    }
}

/// Rating as `4.5/5`.
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}/{MAX_RATING:.0}")
}

fn local_date(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// `Gluten [gluten], Milk [dairy]`, or `None listed`.
fn format_allergens(allergens: &[String]) -> String {
    if allergens.is_empty() {
        return "None listed".to_string();
    }
    allergens
        .iter()
        .map(|a| format!("{a} [{}]", AllergenGroup::of(a).icon()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display a dish summary to stdout.
pub fn display_dish_summary(dish: &Dish, opts: &DishSummaryOpts<'_>) {
    if let Some(title) = opts.title {
        println!("{title}");
    }

    let meta = CategoryMeta::for_dish(&dish.category);
    if opts.show_id {
        println!("  ID:          {}", dish.id);
    }
    println!("  Name:        {}", dish.name);
    println!("  Category:    {} ({})", meta.badge, meta.chip_label);
    println!("  Restaurant:  {}", dish.restaurant);
    println!("  Status:      {}", status_label(dish));
    println!("  Description: {}", dish.description);
    println!("  Allergens:   {}", format_allergens(&dish.allergens));
    println!("  Added:       {}", local_date(dish.date_added));

    if !opts.show_tasting {
        return;
    }
    // Untried dishes never show leftover tasting fields.
    if let Some(tasting) = dish.tasting() {
        println!("  Rating:      {}", format_rating(tasting.rating));
        if tasting.notes.is_empty() {
            println!("  Notes:       No tasting notes added.");
        } else {
            println!("  Notes:       {}", tasting.notes);
        }
        if let Some(photo) = &tasting.photo_path {
            println!("  Photo:       {photo}");
        }
        if let Some(tried) = dish.date_tried {
            println!("  Tried:       {}", local_date(tried));
        }
    }
}
