//! List command handler.
//!
//! Displays the engine's filtered list in a formatted table.

use anyhow::Result;
use mealmate_core::{CategoryFilter, CategoryMeta, RestaurantHeadline};

use crate::bootstrap::CliContext;
use crate::presentation::{format_rating, print_separator, truncate_string};

/// Catalog header line.
pub fn headline_text(headline: &RestaurantHeadline) -> String {
    match headline {
        RestaurantHeadline::Placeholder => "Your dish catalog".to_string(),
        RestaurantHeadline::Single(name) => name.clone(),
        RestaurantHeadline::Multiple(count) => format!("{count} restaurants"),
    }
}

/// Execute the list command.
///
/// Applies the category tag (case-insensitive) and tried flag to the
/// engine, then prints the filtered list. An unknown category lists
/// nothing.
pub fn execute(ctx: &CliContext, category: &str, tried: bool) -> Result<()> {
    let engine = ctx.engine();
    engine.set_category_tag(&category.trim().to_uppercase());
    engine.set_tried_filter(tried);

    println!("{}\n", headline_text(&engine.headline()));

    let dishes = engine.filtered();
    let status = if tried { "tried" } else { "to try" };
    let scope = match engine.category_filter() {
        CategoryFilter::All => "all categories".to_string(),
        CategoryFilter::Only(c) => CategoryMeta::of(c).chip_label.to_string(),
        CategoryFilter::Unrecognized(tag) => format!("unknown category '{tag}'"),
    };

    if dishes.is_empty() {
        println!("No dishes {status} in {scope}.");
        if !tried {
            println!("Use 'mealmate add <name> <description>' to add one.");
        }
        return Ok(());
    }

    println!("{} dish(es) {status} in {scope}:\n", dishes.len());
    let last_column = if tried { "Rating" } else { "Added" };
    println!(
        "{:<4} {:<32} {:<8} {:<28} {last_column}",
        "ID", "Name", "Category", "Restaurant"
    );
    print_separator(88);

    for dish in dishes.iter() {
        let last = dish.tasting().map_or_else(
            || dish.date_added.format("%Y-%m-%d").to_string(),
            |t| format_rating(t.rating),
        );
        println!(
            "{:<4} {:<32} {:<8} {:<28} {last}",
            dish.id,
            truncate_string(&dish.name, 31),
            CategoryMeta::for_dish(&dish.category).badge,
            truncate_string(&dish.restaurant, 27),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_text() {
        assert_eq!(
            headline_text(&RestaurantHeadline::Placeholder),
            "Your dish catalog"
        );
        assert_eq!(
            headline_text(&RestaurantHeadline::Single("Seagrass".to_string())),
            "Seagrass"
        );
        assert_eq!(
            headline_text(&RestaurantHeadline::Multiple(3)),
            "3 restaurants"
        );
    }
}
