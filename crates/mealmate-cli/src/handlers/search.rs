//! Search command handler.

use anyhow::Result;
use mealmate_core::domain::display::suggestion_line;

use crate::bootstrap::CliContext;
use crate::presentation::{DishSummaryOpts, display_dish_summary};

/// Execute the search command.
///
/// Searches every dish regardless of category or tried status. With
/// `first`, opens the first match in full instead of listing suggestions.
pub fn execute(ctx: &CliContext, query: &str, first: bool) -> Result<()> {
    let engine = ctx.engine();
    engine.set_search_query(query);

    if first {
        match engine.first_suggestion() {
            Some(dish) => display_dish_summary(&dish, &DishSummaryOpts::detail()),
            None => println!("No dishes match '{query}'."),
        }
        return Ok(());
    }

    let suggestions = engine.suggestions();
    if suggestions.is_empty() {
        println!("No dishes match '{query}'.");
        return Ok(());
    }

    for dish in suggestions.iter() {
        println!("{:>4}  {}", dish.id, suggestion_line(dish));
    }
    Ok(())
}
