//! Add command handler.

use anyhow::Result;
use mealmate_core::NewDish;

use super::dish_input::{collect_allergens, parse_category};
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub name: String,
    pub description: String,
    pub category: String,
    pub restaurant: Option<String>,
    pub allergens: Vec<String>,
}

/// Execute the add command.
///
/// Returns the new dish's ID. A blank name or description is rejected
/// before anything is written. A missing restaurant falls back to the
/// default venue.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<i64> {
    let category = parse_category(&args.category)?;
    let allergens = collect_allergens(&args.allergens)?;

    let draft = NewDish::new(args.name, args.description, category)
        .with_restaurant(args.restaurant.unwrap_or_default())
        .with_allergens(allergens);

    let id = ctx.engine().add_dish(draft).await.map_err(CliError::from)?;
    ctx.engine().refresh().await.map_err(CliError::from)?;

    if let Some(dish) = ctx.engine().select_dish(id).await.map_err(CliError::from)? {
        println!("Added '{}' at {} (ID {id}).", dish.name, dish.restaurant);
    }
    Ok(id)
}
