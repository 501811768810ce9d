//! Edit command handler.

use anyhow::Result;
use mealmate_core::{DishCategory, DishEdit};

use super::dish_input::{collect_allergens, parse_category};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{DishSummaryOpts, display_dish_summary};

/// Arguments for the edit command. `None`/empty keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub restaurant: Option<String>,
    pub allergens: Vec<String>,
    pub clear_allergens: bool,
}

impl EditArgs {
    fn to_edit(&self) -> Result<DishEdit, CliError> {
        let category = self
            .category
            .as_deref()
            .map(parse_category)
            .transpose()?
            .map(DishCategory::from);

        let allergens = if self.clear_allergens {
            Some(Vec::new())
        } else if self.allergens.is_empty() {
            None
        } else {
            Some(collect_allergens(&self.allergens)?)
        };

        Ok(DishEdit {
            name: self.name.clone(),
            description: self.description.clone(),
            category,
            restaurant: self.restaurant.clone(),
            allergens,
        })
    }
}

/// Execute the edit command.
///
/// Only descriptive fields change; tried status, tasting and timestamps are
/// kept as they are.
pub async fn execute(ctx: &CliContext, args: EditArgs) -> Result<()> {
    let edit = args.to_edit()?;
    if edit == DishEdit::default() {
        println!("Nothing to change. Pass at least one field to edit.");
        return Ok(());
    }

    let engine = ctx.engine();
    let current = engine
        .select_dish(args.id)
        .await
        .map_err(CliError::from)?
        .ok_or(CliError::NotFound(args.id))?;

    let edited = current.edited(edit).map_err(CliError::from)?;
    if !engine.update_dish(edited).await.map_err(CliError::from)? {
        return Err(CliError::NotFound(args.id).into());
    }

    engine.refresh().await.map_err(CliError::from)?;
    if let Some(dish) = engine.selected() {
        display_dish_summary(&dish, &DishSummaryOpts::with_title("Dish updated:"));
    }
    Ok(())
}
