//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{DishSummaryOpts, display_dish_summary};
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the dish and asks for confirmation unless `force` is set.
pub async fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    let engine = ctx.engine();
    let dish = engine
        .select_dish(id)
        .await
        .map_err(CliError::from)?
        .ok_or(CliError::NotFound(id))?;

    if !force {
        display_dish_summary(&dish, &DishSummaryOpts::for_removal());
        println!();

        if !input::prompt_confirmation("Remove this dish from your catalog?")? {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    if !engine.delete_dish(&dish).await.map_err(CliError::from)? {
        return Err(CliError::NotFound(id).into());
    }

    println!("Removed '{}' (ID {id}).", dish.name);
    Ok(())
}
