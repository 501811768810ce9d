//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{DishSummaryOpts, display_dish_summary};

/// Execute the show command: select the dish and print every detail.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let dish = ctx
        .engine()
        .select_dish(id)
        .await
        .map_err(CliError::from)?
        .ok_or(CliError::NotFound(id))?;

    display_dish_summary(&dish, &DishSummaryOpts::detail());
    Ok(())
}
