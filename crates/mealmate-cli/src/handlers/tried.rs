//! Tried command handler.

use anyhow::Result;
use mealmate_core::Tasting;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_rating;

/// Execute the tried command.
///
/// Records (or overwrites) the tasting for a dish. Ratings outside 0..=5
/// are rejected without touching the catalog.
pub async fn execute(
    ctx: &CliContext,
    id: i64,
    rating: f32,
    notes: &str,
    photo: Option<String>,
) -> Result<()> {
    let engine = ctx.engine();
    let tasting = Tasting::new(rating, notes, photo);

    if !engine
        .mark_tried(id, tasting)
        .await
        .map_err(CliError::from)?
    {
        return Err(CliError::NotFound(id).into());
    }

    let dish = engine
        .select_dish(id)
        .await
        .map_err(CliError::from)?
        .ok_or(CliError::NotFound(id))?;
    println!("Marked '{}' as tried ({}).", dish.name, format_rating(dish.rating));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use mealmate_core::testing::InMemoryDishStore;
    use mealmate_core::{CatalogRepository, Category, CategoryFilter, NewDish, NoopEmitter};
    use std::sync::Arc;

    async fn ctx_with(names: &[&str]) -> (CliContext, Vec<i64>) {
        let repo = CatalogRepository::new(Arc::new(InMemoryDishStore::new()));
        let mut ids = Vec::new();
        for name in names {
            ids.push(
                repo.insert(&NewDish::new(*name, "desc", Category::Main))
                    .await
                    .unwrap(),
            );
        }
        let ctx = bootstrap_with(repo, Arc::new(NoopEmitter), false)
            .await
            .unwrap();
        (ctx, ids)
    }

    #[tokio::test]
    async fn test_tried_moves_dish_to_tried_view() {
        let (ctx, ids) = ctx_with(&["Barramundi"]).await;
        let engine = ctx.engine();
        engine.set_category_filter(CategoryFilter::Only(Category::Main));
        assert_eq!(engine.filtered().len(), 1);

        execute(&ctx, ids[0], 4.5, "  flaky  ", None).await.unwrap();
        assert!(engine.filtered().is_empty());

        engine.set_tried_filter(true);
        let tried = engine.filtered();
        assert_eq!(tried.len(), 1);
        assert_eq!(tried[0].tasting_notes, "flaky");
    }

    #[tokio::test]
    async fn test_tried_rejects_out_of_range_rating() {
        let (ctx, ids) = ctx_with(&["Barramundi"]).await;
        let err = execute(&ctx, ids[0], 5.5, "", None).await.unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 2);

        let err = execute(&ctx, 999, 3.0, "", None).await.unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 66);
    }
}
