//! Seed command handler.

use anyhow::Result;
use mealmate_core::seed_if_empty;
use mealmate_core::services::seed;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the seed command.
///
/// Without `force`, only an empty catalog receives the sample menu.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<usize> {
    let emitter = ctx.emitter.as_ref();
    let count = if force {
        seed(ctx.repo(), emitter).await
    } else {
        seed_if_empty(ctx.repo(), emitter).await
    }
    .map_err(CliError::from)?;

    if count == 0 {
        println!("Catalog already has dishes; nothing added. Use --force to add the samples anyway.");
    } else {
        ctx.engine().refresh().await.map_err(CliError::from)?;
        println!("Added {count} sample dishes.");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use mealmate_core::testing::InMemoryDishStore;
    use mealmate_core::{CatalogRepository, NoopEmitter};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_respects_existing_content() {
        let repo = CatalogRepository::new(Arc::new(InMemoryDishStore::new()));
        let ctx = bootstrap_with(repo, Arc::new(NoopEmitter), false)
            .await
            .unwrap();

        assert_eq!(execute(&ctx, false).await.unwrap(), 10);
        assert_eq!(execute(&ctx, false).await.unwrap(), 0);
        assert_eq!(execute(&ctx, true).await.unwrap(), 10);
        assert_eq!(ctx.engine().all_dishes().len(), 20);
    }
}
