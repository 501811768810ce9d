//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and dish store (via mealmate-db)
//! - Catalog repository and engine (via mealmate-core)
//!
//! Command handlers receive the composed engine and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use mealmate_core::paths::database_path;
use mealmate_core::{CatalogEngine, CatalogEventEmitter, CatalogRepository, seed_if_empty};
use mealmate_db::{StoreFactory, setup_database};
use tracing::{debug, info};

use crate::emitter::LogEmitter;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Insert the sample menu when the catalog is empty.
    pub seed_when_empty: bool,
}

impl CliConfig {
    /// Apply the global CLI flags on top of the defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let database_path = match &cli.database {
            Some(path) => path.clone(),
            None => database_path()?,
        };
        Ok(Self {
            database_path,
            seed_when_empty: !cli.no_seed,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The catalog engine, already holding a snapshot of the collection.
    pub engine: Arc<CatalogEngine>,
    /// Repository the engine writes through.
    pub repo: CatalogRepository,
    /// Sink for catalog events.
    pub emitter: Arc<dyn CatalogEventEmitter>,
}

impl CliContext {
    /// Access the catalog engine.
    pub fn engine(&self) -> &CatalogEngine {
        &self.engine
    }

    /// Access the catalog repository.
    pub const fn repo(&self) -> &CatalogRepository {
        &self.repo
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database and ensures the schema
/// 2. Builds the dish store and repository
/// 3. Seeds the sample menu into an empty catalog (unless disabled)
/// 4. Builds the engine and loads the first snapshot
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    debug!(path = %config.database_path.display(), "Opening catalog database");
    let pool = setup_database(&config.database_path).await?;
    let repo = StoreFactory::build_repository(pool);

    let emitter: Arc<dyn CatalogEventEmitter> = Arc::new(LogEmitter);
    bootstrap_with(repo, emitter, config.seed_when_empty).await
}

/// Bootstrap over an existing repository (for testing).
pub async fn bootstrap_with(
    repo: CatalogRepository,
    emitter: Arc<dyn CatalogEventEmitter>,
    seed_when_empty: bool,
) -> Result<CliContext> {
    if seed_when_empty {
        let seeded = seed_if_empty(&repo, emitter.as_ref()).await?;
        if seeded > 0 {
            info!(count = seeded, "First launch: added sample dishes");
        }
    }

    let engine = CatalogEngine::new(repo.clone(), Arc::clone(&emitter));
    engine.refresh().await?;

    Ok(CliContext {
        engine,
        repo,
        emitter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mealmate_core::NoopEmitter;
    use mealmate_core::testing::InMemoryDishStore;

    fn in_memory() -> CatalogRepository {
        CatalogRepository::new(Arc::new(InMemoryDishStore::new()))
    }

    #[tokio::test]
    async fn test_bootstrap_seeds_empty_catalog() {
        let ctx = bootstrap_with(in_memory(), Arc::new(NoopEmitter), true)
            .await
            .unwrap();
        assert_eq!(ctx.engine().all_dishes().len(), 10);
    }

    #[tokio::test]
    async fn test_bootstrap_without_seed_stays_empty() {
        let ctx = bootstrap_with(in_memory(), Arc::new(NoopEmitter), false)
            .await
            .unwrap();
        assert!(ctx.engine().all_dishes().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_opens_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mealmate.db");
        let config = CliConfig {
            database_path: path.clone(),
            seed_when_empty: false,
        };

        let ctx = bootstrap(config).await.unwrap();
        assert!(path.exists());
        assert!(ctx.engine().filtered().is_empty());
    }

    #[test]
    fn test_config_from_cli_flags() {
        let cli = Cli::parse_from(["mealmate", "--database", "/tmp/x.db", "--no-seed"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/x.db"));
        assert!(!config.seed_when_empty);
    }

    #[test]
    fn test_config_from_cli_after_command_taken() {
        let mut cli = Cli::parse_from(["mealmate", "--database", "/tmp/y.db", "list"]);
        let command = cli.command.take();
        assert!(matches!(command, Some(crate::Commands::List { .. })));

        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/y.db"));
        assert!(config.seed_when_empty);
    }
}
