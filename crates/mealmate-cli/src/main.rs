//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! catalog engine.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mealmate_cli::error::exit_code_for;
use mealmate_cli::handlers::{self, add::AddArgs, edit::EditArgs};
use mealmate_cli::{Cli, CliConfig, Commands, bootstrap};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::List { category, tried } => {
            handlers::list::execute(&ctx, &category, tried)?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&ctx, id).await?;
        }
        Commands::Add {
            name,
            description,
            category,
            restaurant,
            allergens,
        } => {
            let args = AddArgs {
                name,
                description,
                category,
                restaurant,
                allergens,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::Edit {
            id,
            name,
            description,
            category,
            restaurant,
            allergens,
            clear_allergens,
        } => {
            let args = EditArgs {
                id,
                name,
                description,
                category,
                restaurant,
                allergens,
                clear_allergens,
            };
            handlers::edit::execute(&ctx, args).await?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&ctx, id, force).await?;
        }
        Commands::Tried {
            id,
            rating,
            notes,
            photo,
        } => {
            handlers::tried::execute(&ctx, id, rating, &notes, photo).await?;
        }
        Commands::Search { query, first } => {
            handlers::search::execute(&ctx, &query, first)?;
        }
        Commands::Seed { force } => {
            handlers::seed::execute(&ctx, force).await?;
        }
        Commands::Categories => {
            handlers::categories::execute(&ctx)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}
