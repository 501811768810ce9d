//! Command handlers that delegate to the catalog engine.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `CatalogEngine` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access the dish store directly
//! - Filter or search dishes themselves
//! - Manage database connections

pub mod add;
pub mod categories;
pub mod dish_input;
pub mod edit;
pub mod list;
pub mod remove;
pub mod search;
pub mod seed;
pub mod show;
pub mod tried;
