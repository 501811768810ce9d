//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the dish catalog.
#[derive(Subcommand)]
pub enum Commands {
    /// List dishes filtered by category and tried status
    List {
        /// Category tag (ALL, STARTER, MAIN, DESSERT, SIDE, LUNCH)
        #[arg(short, long, default_value = "ALL")]
        category: String,
        /// Show tried dishes instead of dishes to try
        #[arg(short, long)]
        tried: bool,
    },

    /// Show every detail of one dish
    Show {
        /// Dish ID
        id: i64,
    },

    /// Add a dish to try
    Add {
        /// Dish name
        name: String,
        /// Short description of the dish
        description: String,
        /// Category tag (STARTER, MAIN, DESSERT, SIDE, LUNCH)
        #[arg(short, long, default_value = "MAIN")]
        category: String,
        /// Restaurant serving the dish
        #[arg(short, long)]
        restaurant: Option<String>,
        /// Allergen label (repeatable)
        #[arg(short = 'a', long = "allergen")]
        allergens: Vec<String>,
    },

    /// Edit a dish's descriptive fields
    Edit {
        /// Dish ID
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category tag
        #[arg(short, long)]
        category: Option<String>,
        /// New restaurant
        #[arg(short, long)]
        restaurant: Option<String>,
        /// Replace the allergen list (repeatable)
        #[arg(short = 'a', long = "allergen")]
        allergens: Vec<String>,
        /// Remove every allergen
        #[arg(long, conflicts_with = "allergens")]
        clear_allergens: bool,
    },

    /// Remove a dish from the catalog
    Remove {
        /// Dish ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Mark a dish as tried with a rating and notes
    Tried {
        /// Dish ID
        id: i64,
        /// Rating from 0 to 5 (half stars allowed)
        #[arg(short, long)]
        rating: f32,
        /// Tasting notes
        #[arg(short, long, default_value = "")]
        notes: String,
        /// Path to a photo of the dish
        #[arg(short, long)]
        photo: Option<String>,
    },

    /// Search every dish by name, description, restaurant or allergen
    Search {
        /// Text to look for (case-insensitive)
        query: String,
        /// Show only the first match in full
        #[arg(long)]
        first: bool,
    },

    /// Insert the sample menu
    Seed {
        /// Insert even when the catalog already has dishes
        #[arg(short, long)]
        force: bool,
    },

    /// Show category filters with dish counts
    Categories,
}
