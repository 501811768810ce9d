//! Parsing of dish fields typed on the command line.

use mealmate_core::domain::{add_allergen, normalize_allergen};
use mealmate_core::{Category, DishValidationError};

use crate::error::CliError;

/// Parse a category tag, ignoring case.
pub fn parse_category(tag: &str) -> Result<Category, CliError> {
    let upper = tag.trim().to_uppercase();
    Category::from_tag(&upper).ok_or_else(|| {
        let valid: Vec<&str> = Category::ALL.iter().map(|c| c.tag()).collect();
        CliError::Arguments(format!(
            "Unknown category '{tag}'. Expected one of: {}",
            valid.join(", ")
        ))
    })
}

/// Normalize allergen labels and drop case-insensitive duplicates,
/// keeping the first spelling.
pub fn collect_allergens(inputs: &[String]) -> Result<Vec<String>, CliError> {
    let mut allergens = Vec::with_capacity(inputs.len());
    for input in inputs {
        let label = normalize_allergen(input).ok_or(DishValidationError::MissingAllergen)?;
        add_allergen(&mut allergens, &label);
    }
    Ok(allergens)
}
