//! Allergen labels and their text encoding.
//!
//! Allergens are stored as a JSON array of strings in a single text column.
//! Decoding never fails: malformed input yields an empty list.

use tracing::warn;

/// Allergen options offered by default when editing a dish.
pub const DEFAULT_ALLERGENS: [&str; 10] = [
    "Gluten", "Egg", "Fish", "Milk", "Soy", "Nuts", "Shellfish", "Peanuts", "Sesame", "Wheat",
];

/// Encode an allergen list for storage.
pub fn encode_allergens(allergens: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(allergens).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored allergen column. Malformed JSON or `null` decode to `[]`.
pub fn decode_allergens(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Option<Vec<String>>>(raw) {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Discarding malformed allergen list");
            Vec::new()
        }
    }
}

/// Normalize a user-entered allergen label: trim, then upper-case the
/// first character. Returns `None` for blank input.
pub fn normalize_allergen(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Add a label to a list unless an equal label (ignoring case) is already
/// present. Returns `true` when the list changed.
pub fn add_allergen(allergens: &mut Vec<String>, label: &str) -> bool {
    let Some(label) = normalize_allergen(label) else {
        return false;
    };
    let folded = label.to_lowercase();
    if allergens.iter().any(|a| a.to_lowercase() == folded) {
        return false;
    }
    allergens.push(label);
    true
}

/// Icon group used to render an allergen badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllergenGroup {
    Gluten,
    Dairy,
    Egg,
    Fish,
    Soy,
    Nuts,
    Other,
}

impl AllergenGroup {
    /// Map an allergen label to its icon group. Matching is exact.
    pub fn of(label: &str) -> Self {
        match label {
            "Gluten" | "Wheat" => Self::Gluten,
            "Milk" => Self::Dairy,
            "Egg" => Self::Egg,
            "Fish" => Self::Fish,
            "Soy" => Self::Soy,
            "Nuts" | "Almond" | "Pistachio" | "Hazelnut" | "Walnut" => Self::Nuts,
            _ => Self::Other,
        }
    }

    /// Icon resource key for this group.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Gluten => "gluten",
            Self::Dairy => "dairy",
            Self::Egg => "egg",
            Self::Fish => "fish",
            Self::Soy => "soy",
            Self::Nuts => "nuts",
            Self::Other => "allergen_default",
        }
    }
}
