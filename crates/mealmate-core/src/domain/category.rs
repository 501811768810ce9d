//! Dish categories and category filters.
//!
//! Categories are persisted as their upper-case tag (`"MAIN"`, `"DESSERT"`, ...).
//! Stored tags outside the recognized set are preserved verbatim and shown
//! in the `OTHER` display bucket instead of failing to load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label for categories outside the recognized set.
pub const OTHER_LABEL: &str = "OTHER";

/// A recognized menu-section tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Starter,
    Main,
    Dessert,
    Side,
    Lunch,
}

impl Category {
    /// Every recognized category, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Starter,
        Self::Main,
        Self::Dessert,
        Self::Side,
        Self::Lunch,
    ];

    /// The persisted tag for this category.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Starter => "STARTER",
            Self::Main => "MAIN",
            Self::Dessert => "DESSERT",
            Self::Side => "SIDE",
            Self::Lunch => "LUNCH",
        }
    }

    /// Parse an exact persisted tag. Matching is case-sensitive, like the
    /// stored column.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The category stored on a dish.
///
/// `Unrecognized` keeps the raw text so that an edit round-trips it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DishCategory {
    Known(Category),
    Unrecognized(String),
}

impl DishCategory {
    /// Build from a persisted tag; never fails.
    pub fn from_tag(tag: &str) -> Self {
        Category::from_tag(tag).map_or_else(|| Self::Unrecognized(tag.to_string()), Self::Known)
    }

    /// The text written back to storage.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Known(category) => category.tag(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// The recognized category, if any.
    pub const fn known(&self) -> Option<Category> {
        match self {
            Self::Known(category) => Some(*category),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<Category> for DishCategory {
    fn from(category: Category) -> Self {
        Self::Known(category)
    }
}

impl From<String> for DishCategory {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<DishCategory> for String {
    fn from(category: DishCategory) -> Self {
        category.as_tag().to_string()
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Category criterion applied by the catalog engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Pass every dish through.
    #[default]
    All,
    /// Keep only dishes tagged with this category.
    Only(Category),
    /// A tag outside the recognized set (including the empty tag).
    /// Matches nothing.
    Unrecognized(String),
}

impl CategoryFilter {
    /// Tag selecting [`CategoryFilter::All`].
    pub const ALL_TAG: &'static str = "ALL";

    /// Parse a filter tag such as `"ALL"` or `"DESSERT"`. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::ALL_TAG {
            return Self::All;
        }
        Category::from_tag(tag).map_or_else(|| Self::Unrecognized(tag.to_string()), Self::Only)
    }

    /// Whether a dish with the given category passes this filter.
    pub fn matches(&self, category: &DishCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category.known() == Some(*wanted),
            Self::Unrecognized(_) => false,
        }
    }

    /// The tag this filter was built from.
    pub fn tag(&self) -> &str {
        match self {
            Self::All => Self::ALL_TAG,
            Self::Only(category) => category.tag(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
