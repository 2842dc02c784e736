//! Catalog domain types.

use serde::{Deserialize, Serialize};

use atelier_core::{CategoryId, Price, ProductId};

/// A purchasable product.
///
/// Products are immutable once loaded into the catalog. Cart lines and
/// wishlist entries carry full copies so persisted state stays readable even
/// if the catalog changes between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Category name, e.g. "Men".
    pub category: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub featured: bool,
    /// New-arrival flag.
    #[serde(default, rename = "new", skip_serializing_if = "is_false")]
    pub is_new: bool,
    /// Available sizes; the first one is the default selection.
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl Product {
    /// The size selected by default on the product page.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Whether the product is offered in `size`.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Lowercased text matched by free-text search.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.category).to_lowercase()
    }

    /// Case-insensitive substring match against name, description and category.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.searchable_text().contains(needle)
    }

    /// Case-insensitive category comparison.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
