//! Read-only product catalog.
//!
//! The catalog is built once at startup, either from the built-in product
//! list or from a JSON file, and never changes afterwards. All accessors
//! return products in catalog order.
//!
//! The listing pipeline (filters and sort keys) lives in [`listing`].

mod data;
pub mod listing;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::models::{Category, Product};

pub use listing::{ListingQuery, PriceRange, SortOption, filter_products};

/// Number of related products shown on a product page.
pub const RELATED_LIMIT: usize = 4;

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog JSON is malformed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product lists no sizes, or an empty size name.
    #[error("product {0} must list at least one non-empty size")]
    InvalidSizes(String),
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// The built-in catalog: 8 products across Men, Women and Accessories.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: data::products(),
            categories: data::categories(),
        }
    }

    /// Build a catalog from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProduct` if two products share an ID,
    /// or `CatalogError::InvalidSizes` if a product has no usable sizes.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
            if product.sizes.is_empty() || product.sizes.iter().any(String::is_empty) {
                return Err(CatalogError::InvalidSizes(product.id.to_string()));
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// Parse a catalog from `{ "categories": [...], "products": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, plus the validation
    /// errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.categories)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, plus the errors
    /// of [`Catalog::from_json`].
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(products = catalog.products.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Every product.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every category.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in `category`, compared case-insensitively.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .collect()
    }

    /// Featured products.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// New arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Every size offered by any product, sorted and de-duplicated.
    #[must_use]
    pub fn all_sizes(&self) -> Vec<&str> {
        self.products
            .iter()
            .flat_map(|p| p.sizes.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Other products from the same category, at most `limit` of them.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.in_category(&product.category))
            .take(limit)
            .collect()
    }

    /// Free-text search over name, description and category.
    ///
    /// A blank query returns nothing (the search page shows no results until
    /// something is typed).
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_search(&needle))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories().len(), 3);
        assert!(Catalog::new(catalog.products().to_vec(), Vec::new()).is_ok());
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.product("6").unwrap().name, "Silk Scarf");
        assert!(catalog.product("99").is_none());
    }

    #[test]
    fn test_by_category_ignores_case() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.by_category("men")), ["1", "2", "5"]);
        assert_eq!(ids(&catalog.by_category("WOMEN")), ["3", "4", "8"]);
        assert!(catalog.by_category("kids").is_empty());
    }

    #[test]
    fn test_featured_and_new() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.featured()), ["1", "3", "6"]);
        assert_eq!(ids(&catalog.new_arrivals()), ["4", "8"]);
    }

    #[test]
    fn test_all_sizes_sorted_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.all_sizes(),
            [
                "30", "32", "34", "36", "38", "L", "M", "One Size", "S", "XL", "XS", "XXL"
            ]
        );
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::builtin();
        let coat = catalog.product("1").unwrap();
        assert_eq!(ids(&catalog.related(coat, RELATED_LIMIT)), ["2", "5"]);
        assert_eq!(ids(&catalog.related(coat, 1)), ["2"]);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.search("LUXURIOUS")), ["4", "6"]);
        assert_eq!(ids(&catalog.search("accessories")), ["6", "7"]);
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [{"id": "1", "name": "Home"}],
            "products": [{
                "id": "10",
                "name": "Linen Throw",
                "price": "75.00",
                "description": "Soft.",
                "image": "throw.jpg",
                "category": "Home",
                "new": true,
                "sizes": ["One Size"],
                "colors": ["Sand", "Slate"]
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let throw = catalog.product("10").unwrap();
        assert!(throw.is_new);
        assert_eq!(throw.colors.as_ref().unwrap().len(), 2);
        assert_eq!(catalog.categories()[0].description, None);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let product = r#"{"id": "1", "name": "A", "price": 1, "description": "", "image": "", "category": "X", "sizes": ["M"]}"#;
        let json = format!(r#"{{"products": [{product}, {product}]}}"#);
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::DuplicateProduct(id)) if id == "1"
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_sizes() {
        let json = r#"{"products": [{"id": "1", "name": "A", "price": 1, "description": "", "image": "", "category": "X", "sizes": []}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidSizes(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"products": [{"id": "1", "name": "A", "price": 1, "description": "", "image": "", "category": "X", "sizes": ["M"]}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert!(matches!(
            Catalog::load(&tmp.path().join("missing.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
