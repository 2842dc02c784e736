//! Product listing pipeline.
//!
//! [`filter_products`] maps a product list and a [`ListingQuery`] to the
//! ordered list shown on the listing page. It is a pure function: the same
//! inputs always give the same output, in the same order.
//!
//! Filters are independent predicates applied in this order:
//!
//! 1. Category: `"new"` keeps new arrivals, any other non-empty value keeps
//!    products whose category matches case-insensitively.
//! 2. Search: keeps products whose name, description or category contains
//!    the term, case-insensitively.
//! 3. Price: keeps products with `min <= price <= max`.
//! 4. Sizes: keeps products offering at least one selected size.
//!
//! Blank inputs disable their filter. All sorts are stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use atelier_core::Price;

use crate::models::Product;

/// Category value that selects new arrivals instead of a real category.
pub const NEW_ARRIVALS: &str = "new";

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
    /// New arrivals first, then by descending numeric ID.
    Newest,
}

impl SortOption {
    /// Form value for this option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
            Self::Newest => "newest",
        }
    }

    /// Parse a form value, falling back to [`SortOption::Featured`] for
    /// anything unrecognised.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low-high" => Ok(Self::PriceLowHigh),
            "price-high-low" => Ok(Self::PriceHighLow),
            "newest" => Ok(Self::Newest),
            _ => Err(format!(
                "invalid sort option: {s} (expected featured, price-low-high, price-high-low or newest)"
            )),
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// Upper bound of the price slider.
    pub const DEFAULT_MAX_CENTS: i64 = 30_000;

    /// Create a range; bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(min: Price, max: Price) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Whether `price` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    /// The slider's initial position: `$0` to `$300`.
    fn default() -> Self {
        Self {
            min: Price::ZERO,
            max: Price::from_cents(Self::DEFAULT_MAX_CENTS),
        }
    }
}

/// Filter and sort parameters for the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Category name, [`NEW_ARRIVALS`], or `None` for everything.
    pub category: Option<String>,
    /// Free-text search term.
    pub search: String,
    pub price_range: PriceRange,
    /// Sizes to match; empty means any size.
    pub sizes: Vec<String>,
    pub sort: SortOption,
}

impl ListingQuery {
    /// Query for a category page with default filters.
    #[must_use]
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Set the sort order.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Title for the listing page, e.g. "Men" for `men`.
    #[must_use]
    pub fn title(&self) -> String {
        match self.category.as_deref().filter(|c| !c.is_empty()) {
            Some(category) => {
                let mut chars = category.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            }
            None => "All Products".to_string(),
        }
    }

    fn keeps(&self, product: &Product, needle: Option<&str>) -> bool {
        let in_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(NEW_ARRIVALS) => product.is_new,
            Some(category) => product.in_category(category),
        };

        in_category
            && needle.is_none_or(|n| product.matches_search(n))
            && self.price_range.contains(product.price)
            && (self.sizes.is_empty() || self.sizes.iter().any(|s| product.has_size(s)))
    }
}

/// Apply `query` to `products`, returning the ordered listing.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &ListingQuery) -> Vec<&'a Product> {
    let needle = Some(query.search.to_lowercase()).filter(|s| !s.is_empty());

    let mut listing: Vec<&Product> = products
        .iter()
        .filter(|p| query.keeps(p, needle.as_deref()))
        .collect();

    match query.sort {
        SortOption::PriceLowHigh => listing.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHighLow => listing.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Newest => {
            listing.sort_by(|a, b| b.is_new.cmp(&a.is_new).then_with(|| by_recency(a, b)));
        }
        SortOption::Featured => listing.sort_by(|a, b| b.featured.cmp(&a.featured)),
    }

    listing
}

/// Higher numeric IDs first; non-numeric IDs after all numeric ones.
fn by_recency(a: &Product, b: &Product) -> Ordering {
    match (a.id.as_number(), b.id.as_number()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atelier_core::ProductId;

    use super::*;
    use crate::catalog::Catalog;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_query_is_featured_first() {
        let catalog = Catalog::builtin();
        let listing = filter_products(catalog.products(), &ListingQuery::default());
        assert_eq!(ids(&listing), ["1", "3", "6", "2", "4", "5", "7", "8"]);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let listing = filter_products(catalog.products(), &ListingQuery::for_category("men"));
        assert_eq!(listing.len(), 3);
        assert!(listing.iter().all(|p| p.category == "Men"));
    }

    #[test]
    fn test_new_category_selects_new_arrivals() {
        let catalog = Catalog::builtin();
        let listing = filter_products(
            catalog.products(),
            &ListingQuery::for_category(NEW_ARRIVALS),
        );
        assert_eq!(ids(&listing), ["4", "8"]);
    }

    #[test]
    fn test_empty_category_selects_all() {
        let catalog = Catalog::builtin();
        let listing = filter_products(catalog.products(), &ListingQuery::for_category(""));
        assert_eq!(listing.len(), 8);
    }

    #[test]
    fn test_search_filter() {
        let catalog = Catalog::builtin();
        let query = ListingQuery {
            search: "Versatile".to_string(),
            ..ListingQuery::default()
        };
        assert_eq!(
            ids(&filter_products(catalog.products(), &query)),
            ["3", "5", "8"]
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = Catalog::builtin();
        let query = ListingQuery {
            price_range: PriceRange::new(Price::from_cents(8_999), Price::from_cents(12_999)),
            sort: SortOption::PriceLowHigh,
            ..ListingQuery::default()
        };
        assert_eq!(
            ids(&filter_products(catalog.products(), &query)),
            ["2", "8", "7"]
        );
    }

    #[test]
    fn test_reversed_price_range_is_swapped() {
        let range = PriceRange::new(Price::from_cents(500), Price::from_cents(100));
        assert_eq!(range.min, Price::from_cents(100));
        assert!(range.contains(Price::from_cents(500)));
    }

    #[test]
    fn test_size_filter_matches_any_selected() {
        let catalog = Catalog::builtin();
        let query = ListingQuery {
            sizes: vec!["XXL".to_string(), "One Size".to_string()],
            ..ListingQuery::default()
        };
        assert_eq!(
            ids(&filter_products(catalog.products(), &query)),
            ["6", "2", "7"]
        );
    }

    #[test]
    fn test_price_low_high() {
        let catalog = Catalog::builtin();
        let query = ListingQuery::default().sorted_by(SortOption::PriceLowHigh);
        let listing = filter_products(catalog.products(), &query);

        assert_eq!(listing[0].price, Price::from_cents(5_999));
        assert!(listing.windows(2).all(|w| w[0].price <= w[1].price));
        // Equal prices keep catalog order.
        assert_eq!(ids(&listing), ["6", "5", "2", "8", "7", "4", "3", "1"]);
    }

    #[test]
    fn test_price_high_low() {
        let catalog = Catalog::builtin();
        let query = ListingQuery::default().sorted_by(SortOption::PriceHighLow);
        let listing = filter_products(catalog.products(), &query);
        assert_eq!(ids(&listing), ["1", "3", "4", "7", "2", "8", "5", "6"]);
    }

    #[test]
    fn test_newest() {
        let catalog = Catalog::builtin();
        let query = ListingQuery::default().sorted_by(SortOption::Newest);
        let listing = filter_products(catalog.products(), &query);
        assert_eq!(ids(&listing), ["8", "4", "7", "6", "5", "3", "2", "1"]);
    }

    #[test]
    fn test_newest_puts_non_numeric_ids_last() {
        let mut products = Catalog::builtin().products().to_vec();
        products.truncate(2);
        for (product, id) in products.iter_mut().zip(["b-sku", "10"]) {
            product.id = ProductId::new(id);
            product.is_new = false;
        }

        let query = ListingQuery::default().sorted_by(SortOption::Newest);
        assert_eq!(ids(&filter_products(&products, &query)), ["10", "b-sku"]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin();
        let query = ListingQuery {
            category: Some("women".to_string()),
            search: "a".to_string(),
            sizes: vec!["M".to_string()],
            sort: SortOption::Newest,
            ..ListingQuery::default()
        };
        let first = filter_products(catalog.products(), &query);
        let second = filter_products(catalog.products(), &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_option_parsing() {
        assert_eq!(
            "price-low-high".parse::<SortOption>().unwrap(),
            SortOption::PriceLowHigh
        );
        assert!("cheapest".parse::<SortOption>().is_err());
        assert_eq!(SortOption::from_key("cheapest"), SortOption::Featured);
        assert_eq!(SortOption::Newest.to_string(), "newest");
    }

    #[test]
    fn test_title() {
        assert_eq!(ListingQuery::default().title(), "All Products");
        assert_eq!(ListingQuery::for_category("men").title(), "Men");
        assert_eq!(ListingQuery::for_category("new").title(), "New");
    }
}
