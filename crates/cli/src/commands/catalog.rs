//! Catalog browsing commands.

use clap::Args;
use rust_decimal::Decimal;

use atelier_core::Price;
use atelier_storefront::Storefront;
use atelier_storefront::catalog::{ListingQuery, PriceRange, RELATED_LIMIT, SortOption, filter_products};

use super::{CommandError, print_products};

/// Filters for `atelier products`.
#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Category name, or `new` for new arrivals
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Lowest price
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Highest price
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Size to match (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Sort order (`featured`, `price-low-high`, `price-high-low`, `newest`)
    #[arg(long, default_value_t = SortOption::Featured)]
    pub sort: SortOption,
}

impl TryFrom<ListingArgs> for ListingQuery {
    type Error = CommandError;

    fn try_from(args: ListingArgs) -> Result<Self, Self::Error> {
        let defaults = PriceRange::default();
        let min = args.min.map(Price::new).transpose()?.unwrap_or(defaults.min);
        let max = args.max.map(Price::new).transpose()?.unwrap_or(defaults.max);

        Ok(Self {
            category: args.category,
            search: args.search.unwrap_or_default(),
            price_range: PriceRange::new(min, max),
            sizes: args.sizes,
            sort: args.sort,
        })
    }
}

/// List products matching the filters.
///
/// # Errors
///
/// Returns `CommandError::InvalidPrice` for a negative price bound.
#[allow(clippy::print_stdout)]
pub fn list(storefront: &Storefront, args: ListingArgs) -> Result<(), CommandError> {
    let query = ListingQuery::try_from(args)?;
    let listing = filter_products(storefront.catalog().products(), &query);

    println!("{} ({} products)", query.title(), listing.len());
    print_products(listing);
    Ok(())
}

/// Show one product with related items.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown ID.
#[allow(clippy::print_stdout)]
pub fn show(storefront: &Storefront, id: &str) -> Result<(), CommandError> {
    let product = storefront.product(id)?;

    println!("{}", product.name);
    println!("  Price:    {}", product.price);
    println!("  Category: {}", product.category);
    println!("  Sizes:    {}", product.sizes.join(", "));
    if let Some(colors) = &product.colors {
        println!("  Colors:   {}", colors.join(", "));
    }
    if storefront.wishlist().is_in_wishlist(&product.id) {
        println!("  In your wishlist");
    }
    println!();
    println!("{}", product.description);
    println!();
    println!("You may also like:");
    print_products(storefront.catalog().related(product, RELATED_LIMIT));
    Ok(())
}

/// Free-text search.
#[allow(clippy::print_stdout)]
pub fn search(storefront: &Storefront, query: &str) {
    let results = storefront.catalog().search(query);
    println!("{} results for \"{}\"", results.len(), query.trim());
    print_products(results);
}

/// List categories and the sizes on offer.
#[allow(clippy::print_stdout)]
pub fn categories(storefront: &Storefront) {
    let catalog = storefront.catalog();
    for category in catalog.categories() {
        let count = catalog.by_category(&category.name).len();
        match &category.description {
            Some(description) => println!("{} ({count}) - {description}", category.name),
            None => println!("{} ({count})", category.name),
        }
    }
    println!("New arrivals ({})", catalog.new_arrivals().len());
    println!();
    println!("Sizes: {}", catalog.all_sizes().join(", "));
}
