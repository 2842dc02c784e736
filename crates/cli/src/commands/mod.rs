//! Subcommand implementations.
//!
//! Command output goes to stdout; logs go to stderr.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

use thiserror::Error;

use atelier_core::PriceError;
use atelier_storefront::AppError;
use atelier_storefront::config::ConfigError;
use atelier_storefront::models::Product;

/// Errors reported by a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("Invalid price filter: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("{0} has no sizes to choose from")]
    NoSizes(String),
}

/// One-line product summary: `[id] name - price (category)`.
fn product_line(product: &Product) -> String {
    let mut line = format!(
        "[{}] {} - {} ({})",
        product.id, product.name, product.price, product.category
    );
    if product.is_new {
        line.push_str(" NEW");
    }
    if product.featured {
        line.push_str(" *");
    }
    line
}

#[allow(clippy::print_stdout)]
fn print_products<'a>(products: impl IntoIterator<Item = &'a Product>) {
    let mut empty = true;
    for product in products {
        empty = false;
        println!("  {}", product_line(product));
    }
    if empty {
        println!("  (no products)");
    }
}
