//! Wishlist commands.

use atelier_core::ProductId;
use atelier_storefront::Storefront;

use super::{CommandError, print_products};

/// Show saved products.
#[allow(clippy::print_stdout)]
pub fn show(storefront: &Storefront) {
    let wishlist = storefront.wishlist();
    println!("Wishlist ({} items)", wishlist.total_items());
    print_products(wishlist.items());
}

/// Save a product.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown ID.
#[allow(clippy::print_stdout)]
pub fn add(storefront: &mut Storefront, id: &str) -> Result<(), CommandError> {
    let product = storefront.product(id)?.clone();
    match storefront.wishlist_mut().add_item(&product) {
        Some(notice) => println!("{notice}"),
        None => println!("{} is already in your wishlist", product.name),
    }
    Ok(())
}

/// Remove a saved product.
#[allow(clippy::print_stdout)]
pub fn remove(storefront: &mut Storefront, id: &str) {
    match storefront.wishlist_mut().remove_item(&ProductId::new(id)) {
        Some(notice) => println!("{notice}"),
        None => println!("That product is not in your wishlist"),
    }
}

/// Save a product, or remove it if already saved.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown ID.
#[allow(clippy::print_stdout)]
pub fn toggle(storefront: &mut Storefront, id: &str) -> Result<(), CommandError> {
    let product = storefront.product(id)?.clone();
    if let Some(notice) = storefront.wishlist_mut().toggle(&product) {
        println!("{notice}");
    }
    Ok(())
}

/// Remove every saved product.
#[allow(clippy::print_stdout)]
pub fn clear(storefront: &mut Storefront) {
    storefront.wishlist_mut().clear();
    println!("Wishlist cleared");
}
