//! Cart commands.

use atelier_core::ProductId;
use atelier_storefront::Storefront;
use atelier_storefront::services::Notice;

use super::CommandError;

#[allow(clippy::print_stdout)]
fn report(notice: Option<Notice>, fallback: &str) {
    match notice {
        Some(notice) => println!("{notice}"),
        None => println!("{fallback}"),
    }
}

/// Show cart lines and the order summary.
#[allow(clippy::print_stdout)]
pub fn show(storefront: &Storefront) {
    let cart = storefront.cart();
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }

    println!("Cart ({} items)", cart.total_items());
    for line in cart.lines() {
        println!(
            "  [{}] {} / {} x{} - {}",
            line.product.id,
            line.product.name,
            line.size,
            line.quantity,
            line.line_total()
        );
    }

    let summary = storefront.order_summary();
    println!();
    println!("  Subtotal: {}", summary.subtotal);
    if summary.ships_free() {
        println!("  Shipping: Free");
    } else {
        println!("  Shipping: {}", summary.shipping);
    }
    println!("  Tax:      {}", summary.tax);
    println!("  Total:    {}", summary.total);
}

/// Add a product, defaulting to its first size.
///
/// # Errors
///
/// Returns an error for an unknown product, an unoffered size or a zero
/// quantity.
#[allow(clippy::print_stdout)]
pub fn add(
    storefront: &mut Storefront,
    id: &str,
    size: Option<&str>,
    quantity: u32,
) -> Result<(), CommandError> {
    let product = storefront.product(id)?.clone();
    let size = match size {
        Some(size) => size,
        None => product
            .default_size()
            .ok_or_else(|| CommandError::NoSizes(product.name.clone()))?,
    };

    let notice = storefront
        .cart_mut()
        .add_item(&product, quantity, size)
        .map_err(atelier_storefront::AppError::from)?;
    println!("{notice}");
    Ok(())
}

/// Remove one line.
pub fn remove(storefront: &mut Storefront, id: &str, size: &str) {
    let notice = storefront.cart_mut().remove_item(&ProductId::new(id), size);
    report(notice, "That item is not in your cart");
}

/// Set a line's quantity.
#[allow(clippy::print_stdout)]
pub fn update(storefront: &mut Storefront, id: &str, size: &str, quantity: u32) {
    let product_id = ProductId::new(id);
    let notice = storefront
        .cart_mut()
        .update_quantity(&product_id, size, quantity);

    match (notice, storefront.cart().line(&product_id, size)) {
        (Some(notice), _) => println!("{notice}"),
        (None, Some(line)) => println!("{} x{}", line.product.name, line.quantity),
        (None, None) => println!("That item is not in your cart"),
    }
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear(storefront: &mut Storefront) {
    storefront.cart_mut().clear();
    println!("Cart cleared");
}
