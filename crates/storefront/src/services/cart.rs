//! Shopping cart.
//!
//! The cart is a list of lines keyed by (product ID, size). Adding a product
//! in a size that is already in the cart bumps that line's quantity; a
//! different size of the same product is a separate line. Lines keep the
//! order in which they were first added.
//!
//! Every mutation writes the full line list to storage under
//! [`keys::CART`] right away.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use atelier_core::{Price, ProductId};

use crate::models::Product;
use crate::services::notice::Notice;
use crate::storage::{Storage, keys};

/// Errors that can occur when adding to the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantity must be at least 1.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The product is not offered in the requested size.
    #[error("{product} is not available in size {size}")]
    UnknownSize {
        /// Product name.
        product: String,
        /// Requested size.
        size: String,
    },
}

/// One (product, size) pairing with a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub size: String,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }

    fn matches(&self, product_id: &ProductId, size: &str) -> bool {
        self.product.id == *product_id && self.size == size
    }
}

/// The shopper's cart.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    storage: Storage,
}

impl Cart {
    /// Restore the cart from storage, starting empty if nothing usable is stored.
    ///
    /// Stored lines with a zero quantity are dropped and duplicate
    /// (product, size) lines are merged.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let stored: Vec<CartLine> = storage.load(keys::CART).unwrap_or_default();
        let stored_count = stored.len();

        let mut lines: Vec<CartLine> = Vec::with_capacity(stored_count);
        for line in stored.into_iter().filter(|l| l.quantity > 0) {
            match lines.iter_mut().find(|l| l.matches(&line.product.id, &line.size)) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => lines.push(line),
            }
        }

        if lines.len() != stored_count {
            warn!(
                stored = stored_count,
                kept = lines.len(),
                "normalized stored cart lines"
            );
        }
        debug!(lines = lines.len(), "cart loaded");

        Self { lines, storage }
    }

    /// Cart lines in the order they were added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id` in `size`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId, size: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(product_id, size))
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }

    /// Add `quantity` of `product` in `size`.
    ///
    /// Increments the existing line for the same product and size, or
    /// appends a new line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ZeroQuantity` for a zero quantity and
    /// `CartError::UnknownSize` if the product is not offered in `size`.
    /// The cart is left untouched in both cases.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
    ) -> Result<Notice, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if !product.has_size(size) {
            return Err(CartError::UnknownSize {
                product: product.name.clone(),
                size: size.to_owned(),
            });
        }

        let notice = if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&product.id, size))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            Notice::Success(format!("Updated {} quantity in cart", product.name))
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
                size: size.to_owned(),
            });
            Notice::Success(format!("Added {} to cart", product.name))
        };

        self.persist();
        Ok(notice.emit())
    }

    /// Remove the line for `product_id` in `size`. No-op if absent.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str) -> Option<Notice> {
        let position = self.lines.iter().position(|l| l.matches(product_id, size));
        let removed = position.map(|index| self.lines.remove(index));

        self.persist();
        removed.map(|line| Notice::Info(format!("Removed {} from cart", line.product.name)).emit())
    }

    /// Set the quantity of the line for `product_id` in `size`.
    ///
    /// A quantity of zero removes the line. Unknown lines are left alone.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        quantity: u32,
    ) -> Option<Notice> {
        if quantity == 0 {
            return self.remove_item(product_id, size);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(product_id, size)) {
            line.quantity = quantity;
        }

        self.persist();
        None
    }

    /// Remove every line.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(keys::CART, &self.lines);
    }
}
