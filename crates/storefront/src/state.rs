//! Storefront context: the catalog plus the shopper's cart, wishlist and
//! sign-in state, wired to one storage backend.

use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::models::{Address, PaymentMethod, Product};
use crate::services::{Auth, Cart, Checkout, Order, OrderSummary, Wishlist};
use crate::storage::{FileStore, Storage};

/// Everything a front end needs to serve one shopper.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    storage: Storage,
    cart: Cart,
    wishlist: Wishlist,
    auth: Auth,
}

impl Storefront {
    /// Open the storefront described by `config`.
    ///
    /// State is persisted as JSON files under `config.data_dir`. The catalog
    /// comes from `config.catalog_path` when set, else the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog file cannot be loaded.
    #[instrument(skip(config), fields(data_dir = %config.data_dir.display()))]
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        let storage = Storage::new(FileStore::new(config.data_dir.clone()));

        let storefront = Self::with_storage(config, catalog, storage);
        info!(
            products = storefront.catalog.products().len(),
            cart_items = storefront.cart.total_items(),
            wishlist_items = storefront.wishlist.total_items(),
            signed_in = storefront.auth.is_signed_in(),
            "storefront opened"
        );
        Ok(storefront)
    }

    /// Assemble a storefront over an explicit catalog and storage backend.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, catalog: Catalog, storage: Storage) -> Self {
        let cart = Cart::load(storage.clone());
        let wishlist = Wishlist::load(storage.clone());
        let auth = Auth::load(storage.clone(), config.auth_delay);

        Self {
            config,
            catalog,
            storage,
            cart,
            wishlist,
            auth,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn auth(&self) -> &Auth {
        &self.auth
    }

    pub const fn auth_mut(&mut self) -> &mut Auth {
        &mut self.auth
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown ID.
    pub fn product(&self, id: &str) -> Result<&Product> {
        self.catalog
            .product(id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }

    /// Price the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::for_subtotal(self.cart.subtotal(), &self.config.checkout)
    }

    /// Run checkout end to end: fill in the form and place the order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Checkout` if checkout cannot proceed.
    pub async fn checkout(&mut self, address: Address, payment: PaymentMethod) -> Result<Order> {
        let mut checkout = Checkout::new();
        checkout.set_address(address);
        checkout.advance()?;
        checkout.set_payment(payment);

        let order = checkout
            .place_order(&self.auth, &mut self.cart, &self.config.checkout)
            .await?;
        Ok(order)
    }
}
