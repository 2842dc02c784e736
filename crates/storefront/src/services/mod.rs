//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Mocked sign-in, signup and logout
//! - `cart` - Cart lines, quantities and totals
//! - `checkout` - Order pricing, the checkout form and order placement
//! - `notice` - User-facing confirmations of cart and wishlist changes
//! - `wishlist` - Saved products

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod notice;
pub mod wishlist;

pub use auth::{Auth, AuthError};
pub use cart::{Cart, CartError, CartLine};
pub use checkout::{Checkout, CheckoutError, CheckoutStep, Order, OrderLine, OrderSummary};
pub use notice::Notice;
pub use wishlist::Wishlist;
