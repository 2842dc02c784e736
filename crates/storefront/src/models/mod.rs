//! Domain models for the storefront.
//!
//! - [`product`] - Catalog products and categories
//! - [`user`] - The mocked signed-in user
//! - [`checkout`] - Shipping address and payment form data

pub mod checkout;
pub mod product;
pub mod user;

pub use checkout::{Address, CardInfo, PaymentMethod};
pub use product::{Category, Product};
pub use user::User;
