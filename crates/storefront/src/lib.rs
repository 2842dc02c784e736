//! Atelier Storefront library.
//!
//! Catalog browsing, cart, wishlist, mocked sign-in and checkout for a
//! single shopper. State is persisted as JSON through a pluggable key-value
//! backend so any front end (the `atelier` CLI, tests) can drive it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod deferred;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{AppError, Result};
pub use state::Storefront;
