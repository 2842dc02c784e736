//! Unified error handling.
//!
//! Provides a unified `AppError` type wrapping each component's error. Front
//! ends should return `Result<T, AppError>` and log the error once at the top.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::{AuthError, CartError, CheckoutError};
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persistence backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout could not proceed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether the error was caused by the shopper's input rather than the
    /// environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Cart(_) | Self::Auth(_) | Self::Checkout(_) | Self::NotFound(_)
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_component_errors() {
        let err: AppError = CartError::ZeroQuantity.into();
        assert_eq!(err.to_string(), "Cart error: quantity must be at least 1");
        assert!(err.is_user_error());

        let err: AppError = CheckoutError::EmptyCart.into();
        assert_eq!(err.to_string(), "Checkout error: your cart is empty");
    }

    #[test]
    fn test_environment_errors() {
        let err: AppError = StorageError::InvalidKey("../cart".to_string()).into();
        assert!(!err.is_user_error());

        let err: AppError =
            ConfigError::InvalidEnvVar("ATELIER_TAX_RATE".to_string(), "bad".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable ATELIER_TAX_RATE: bad"
        );
    }

    #[test]
    fn test_not_found() {
        let err = AppError::NotFound("product 99".to_string());
        assert_eq!(err.to_string(), "Not found: product 99");
        assert!(err.is_user_error());
    }
}
