//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ATELIER_DATA_DIR` - Directory for persisted cart/wishlist/user (default: .atelier)
//! - `ATELIER_CATALOG_PATH` - JSON catalog to use instead of the built-in one
//! - `ATELIER_AUTH_DELAY_MS` - Simulated login/signup latency (default: 1000)
//! - `ATELIER_ORDER_DELAY_MS` - Simulated order placement latency (default: 1500)
//! - `ATELIER_FREE_SHIPPING_THRESHOLD` - Subtotal that ships free (default: 100)
//! - `ATELIER_FLAT_SHIPPING` - Shipping below the threshold (default: 10)
//! - `ATELIER_TAX_RATE` - Sales tax rate (default: 0.08)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use atelier_core::Price;

const DEFAULT_DATA_DIR: &str = ".atelier";
const DEFAULT_AUTH_DELAY_MS: u64 = 1000;
const DEFAULT_ORDER_DELAY_MS: u64 = 1500;
const DEFAULT_FREE_SHIPPING_CENTS: i64 = 10_000;
const DEFAULT_FLAT_SHIPPING_CENTS: i64 = 1_000;
const DEFAULT_TAX_RATE: &str = "0.08";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persisted state files
    pub data_dir: PathBuf,
    /// Catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Simulated latency of login and signup
    pub auth_delay: Duration,
    /// Checkout pricing and latency
    pub checkout: CheckoutConfig,
}

/// Checkout pricing rules and simulated latency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Orders with a subtotal at or above this ship free
    pub free_shipping_threshold: Price,
    /// Shipping charged below the threshold
    pub flat_shipping: Price,
    /// Sales tax rate applied to the subtotal
    pub tax_rate: Decimal,
    /// Simulated latency of order placement
    pub order_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Price::from_cents(DEFAULT_FREE_SHIPPING_CENTS),
            flat_shipping: Price::from_cents(DEFAULT_FLAT_SHIPPING_CENTS),
            tax_rate: Decimal::new(8, 2),
            order_delay: Duration::from_millis(DEFAULT_ORDER_DELAY_MS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            checkout: CheckoutConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("ATELIER_DATA_DIR").map_or_else(|| DEFAULT_DATA_DIR.into(), PathBuf::from);
        let catalog_path = get("ATELIER_CATALOG_PATH").map(PathBuf::from);

        let auth_delay = Duration::from_millis(parse_or(
            "ATELIER_AUTH_DELAY_MS",
            get("ATELIER_AUTH_DELAY_MS"),
            DEFAULT_AUTH_DELAY_MS,
        )?);
        let order_delay = Duration::from_millis(parse_or(
            "ATELIER_ORDER_DELAY_MS",
            get("ATELIER_ORDER_DELAY_MS"),
            DEFAULT_ORDER_DELAY_MS,
        )?);

        let defaults = CheckoutConfig::default();
        let free_shipping_threshold = parse_price(
            "ATELIER_FREE_SHIPPING_THRESHOLD",
            get("ATELIER_FREE_SHIPPING_THRESHOLD"),
            defaults.free_shipping_threshold,
        )?;
        let flat_shipping = parse_price(
            "ATELIER_FLAT_SHIPPING",
            get("ATELIER_FLAT_SHIPPING"),
            defaults.flat_shipping,
        )?;
        let tax_rate = parse_tax_rate(get("ATELIER_TAX_RATE"))?;

        Ok(Self {
            data_dir,
            catalog_path,
            auth_delay,
            checkout: CheckoutConfig {
                free_shipping_threshold,
                flat_shipping,
                tax_rate,
                order_delay,
            },
        })
    }
}

/// Parse an optional value, falling back to `default` when unset.
fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |v| {
        v.trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

fn parse_price(key: &str, value: Option<String>, default: Price) -> Result<Price, ConfigError> {
    let amount: Decimal = parse_or(key, value, default.amount())?;
    Price::new(amount).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_tax_rate(value: Option<String>) -> Result<Decimal, ConfigError> {
    const KEY: &str = "ATELIER_TAX_RATE";

    let default = Decimal::from_str(DEFAULT_TAX_RATE)
        .map_err(|e| ConfigError::InvalidEnvVar(KEY.to_string(), e.to_string()))?;
    let rate: Decimal = parse_or(KEY, value, default)?;

    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            KEY.to_string(),
            format!("must be between 0 and 1 (got {rate})"),
        ));
    }
    Ok(rate)
}
