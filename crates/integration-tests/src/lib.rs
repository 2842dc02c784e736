//! Integration tests for Atelier.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart persistence through the file store
//! - `storefront_listing` - Catalog filters and sort orders
//! - `storefront_wishlist` - Wishlist persistence and toggling
//! - `storefront_checkout` - Sign-in through order placement

use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use atelier_storefront::Storefront;
use atelier_storefront::catalog::Catalog;
use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::storage::{FileStore, Storage};

/// A storefront backed by files in a throwaway directory.
///
/// Reopening builds a fresh [`Storefront`] over the same directory, the way a
/// second CLI invocation would.
pub struct TestContext {
    dir: TempDir,
    config: StorefrontConfig,
}

impl TestContext {
    /// Create an empty data directory with default pricing and no simulated
    /// latency.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            auth_delay: Duration::ZERO,
            ..StorefrontConfig::default()
        };
        config.checkout.order_delay = Duration::ZERO;

        Self { dir, config }
    }

    /// Directory holding the persisted JSON files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Open a storefront over the data directory with the built-in catalog.
    #[must_use]
    pub fn open(&self) -> Storefront {
        let storage = Storage::new(FileStore::new(self.dir.path()));
        Storefront::with_storage(self.config.clone(), Catalog::builtin(), storage)
    }

    /// Raw text of a persisted key, if present.
    ///
    /// # Panics
    ///
    /// Panics if the file exists but cannot be read.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        let path = self.dir.path().join(format!("{key}.json"));
        path.exists()
            .then(|| std::fs::read_to_string(path).expect("Failed to read stored state"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
