//! Key-value persistence for shopper state.
//!
//! Cart, wishlist and user are each stored as one JSON blob under a fixed
//! key (see [`keys`]). [`Storage`] is the adapter the state containers talk
//! to; it owns a [`KeyValueStore`] backend:
//!
//! - [`MemoryStore`] - process-local map, used by tests and ephemeral sessions
//! - [`FileStore`] - one `<key>.json` file per key in a data directory
//!
//! # Failure policy
//!
//! Reads never fail from the caller's point of view: missing keys, backend
//! errors and unparseable JSON all load as `None`, and the container starts
//! empty. Writes are fire-and-forget; backend failures are logged. There is
//! no locking between processes, so the last write wins.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys for persisted state.
pub mod keys {
    /// Cart lines.
    pub const CART: &str = "cart";

    /// Wishlist products.
    pub const WISHLIST: &str = "wishlist";

    /// The signed-in user.
    pub const USER: &str = "user";
}

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be represented by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A string-valued key-value store.
///
/// Implementations must be safe to share between threads; the adapter holds
/// them behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON persistence adapter shared by the state containers.
///
/// Cheaply cloneable; clones share the same backend.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Wrap a backend.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Adapter over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Load and parse the value stored under `key`.
    ///
    /// Returns `None` if the key is absent, the backend fails, or the stored
    /// text is not valid JSON for `T`.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "nothing stored");
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read stored state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, bytes = raw.len(), "loaded stored state");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "discarding unparseable stored state");
                None
            }
        }
    }

    /// Serialize `value` and store it under `key`, overwriting prior content.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize state");
                return;
            }
        };

        match self.inner.set(key, &raw) {
            Ok(()) => debug!(key, bytes = raw.len(), "saved state"),
            Err(e) => warn!(key, error = %e, "failed to save state"),
        }
    }

    /// Delete whatever is stored under `key`.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn remove(&self, key: &str) {
        match self.inner.remove(key) {
            Ok(()) => debug!(key, "removed state"),
            Err(e) => warn!(key, error = %e, "failed to remove state"),
        }
    }

    /// Raw text stored under `key`, bypassing JSON parsing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub fn raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }
}
