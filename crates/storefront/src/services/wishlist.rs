//! Wishlist: a set of saved products, unique by ID, in the order they were saved.

use tracing::{debug, instrument};

use atelier_core::ProductId;

use crate::models::Product;
use crate::services::notice::Notice;
use crate::storage::{Storage, keys};

/// The shopper's wishlist.
#[derive(Debug)]
pub struct Wishlist {
    items: Vec<Product>,
    storage: Storage,
}

impl Wishlist {
    /// Restore the wishlist from storage, starting empty if nothing usable is
    /// stored. Duplicate stored entries are dropped.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let stored: Vec<Product> = storage.load(keys::WISHLIST).unwrap_or_default();

        let mut items: Vec<Product> = Vec::with_capacity(stored.len());
        for product in stored {
            if !items.iter().any(|p| p.id == product.id) {
                items.push(product);
            }
        }
        debug!(items = items.len(), "wishlist loaded");

        Self { items, storage }
    }

    /// Saved products.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Whether `product_id` is saved.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| p.id == *product_id)
    }

    /// Save `product`. Returns `None` (and writes nothing) if it is already saved.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) -> Option<Notice> {
        if self.is_in_wishlist(&product.id) {
            return None;
        }

        self.items.push(product.clone());
        self.persist();
        Some(Notice::Success(format!("Added {} to wishlist", product.name)).emit())
    }

    /// Remove `product_id`. No-op if it is not saved.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<Notice> {
        let position = self.items.iter().position(|p| p.id == *product_id);
        let removed = position.map(|index| self.items.remove(index));

        self.persist();
        removed.map(|p| Notice::Info(format!("Removed {} from wishlist", p.name)).emit())
    }

    /// Save `product` if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) -> Option<Notice> {
        if self.is_in_wishlist(&product.id) {
            self.remove_item(&product.id)
        } else {
            self.add_item(product)
        }
    }

    /// Remove every product.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(keys::WISHLIST, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::{KeyValueStore, MemoryStore};

    fn product(id: &str) -> Product {
        Catalog::builtin().product(id).unwrap().clone()
    }

    #[test]
    fn test_add_then_remove() {
        let mut wishlist = Wishlist::load(Storage::in_memory());
        let bag = product("7");

        let notice = wishlist.add_item(&bag).unwrap();
        assert_eq!(notice.message(), "Added Leather Tote Bag to wishlist");
        assert!(wishlist.is_in_wishlist(&bag.id));

        let notice = wishlist.remove_item(&bag.id).unwrap();
        assert_eq!(notice, Notice::Info("Removed Leather Tote Bag from wishlist".into()));
        assert!(!wishlist.is_in_wishlist(&bag.id));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::load(Storage::in_memory());
        let skirt = product("8");

        assert!(wishlist.add_item(&skirt).is_some());
        assert!(wishlist.add_item(&skirt).is_none());
        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut wishlist = Wishlist::load(Storage::in_memory());
        wishlist.add_item(&product("1")).unwrap();

        assert!(wishlist.remove_item(&ProductId::new("2")).is_none());
        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::load(Storage::in_memory());
        let scarf = product("6");

        wishlist.toggle(&scarf);
        assert!(wishlist.is_in_wishlist(&scarf.id));
        wishlist.toggle(&scarf);
        assert!(!wishlist.is_in_wishlist(&scarf.id));
    }

    #[test]
    fn test_clear_and_persist() {
        let storage = Storage::in_memory();
        let mut wishlist = Wishlist::load(storage.clone());
        wishlist.add_item(&product("1")).unwrap();
        wishlist.add_item(&product("3")).unwrap();

        let reloaded = Wishlist::load(storage.clone());
        assert_eq!(reloaded.items(), wishlist.items());

        wishlist.clear();
        assert_eq!(Wishlist::load(storage).total_items(), 0);
    }

    #[test]
    fn test_load_drops_duplicates() {
        let storage = Storage::in_memory();
        storage.save(keys::WISHLIST, &vec![product("4"), product("4"), product("5")]);

        let wishlist = Wishlist::load(storage);
        assert_eq!(wishlist.total_items(), 2);
    }

    #[test]
    fn test_load_ignores_malformed_json() {
        let store = MemoryStore::new();
        store.set(keys::WISHLIST, "[{\"id\": 1}]").unwrap();

        let wishlist = Wishlist::load(Storage::new(store));
        assert_eq!(wishlist.total_items(), 0);
    }
}
