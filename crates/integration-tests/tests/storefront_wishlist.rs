//! Integration tests for wishlist persistence.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use atelier_core::ProductId;
use atelier_integration_tests::TestContext;

#[test]
fn test_wishlist_survives_reopen() {
    let ctx = TestContext::new();

    {
        let mut shop = ctx.open();
        for id in ["3", "7", "3"] {
            let product = shop.product(id).unwrap().clone();
            shop.wishlist_mut().add_item(&product);
        }
    }

    let shop = ctx.open();
    let wishlist = shop.wishlist();
    assert_eq!(wishlist.total_items(), 2);
    assert!(wishlist.is_in_wishlist(&ProductId::new("3")));
    assert!(wishlist.is_in_wishlist(&ProductId::new("7")));
    assert!(!wishlist.is_in_wishlist(&ProductId::new("1")));
}

#[test]
fn test_toggle_round_trip() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    let scarf = shop.product("6").unwrap().clone();

    let notice = shop.wishlist_mut().toggle(&scarf).unwrap();
    assert_eq!(notice.message(), "Added Silk Scarf to wishlist");
    assert!(ctx.open().wishlist().is_in_wishlist(&scarf.id));

    let notice = shop.wishlist_mut().toggle(&scarf).unwrap();
    assert_eq!(notice.message(), "Removed Silk Scarf from wishlist");
    assert!(!ctx.open().wishlist().is_in_wishlist(&scarf.id));
}

#[test]
fn test_wishlist_and_cart_are_independent() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    let coat = shop.product("1").unwrap().clone();

    shop.wishlist_mut().add_item(&coat);
    shop.cart_mut().add_item(&coat, 1, "L").unwrap();
    shop.wishlist_mut().clear();

    let reopened = ctx.open();
    assert_eq!(reopened.wishlist().total_items(), 0);
    assert_eq!(reopened.cart().total_items(), 1);
}
