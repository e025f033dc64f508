//! Integration tests for InMemoryDurableStore using the storage test harness.
//!
//! This file invokes `durable_store_tests!` to validate that
//! InMemoryDurableStore fully conforms to the DurableStore contract.

#[macro_use]
mod storage_harness;

use reels::storage::InMemoryDurableStore;
use storage_harness::*;

durable_store_tests!(InMemoryDurableStore::new());

#[test]
fn test_pages_share_one_store() {
    use reels::wishlist::Wishlist;
    use std::sync::Arc;

    let store = InMemoryDurableStore::new();
    let mut explore: Wishlist<TestPick> = Wishlist::new(Arc::new(store.clone()), "scout_wishlist");
    explore.toggle(pick("t1"));

    let wishlist_page: Wishlist<TestPick> = Wishlist::new(Arc::new(store), "scout_wishlist");
    assert!(wishlist_page.is_selected("t1"));
}
