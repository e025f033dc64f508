//! Macro-generated test suite for `DurableStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use reels::storage::InMemoryDurableStore;
//!
//! durable_store_tests!(InMemoryDurableStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_read_missing_key`: unknown key reads as `None`
//! - `test_write_then_read`: bytes come back unchanged
//! - `test_overwrite_replaces`: second write wins
//! - `test_keys_are_isolated`: wishlist keys do not see each other
//! - `test_remove`: removed key reads as `None`, removing twice is fine
//! - `test_wishlist_round_trip`: a wishlist reopened on the same store sees its entries
//! - `test_toggle_scenario`: "p1" toggled on then off

/// Generate a full `DurableStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh `DurableStore + 'static` value; it is
/// re-evaluated for each test.
#[macro_export]
macro_rules! durable_store_tests {
    ($factory:expr) => {
        mod durable_store_contract_tests {
            use super::*;
            use reels::storage::DurableStore;
            use reels::wishlist::Wishlist;
            use std::sync::Arc;

            #[test]
            fn test_read_missing_key() {
                let store = $factory;
                assert_eq!(store.read("scout_wishlist").unwrap(), None);
            }

            #[test]
            fn test_write_then_read() {
                let store = $factory;
                store.write("scout_wishlist", "[\"ü\"]".as_bytes()).unwrap();
                assert_eq!(
                    store.read("scout_wishlist").unwrap(),
                    Some("[\"ü\"]".as_bytes().to_vec())
                );
            }

            #[test]
            fn test_overwrite_replaces() {
                let store = $factory;
                store.write("k", b"[1,2,3]").unwrap();
                store.write("k", b"[]").unwrap();
                assert_eq!(store.read("k").unwrap(), Some(b"[]".to_vec()));
            }

            #[test]
            fn test_keys_are_isolated() {
                let store = $factory;
                store.write("scout_wishlist", b"[1]").unwrap();
                store.write("transfer_watchlist", b"[2]").unwrap();
                assert_eq!(store.read("scout_wishlist").unwrap(), Some(b"[1]".to_vec()));
                assert_eq!(
                    store.read("transfer_watchlist").unwrap(),
                    Some(b"[2]".to_vec())
                );
                assert_eq!(store.read("ai_shortlist").unwrap(), None);
            }

            #[test]
            fn test_remove() {
                let store = $factory;
                store.write("k", b"[]").unwrap();
                store.remove("k").unwrap();
                assert_eq!(store.read("k").unwrap(), None);
                store.remove("k").unwrap();
            }

            #[test]
            fn test_wishlist_round_trip() {
                let store: Arc<dyn DurableStore> = Arc::new($factory);

                let mut first: Wishlist<TestPick> = Wishlist::new(store.clone(), "ai_shortlist");
                first.toggle(pick("r1"));
                first.toggle(pick("r2"));
                first.toggle(pick("r3"));
                first.remove("r2");

                let second: Wishlist<TestPick> = Wishlist::new(store, "ai_shortlist");
                assert_eq!(second.entries(), &[pick("r1"), pick("r3")]);
            }

            #[test]
            fn test_toggle_scenario() {
                let store: Arc<dyn DurableStore> = Arc::new($factory);
                let mut wishlist: Wishlist<TestPick> =
                    Wishlist::new(store.clone(), "scout_wishlist");

                assert!(wishlist.toggle(pick("p1")));
                let persisted = decode_picks(&store.read("scout_wishlist").unwrap().unwrap());
                assert_eq!(persisted.len(), 1);
                assert_eq!(persisted[0].id, "p1");

                assert!(!wishlist.toggle(pick("p1")));
                let persisted = decode_picks(&store.read("scout_wishlist").unwrap().unwrap());
                assert!(persisted.is_empty());
            }
        }
    };
}
