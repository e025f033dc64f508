//! Shared test harness for durable storage backends
//!
//! Provides `TestPick`, a minimal `WishlistSnapshot`, plus record fixtures
//! and the `durable_store_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod durable_store_tests;

use reels::impl_record;
use reels::wishlist::WishlistSnapshot;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TestPick: smallest useful wishlist snapshot
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestPick {
    pub id: String,
    pub label: String,
}

impl WishlistSnapshot for TestPick {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn pick(id: &str) -> TestPick {
    TestPick {
        id: id.to_string(),
        label: format!("Pick {}", id),
    }
}

/// Decode a persisted wishlist payload
pub fn decode_picks(bytes: &[u8]) -> Vec<TestPick> {
    serde_json::from_slice(bytes).expect("payload should be a JSON array of picks")
}

// ---------------------------------------------------------------------------
// TestPlayer: record covering numeric, money and enum facets
// ---------------------------------------------------------------------------

impl_record!(TestPlayer, "test_player", ["name", "club"], {
    position: String,
    age: u32,
    club: String,
    rating: u32,
    value: String,
});

pub fn test_player(id: &str, position: &str, age: u32, rating: u32, value: &str) -> TestPlayer {
    TestPlayer::with_id(
        id,
        format!("Player {}", id),
        position.to_string(),
        age,
        "GNK Dinamo".to_string(),
        rating,
        value.to_string(),
    )
}
