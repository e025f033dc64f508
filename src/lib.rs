//! # Sports Reels
//!
//! Listing query engine for the Sports Reels scouting and club-management
//! pages: in-memory record stores with faceted filtering, comparator-based
//! sorting and a durable wishlist side-store.
//!
//! ## Features
//!
//! - **One generic engine**: every page is a [`RecordStore`](engine::RecordStore)
//!   parameterized by facet descriptors and a comparator table
//! - **Lenient input**: unparseable numeric bounds impose no constraint
//! - **Stable sorting**: ties keep load order
//! - **Wishlists**: snapshots persisted as JSON arrays through a
//!   [`DurableStore`](storage::DurableStore) (in-memory or LMDB)
//! - **Macro-defined records**: `impl_record!` generates the struct and its
//!   `Record` implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use reels::prelude::*;
//! use reels::domain::{catalog, pages};
//!
//! let mut store = RecordStore::new(catalog::talents(), pages::explore()).unwrap();
//! store.set_search("zagreb");
//! store.set_sort("potential").unwrap();
//!
//! let view = store.results();
//! assert_eq!(view.records()[0].name, "Filip Horvat");
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod entities;
pub mod storage;
pub mod wishlist;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{CurrentUser, Page, PageAccess, Role, SessionProvider, StaticSession, menu_for},
        entity::Record,
        facet::{Facet, FacetDescriptor, FacetValue, FilterCriteria, Selection},
        field::{FieldValue, parse_bound, parse_money},
        query::{ListingQuery, ListingSummary, ListingView, SEARCH_FACET},
        service::RecordService,
        sort::{Comparator, ComparatorTable, SortDirection, SortKey, SortMode},
        store::QueryableStore,
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, RecordError, ReelsError, StorageError, ValidationError,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Engine ===
    pub use crate::engine::{ListingLayout, ListingPage, RecordStore};
    pub use crate::wishlist::{Wishlist, WishlistSnapshot};

    // === Storage ===
    pub use crate::storage::{DurableStore, InMemoryDurableStore, InMemoryRecordService};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbDurableStore;

    // === Config ===
    pub use crate::config::{ReelsConfig, StorageConfig, WishlistKeys};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
