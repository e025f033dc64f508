//! Core module containing fundamental traits and types for the listing engine

pub mod auth;
pub mod entity;
pub mod error;
pub mod facet;
pub mod field;
pub mod query;
pub mod service;
pub mod sort;
pub mod store;
pub mod validation;

pub use auth::{CurrentUser, Page, PageAccess, Role, SessionProvider, StaticSession};
pub use entity::Record;
pub use error::{ConfigError, RecordError, ReelsError, StorageError, ValidationError};
pub use facet::{Facet, FacetDescriptor, FacetValue, FilterCriteria, Selection};
pub use field::FieldValue;
pub use query::{ListingQuery, ListingSummary, ListingView, SEARCH_FACET};
pub use service::RecordService;
pub use sort::{Comparator, ComparatorTable, SortDirection, SortKey, SortMode};
pub use store::QueryableStore;
