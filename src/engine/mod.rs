//! Listing Query Engine
//!
//! One generic engine replaces the per-page filter/sort code: a
//! [`RecordStore`] is instantiated per page with that page's
//! [`ListingLayout`] (facet descriptors, comparator table, default sort).
//!
//! Data flow: records → [`matches`](crate::core::facet::matches) →
//! stable sort by the active comparator → [`ListingView`].

pub mod page;

pub use page::ListingPage;

use crate::core::error::{ConfigError, RecordError};
use crate::core::facet::{self, FacetDescriptor, FacetValue, FilterCriteria};
use crate::core::query::{ListingQuery, ListingView, SEARCH_FACET};
use crate::core::sort::{ComparatorTable, SortMode};
use crate::core::{QueryableStore, Record, RecordService};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Facets, comparators and default sort of one listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingLayout {
    pub facets: Vec<FacetDescriptor>,
    pub comparators: ComparatorTable,
    pub default_sort: SortMode,
}

impl ListingLayout {
    pub fn new(
        facets: Vec<FacetDescriptor>,
        comparators: ComparatorTable,
        default_sort: impl Into<SortMode>,
    ) -> Self {
        Self {
            facets,
            comparators,
            default_sort: default_sort.into(),
        }
    }

    /// Same layout with another default sort mode
    pub fn with_default_sort(mut self, mode: impl Into<SortMode>) -> Self {
        self.default_sort = mode.into();
        self
    }

    /// The default sort must be a registered mode
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comparators.contains(&self.default_sort) {
            Ok(())
        } else {
            Err(ConfigError::UnknownSortMode {
                mode: self.default_sort.to_string(),
            })
        }
    }
}

/// Page-scoped, in-memory collection of records plus its interactive query
///
/// Records are never mutated in place: [`add`](Self::add),
/// [`replace`](Self::replace) and [`remove`](Self::remove) swap whole list
/// entries. Identifiers are unique within one store.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    layout: ListingLayout,
    query: ListingQuery,
}

impl<T: Record> RecordStore<T> {
    /// Create a store from an initial collection
    ///
    /// Fails if the layout's default sort is not registered or if two
    /// records share an id.
    pub fn new(records: Vec<T>, layout: ListingLayout) -> crate::core::error::Result<Self> {
        layout.validate()?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(RecordError::AlreadyExists {
                    record_type: T::record_type().to_string(),
                    id: record.id().to_string(),
                }
                .into());
            }
        }

        let query = ListingQuery::new(layout.default_sort.clone());
        debug!(
            record_type = T::record_type(),
            count = records.len(),
            "record store created"
        );

        Ok(Self {
            records,
            layout,
            query,
        })
    }

    /// Populate a store from the persistence collaborator
    pub async fn load<S>(service: &S, layout: ListingLayout) -> anyhow::Result<Self>
    where
        S: RecordService<T> + ?Sized,
    {
        let records = service.list().await?;
        Ok(Self::new(records, layout)?)
    }

    pub fn layout(&self) -> &ListingLayout {
        &self.layout
    }

    /// All records in load order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record
    pub fn add(&mut self, record: T) -> Result<(), RecordError> {
        if self.get(record.id()).is_some() {
            return Err(RecordError::AlreadyExists {
                record_type: T::record_type().to_string(),
                id: record.id().to_string(),
            });
        }
        debug!(record_type = T::record_type(), id = record.id(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same id, keeping its list position.
    /// Returns the previous record.
    pub fn replace(&mut self, record: T) -> Result<T, RecordError> {
        let index = self.position(record.id())?;
        debug!(record_type = T::record_type(), id = record.id(), "record replaced");
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Remove a record by id, returning it
    pub fn remove(&mut self, id: &str) -> Result<T, RecordError> {
        let index = self.position(id)?;
        debug!(record_type = T::record_type(), id, "record removed");
        Ok(self.records.remove(index))
    }

    fn position(&self, id: &str) -> Result<usize, RecordError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RecordError::NotFound {
                record_type: T::record_type().to_string(),
                id: id.to_string(),
            })
    }

    /// Run an arbitrary query against the records
    pub fn query(&self, query: &ListingQuery) -> ListingView<'_, T> {
        let filtered = self.apply_filters(self.list_all(), &query.criteria);
        let sorted = self.apply_sort(filtered, &query.sort);
        ListingView::new(sorted, self.records.len())
    }

    /// Run the store's current query
    pub fn results(&self) -> ListingView<'_, T> {
        self.query(&self.query)
    }

    pub fn current_query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.query.criteria
    }

    /// Mutable access to the current filter criteria
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.query.criteria
    }

    pub fn sort_mode(&self) -> &SortMode {
        &self.query.sort
    }

    /// Replace the free-text search term
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.criteria.set_text(SEARCH_FACET, term);
    }

    pub fn set_facet(&mut self, facet: impl Into<String>, value: FacetValue) {
        self.query.criteria.set(facet, value);
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.query.criteria.clear(facet);
    }

    /// Drop every filter; the sort mode is kept
    pub fn reset_filters(&mut self) {
        self.query.criteria.clear_all();
    }

    /// Switch the active sort mode. Unknown modes are rejected and the
    /// current mode stays active.
    pub fn set_sort(&mut self, mode: impl Into<SortMode>) -> Result<(), ConfigError> {
        let mode = mode.into();
        if !self.layout.comparators.contains(&mode) {
            return Err(ConfigError::UnknownSortMode {
                mode: mode.to_string(),
            });
        }
        self.query.sort = mode;
        Ok(())
    }
}

impl<T: Record> QueryableStore<T> for RecordStore<T> {
    fn apply_filters<'a>(&self, data: Vec<&'a T>, criteria: &FilterCriteria) -> Vec<&'a T> {
        data.into_iter()
            .filter(|record| facet::matches(*record, &self.layout.facets, criteria))
            .collect()
    }

    fn apply_sort<'a>(&self, mut data: Vec<&'a T>, sort: &SortMode) -> Vec<&'a T> {
        self.layout.comparators.sort(&mut data, sort);
        data
    }

    fn list_all(&self) -> Vec<&T> {
        self.records.iter().collect()
    }
}
