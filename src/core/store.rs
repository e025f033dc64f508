//! Store traits for filtering and sorting

use crate::core::facet::FilterCriteria;
use crate::core::sort::SortMode;

/// Trait for stores that support filtering and sorting
///
/// Implemented by the Record Store so pages can run the two pipeline stages
/// separately (e.g. to count matches before sorting).
pub trait QueryableStore<T> {
    /// Apply filters to a collection of records
    ///
    /// # Parameters
    /// - `data`: Records to filter, in their current order
    /// - `criteria`: Current facet values
    ///
    /// # Returns
    /// Records satisfying every active facet, order preserved
    fn apply_filters<'a>(&self, data: Vec<&'a T>, criteria: &FilterCriteria) -> Vec<&'a T>;

    /// Apply sorting to a collection of records
    ///
    /// # Parameters
    /// - `data`: Records to sort
    /// - `sort`: Registered sort mode
    ///
    /// # Returns
    /// Stably sorted records; unknown modes return the input order
    fn apply_sort<'a>(&self, data: Vec<&'a T>, sort: &SortMode) -> Vec<&'a T>;

    /// Get all records (unfiltered, unsorted)
    fn list_all(&self) -> Vec<&T>;
}
