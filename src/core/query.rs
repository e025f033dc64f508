//! Listing query state and result views

use crate::core::facet::FilterCriteria;
use crate::core::sort::SortMode;
use serde::{Deserialize, Serialize};

/// Facet name pages use for their free-text search box
pub const SEARCH_FACET: &str = "search";

/// Interactive query state of one listing page
///
/// A query is the filter criteria plus exactly one active sort mode. The
/// search box is an ordinary text facet registered under [`SEARCH_FACET`].
///
/// # Example
/// ```rust
/// use reels::core::query::ListingQuery;
///
/// let mut query = ListingQuery::new("rating");
/// query.criteria.set_text("search", "ajax");
/// query.criteria.set_choice("position", "Forward");
/// assert_eq!(query.sort.as_str(), "rating");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub criteria: FilterCriteria,
    pub sort: SortMode,
}

impl ListingQuery {
    pub fn new(sort: impl Into<SortMode>) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            sort: sort.into(),
        }
    }

    /// Replace the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.criteria.set_text(SEARCH_FACET, term);
        self
    }
}

/// Counts describing a listing result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    /// Records in the store before filtering
    pub total: usize,

    /// Records left after filtering
    pub matched: usize,
}

/// The filtered, sorted result of a listing query
///
/// `NoResults` is a terminal state of its own so a page can render an
/// explicit "no results" affordance instead of a blank list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a, T> {
    Results {
        records: Vec<&'a T>,
        summary: ListingSummary,
    },
    NoResults {
        summary: ListingSummary,
    },
}

impl<'a, T> ListingView<'a, T> {
    pub fn new(records: Vec<&'a T>, total: usize) -> Self {
        let summary = ListingSummary {
            total,
            matched: records.len(),
        };
        if records.is_empty() {
            ListingView::NoResults { summary }
        } else {
            ListingView::Results { records, summary }
        }
    }

    pub fn records(&self) -> &[&'a T] {
        match self {
            ListingView::Results { records, .. } => records,
            ListingView::NoResults { .. } => &[],
        }
    }

    pub fn summary(&self) -> ListingSummary {
        match self {
            ListingView::Results { summary, .. } | ListingView::NoResults { summary } => *summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListingView::NoResults { .. })
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }
}
