//! Comparator Registry
//!
//! Each page registers its sort modes in a [`ComparatorTable`]. A mode maps to
//! a single [`Comparator`]: one attribute, one direction, one key kind. Ties
//! are never broken by a secondary key, so applying a comparator with the
//! stable `sort_by` keeps equal records in their filtered order.

use crate::core::entity::Record;
use crate::core::field::{FieldValue, parse_money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of a registered sort mode (e.g., `"rating"`, `"value"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortMode(String);

impl SortMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// How the attribute is turned into a comparable key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Integer or float attribute; missing values count as 0
    Numeric,
    /// Currency-formatted string parsed with [`parse_money`]; unparseable counts as 0
    Money,
    /// Case-insensitive text
    Text,
}

/// A single-attribute ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparator {
    pub field: String,
    pub direction: SortDirection,
    pub key: SortKey,
}

impl Comparator {
    pub fn new(field: impl Into<String>, key: SortKey, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
            key,
        }
    }

    pub fn numeric_desc(field: impl Into<String>) -> Self {
        Self::new(field, SortKey::Numeric, SortDirection::Descending)
    }

    pub fn numeric_asc(field: impl Into<String>) -> Self {
        Self::new(field, SortKey::Numeric, SortDirection::Ascending)
    }

    pub fn money_desc(field: impl Into<String>) -> Self {
        Self::new(field, SortKey::Money, SortDirection::Descending)
    }

    pub fn text_asc(field: impl Into<String>) -> Self {
        Self::new(field, SortKey::Text, SortDirection::Ascending)
    }

    /// Compare two records under this comparator
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        let ordering = match self.key {
            SortKey::Numeric | SortKey::Money => {
                let ka = self.numeric_key(a);
                let kb = self.numeric_key(b);
                ka.total_cmp(&kb)
            }
            SortKey::Text => self.text_key(a).cmp(&self.text_key(b)),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Non-finite values count as 0 so the ordering stays total
    fn numeric_key<T: Record>(&self, record: &T) -> f64 {
        let key = match (self.key, record.field_value(&self.field)) {
            (SortKey::Money, Some(FieldValue::String(raw))) => parse_money(&raw),
            (_, Some(value)) => value.as_f64().unwrap_or(0.0),
            (_, None) => 0.0,
        };
        if key.is_finite() { key } else { 0.0 }
    }

    fn text_key<T: Record>(&self, record: &T) -> String {
        record
            .text_value(&self.field)
            .map(|s| s.to_lowercase())
            .unwrap_or_default()
    }
}

/// Named comparators keyed by sort mode, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparatorTable {
    modes: IndexMap<SortMode, Comparator>,
}

impl ComparatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration
    pub fn with(mut self, mode: impl Into<SortMode>, comparator: Comparator) -> Self {
        self.insert(mode, comparator);
        self
    }

    pub fn insert(&mut self, mode: impl Into<SortMode>, comparator: Comparator) {
        self.modes.insert(mode.into(), comparator);
    }

    pub fn get(&self, mode: &SortMode) -> Option<&Comparator> {
        self.modes.get(mode)
    }

    pub fn contains(&self, mode: &SortMode) -> bool {
        self.modes.contains_key(mode)
    }

    /// Registered modes in registration order
    pub fn modes(&self) -> impl Iterator<Item = &SortMode> {
        self.modes.keys()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Comparison function for `mode`, usable with the stable `sort_by`
    pub fn comparator<T: Record>(&self, mode: &SortMode) -> Option<impl Fn(&T, &T) -> Ordering + '_> {
        let comparator = self.get(mode)?;
        Some(move |a: &T, b: &T| comparator.compare(a, b))
    }

    /// Stable-sort borrowed records in place. Unknown modes leave the order untouched.
    pub fn sort<T: Record>(&self, records: &mut [&T], mode: &SortMode) {
        if let Some(compare) = self.comparator::<T>(mode) {
            records.sort_by(|a, b| compare(*a, *b));
        }
    }
}
