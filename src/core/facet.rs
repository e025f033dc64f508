//! Predicate Filter Set
//!
//! A page declares its facets once as a list of [`FacetDescriptor`]s. The
//! interactive state lives in [`FilterCriteria`], a map from facet name to the
//! user's current [`FacetValue`]. [`matches`] is the conjunction of every
//! active facet.
//!
//! Inactive means: no entry for the facet, an empty text term, a range with
//! no parseable bound, or [`Selection::All`].

use crate::core::entity::Record;
use crate::core::field::parse_bound;
use crate::core::query::SEARCH_FACET;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kind of predicate a facet applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Facet {
    /// Case-insensitive substring over several text attributes (OR)
    Text { fields: Vec<String> },

    /// Inclusive numeric bounds over one attribute
    Range { field: String },

    /// Exact, case-sensitive equality over one attribute
    Enum { field: String },
}

/// A named facet declared by a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub facet: Facet,
}

impl FacetDescriptor {
    pub fn text(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            facet: Facet::Text {
                fields: fields.iter().map(|f| f.to_string()).collect(),
            },
        }
    }

    /// The page search box, over the record type's own search fields
    pub fn search<T: Record>() -> Self {
        Self::text(SEARCH_FACET, T::search_fields())
    }

    pub fn range(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facet: Facet::Range {
                field: field.into(),
            },
        }
    }

    pub fn enumeration(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facet: Facet::Enum {
                field: field.into(),
            },
        }
    }

    /// Evaluate this facet for one record.
    ///
    /// A value whose kind does not match the facet's kind imposes no
    /// constraint.
    pub fn admits<T: Record>(&self, record: &T, value: &FacetValue) -> bool {
        match (&self.facet, value) {
            (Facet::Text { fields }, FacetValue::Text(term)) => text_matches(record, fields, term),
            (Facet::Range { field }, FacetValue::Range { min, max }) => {
                range_matches(record, field, min.as_deref(), max.as_deref())
            }
            (Facet::Enum { field }, FacetValue::Enum(selection)) => match selection {
                Selection::All => true,
                Selection::Only(expected) => record
                    .text_value(field)
                    .is_some_and(|actual| &actual == expected),
            },
            _ => true,
        }
    }
}

/// An enum facet selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Build a selection from a selector widget value, where `"all"` and the
    /// empty string mean no constraint.
    pub fn from_choice(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }
}

/// The user's current value for one facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetValue {
    Text(String),
    /// Raw, possibly partially typed, bound text
    Range {
        min: Option<String>,
        max: Option<String>,
    },
    Enum(Selection),
}

impl FacetValue {
    /// Whether this value constrains anything at all
    pub fn is_active(&self) -> bool {
        match self {
            FacetValue::Text(term) => !term.is_empty(),
            FacetValue::Range { min, max } => {
                min.as_deref().and_then(parse_bound).is_some()
                    || max.as_deref().and_then(parse_bound).is_some()
            }
            FacetValue::Enum(selection) => *selection != Selection::All,
        }
    }
}

/// Mapping from facet name to the current selector value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    values: IndexMap<String, FacetValue>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, facet: impl Into<String>, value: FacetValue) -> Self {
        self.set(facet, value);
        self
    }

    pub fn set(&mut self, facet: impl Into<String>, value: FacetValue) {
        self.values.insert(facet.into(), value);
    }

    /// Set the free-text term of a text facet
    pub fn set_text(&mut self, facet: impl Into<String>, term: impl Into<String>) {
        self.set(facet, FacetValue::Text(term.into()));
    }

    /// Set the enum selection of an equality facet from a selector value
    pub fn set_choice(&mut self, facet: impl Into<String>, raw: &str) {
        self.set(facet, FacetValue::Enum(Selection::from_choice(raw)));
    }

    /// Set the lower bound of a range facet, keeping its upper bound
    pub fn set_min(&mut self, facet: impl Into<String>, raw: impl Into<String>) {
        self.update_range(facet.into(), Some(raw.into()), None);
    }

    /// Set the upper bound of a range facet, keeping its lower bound
    pub fn set_max(&mut self, facet: impl Into<String>, raw: impl Into<String>) {
        self.update_range(facet.into(), None, Some(raw.into()));
    }

    fn update_range(&mut self, facet: String, new_min: Option<String>, new_max: Option<String>) {
        let entry = self.values.entry(facet).or_insert(FacetValue::Range {
            min: None,
            max: None,
        });
        match entry {
            FacetValue::Range { min, max } => {
                if new_min.is_some() {
                    *min = new_min;
                }
                if new_max.is_some() {
                    *max = new_max;
                }
            }
            other => {
                *other = FacetValue::Range {
                    min: new_min,
                    max: new_max,
                }
            }
        }
    }

    pub fn get(&self, facet: &str) -> Option<&FacetValue> {
        self.values.get(facet)
    }

    pub fn clear(&mut self, facet: &str) -> Option<FacetValue> {
        self.values.shift_remove(facet)
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// True when no facet constrains anything
    pub fn is_identity(&self) -> bool {
        self.values.values().all(|value| !value.is_active())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FacetValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// True iff every active facet in `criteria` is satisfied by `record`.
///
/// Criteria entries without a matching descriptor are ignored.
pub fn matches<T: Record>(
    record: &T,
    descriptors: &[FacetDescriptor],
    criteria: &FilterCriteria,
) -> bool {
    descriptors.iter().all(|descriptor| {
        criteria
            .get(&descriptor.name)
            .is_none_or(|value| descriptor.admits(record, value))
    })
}

fn text_matches<T: Record>(record: &T, fields: &[String], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|field| {
        record
            .text_value(field)
            .is_some_and(|haystack| haystack.to_lowercase().contains(&needle))
    })
}

fn range_matches<T: Record>(record: &T, field: &str, min: Option<&str>, max: Option<&str>) -> bool {
    let min = min.and_then(parse_bound);
    let max = max.and_then(parse_bound);
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = record.numeric_value(field) else {
        return false;
    };
    min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
}
