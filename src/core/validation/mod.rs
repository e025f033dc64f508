//! Validation and filtering system
//!
//! Form steps declare, per field, a chain of filters (normalization) followed
//! by a chain of validators. [`FieldRules::apply`] runs both over a map of raw
//! values and collects every failure instead of stopping at the first one.

pub mod filters;
pub mod validators;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use std::sync::Arc;

type FilterFn = Arc<dyn Fn(&str, FieldValue) -> FieldValue + Send + Sync>;
type ValidatorFn = Arc<dyn Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync>;

#[derive(Clone, Default)]
struct FieldRule {
    filters: Vec<FilterFn>,
    validators: Vec<ValidatorFn>,
}

/// Filters and validators for a set of named fields
#[derive(Clone, Default)]
pub struct FieldRules {
    rules: IndexMap<String, FieldRule>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter for `field`
    pub fn filter<F>(mut self, field: &str, filter: F) -> Self
    where
        F: Fn(&str, FieldValue) -> FieldValue + Send + Sync + 'static,
    {
        self.rules
            .entry(field.to_string())
            .or_default()
            .filters
            .push(Arc::new(filter));
        self
    }

    /// Add a validator for `field`
    pub fn validate<V>(mut self, field: &str, validator: V) -> Self
    where
        V: Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules
            .entry(field.to_string())
            .or_default()
            .validators
            .push(Arc::new(validator));
        self
    }

    /// Fields covered by these rules, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Filter every covered field in `values`, then validate it.
    ///
    /// Missing fields are validated as [`FieldValue::Null`]. Filtered values
    /// are written back into `values`.
    pub fn apply(&self, values: &mut IndexMap<String, FieldValue>) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for (field, rule) in &self.rules {
            let raw = values.get(field).cloned().unwrap_or(FieldValue::Null);
            let filtered = rule
                .filters
                .iter()
                .fold(raw, |value, filter| filter(field, value));

            for validator in &rule.validators {
                if let Err(message) = validator(field, &filtered) {
                    errors.push(FieldValidationError::new(field.as_str(), message));
                }
            }

            if !filtered.is_null() {
                values.insert(field.clone(), filtered);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}
