//! Record trait defining the core abstraction for listed domain entities

use crate::core::field::FieldValue;

/// Base trait for every record a page lists.
///
/// A record has:
/// - id: Identifier, unique within a Record Store
/// - record_type: Singular type name (e.g., "player", "transfer_listing")
/// - name: Human-readable display name
/// - field_value: Dynamic access to filterable and sortable attributes
///
/// Records are treated as immutable values: stores replace them, never
/// mutate them in place.
pub trait Record: Clone + Send + Sync + 'static {
    /// The singular type name used in logs and errors
    fn record_type() -> &'static str;

    /// List of attributes searched by free-text facets by default
    fn search_fields() -> &'static [&'static str];

    /// Get the identifier of this record
    fn id(&self) -> &str;

    /// Get the display name of this record
    fn name(&self) -> &str;

    /// Get the value of a specific attribute by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Get an attribute as text if it is a string value
    fn text_value(&self, field: &str) -> Option<String> {
        match self.field_value(field)? {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get an attribute as a number if it is numeric
    fn numeric_value(&self, field: &str) -> Option<f64> {
        self.field_value(field)?.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: String,
        name: String,
        age: i64,
    }

    impl Record for TestRecord {
        fn record_type() -> &'static str {
            "test_record"
        }

        fn search_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::String(self.name.clone())),
                "age" => Some(FieldValue::Integer(self.age)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_typed_accessors() {
        let record = TestRecord {
            id: "t1".to_string(),
            name: "Ada".to_string(),
            age: 21,
        };

        assert_eq!(record.text_value("name"), Some("Ada".to_string()));
        assert_eq!(record.text_value("age"), None);
        assert_eq!(record.numeric_value("age"), Some(21.0));
        assert_eq!(record.numeric_value("missing"), None);
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(TestRecord::record_type(), "test_record");
        assert_eq!(TestRecord::search_fields(), &["name"]);
    }
}
