//! Macros for reducing boilerplate when defining records
//!
//! These macros generate the struct and the [`Record`](crate::core::Record)
//! implementation a listing page needs for each domain type.

/// Complete macro to create a record type with its `Record` implementation
///
/// Every specific field becomes filterable and sortable through
/// `field_value`, so its type must convert into
/// [`FieldValue`](crate::core::FieldValue) (`String`, `u32`, `i64`, `f64`,
/// `bool`, or an `Option` of those).
///
/// # Example
///
/// ```rust
/// use reels::impl_record;
/// use reels::core::Record;
///
/// impl_record!(
///     Clip,
///     "clip",
///     ["name", "competition"],
///     {
///         competition: String,
///         minute: u32,
///     }
/// );
///
/// let clip = Clip::with_id("c1", "Late winner".to_string(), "Cup".to_string(), 90);
/// assert_eq!(clip.id(), "c1");
/// assert_eq!(clip.numeric_value("minute"), Some(90.0));
/// assert_eq!(Clip::search_fields(), &["name", "competition"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $type_name:expr,
        [ $( $search_field:expr ),* $(,)? ],
        {
            $( $specific_field:ident : $specific_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Identifier, unique within a Record Store
            pub id: String,

            /// Display name
            pub name: String,
            $( pub $specific_field : $specific_type ),*
        }

        impl $crate::core::entity::Record for $type {
            fn record_type() -> &'static str {
                $type_name
            }

            fn search_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => Some($crate::core::field::FieldValue::String(self.id.clone())),
                    "name" => Some($crate::core::field::FieldValue::String(self.name.clone())),
                    $(
                        stringify!($specific_field) => Some(
                            $crate::core::field::FieldValue::from(self.$specific_field.clone())
                        ),
                    )*
                    _ => None,
                }
            }
        }

        impl $type {
            /// Create a new record with a freshly generated id
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                name: String,
                $( $specific_field: $specific_type ),*
            ) -> Self {
                Self {
                    id: ::uuid::Uuid::new_v4().to_string(),
                    name,
                    $( $specific_field ),*
                }
            }

            /// Create a record with a known id (mock literals, backend rows)
            #[allow(clippy::too_many_arguments)]
            pub fn with_id(
                id: impl Into<String>,
                name: String,
                $( $specific_field: $specific_type ),*
            ) -> Self {
                Self {
                    id: id.into(),
                    name,
                    $( $specific_field ),*
                }
            }
        }
    };
}
