//! Macros for reducing boilerplate when defining records
//!
//! Every record struct has an `id: Option<RecordId>` field; the macro
//! generates the [`Record`](crate::core::entity::Record) implementation from
//! the lists of searchable and sortable fields.

/// Implement [`Record`](crate::core::entity::Record) for a struct.
///
/// - `search`: fields matched by free-text search (must also appear in `fields`)
/// - `fields`: fields readable by name for sorting; each type must implement
///   [`ToFieldValue`](crate::core::field::ToFieldValue)
/// - `ordering` (optional): field used to find the latest record, defaults to
///   `created_at`
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Vendor, "vendor", "vendors",
///     search: [name, city],
///     fields: [name, city, email, created_at],
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        search: [ $( $indexed:ident ),* $(,)? ],
        fields: [ $( $field:ident ),* $(,)? ],
        ordering: $ordering:expr
        $(,)?
    ) => {
        impl $crate::core::entity::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn indexed_fields() -> &'static [&'static str] {
                &[ $( stringify!($indexed) ),* ]
            }

            fn ordering_field() -> &'static str {
                $ordering
            }

            fn id(&self) -> Option<$crate::core::entity::RecordId> {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::entity::RecordId) {
                self.id = Some(id);
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                use $crate::core::field::ToFieldValue;

                match field {
                    "id" => Some(self.id.to_field_value()),
                    $( stringify!($field) => Some(self.$field.to_field_value()), )*
                    _ => None,
                }
            }
        }
    };

    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        search: [ $( $indexed:ident ),* $(,)? ],
        fields: [ $( $field:ident ),* $(,)? ]
        $(,)?
    ) => {
        $crate::impl_record!(
            $type, $singular, $plural,
            search: [ $( $indexed ),* ],
            fields: [ $( $field ),* ],
            ordering: "created_at"
        );
    };
}
