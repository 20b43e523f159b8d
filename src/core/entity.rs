//! Record trait defining the core abstraction for all business entities

use crate::core::field::FieldValue;
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

/// Identifier assigned by the record store
pub type RecordId = i64;

/// Base trait for every business record fetched from the record store.
///
/// A record knows:
/// - the resource it belongs to (used to look up its endpoint)
/// - its store-assigned id, if it has been saved
/// - which fields are searchable, and how to read any field by name
///
/// Field access is dynamic so list views can search and sort any record type
/// by column name.
pub trait Record:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// The plural resource name used as configuration key (e.g., "invoices")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "invoice")
    fn resource_name_singular() -> &'static str;

    /// Fields matched by free-text search
    fn indexed_fields() -> &'static [&'static str];

    /// Field used to find the most recently created record
    fn ordering_field() -> &'static str {
        "created_at"
    }

    /// Store-assigned id, `None` until saved
    fn id(&self) -> Option<RecordId>;

    /// Set the store-assigned id
    fn set_id(&mut self, id: RecordId);

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether the record has been saved by the store
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }

    /// Case-insensitive substring match against the indexed fields.
    ///
    /// An empty (or blank) query matches every record.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        Self::indexed_fields().iter().any(|field| {
            self.field_value(field)
                .map(|value| value.search_text().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}
