use crate::core::entity::RecordId;
use crate::entities::non_negative;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product or raw material kept in inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub sku: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,

    /// Vendor name as free text
    #[serde(default)]
    #[validate(length(max = 100))]
    pub vendor: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(Product, "product", "products",
    search: [name, sku, vendor],
    fields: [name, sku, price, vendor, created_at],
);
