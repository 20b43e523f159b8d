use crate::core::entity::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// On-hand quantity of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Stock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub product: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default)]
    pub quantity_on_hand: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

crate::impl_record!(Stock, "stock", "stock",
    search: [product_name],
    fields: [product, product_name, quantity_on_hand, last_updated],
    ordering: "last_updated",
);
