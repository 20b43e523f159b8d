use crate::core::entity::RecordId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A purchase order placed with a vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PurchaseOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub vendor: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,

    /// Generated by the store (`#PO` followed by six digits)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub reference_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[validate(range(min = 1))]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

crate::impl_record!(PurchaseOrder, "purchase_order", "purchase_orders",
    search: [reference_number, vendor_name, product_name],
    fields: [reference_number, vendor, vendor_name, order_date, product, product_name, quantity, cost_price, total_amount],
    ordering: "order_date",
);
