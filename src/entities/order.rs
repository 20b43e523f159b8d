use crate::core::entity::RecordId;
use crate::entities::status::ShipmentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer order entry
///
/// `customer_name` and `product_name` are filled in by the store and ignored
/// on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub customer: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,

    #[serde(rename = "statuss", default)]
    pub status: ShipmentStatus,

    pub product: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[validate(range(min = 1))]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub order_number: Option<String>,
}

crate::impl_record!(Order, "order", "orders",
    search: [order_number, customer_name, product_name],
    fields: [order_number, customer, customer_name, order_date, status, product, product_name, quantity, price, total_amount],
    ordering: "order_date",
);
