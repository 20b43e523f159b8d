//! Goods movements: receipts against purchase orders and shipments against
//! customer orders

use crate::core::entity::RecordId;
use crate::entities::status::{InwardStatus, ShipmentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Goods received against a purchase order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Inward {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub purchase_order: RecordId,

    /// Set by the store when the receipt is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 100))]
    pub received_by: String,

    #[serde(default)]
    pub remarks: String,

    #[serde(default)]
    pub status: InwardStatus,
}

crate::impl_record!(Inward, "inward", "inwards",
    search: [received_by, remarks],
    fields: [purchase_order, received_date, received_by, remarks, status],
    ordering: "received_date",
);

/// Goods shipped against a customer order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Outward {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub order: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 100))]
    pub shipped_by: String,

    #[serde(default)]
    pub remarks: String,

    #[serde(default)]
    pub status: ShipmentStatus,
}

crate::impl_record!(Outward, "outward", "outwards",
    search: [shipped_by, remarks],
    fields: [order, shipped_date, shipped_by, remarks, status],
    ordering: "shipped_date",
);
