//! Workflow statuses shared by several records

use crate::core::field::{FieldValue, ToFieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every status, in workflow order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire name of the status
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToFieldValue for $name {
            fn to_field_value(&self) -> FieldValue {
                FieldValue::String(self.as_str().to_string())
            }
        }
    };
}

status_enum! {
    /// Status of a customer order or an outward shipment
    ShipmentStatus {
        #[default]
        Pending => "pending",
        Shipped => "shipped",
        Cancelled => "cancelled",
    }
}

status_enum! {
    /// Status of goods received against a purchase order
    InwardStatus {
        #[default]
        Pending => "pending",
        Received => "received",
        Cancelled => "cancelled",
    }
}

status_enum! {
    /// Status of an invoice
    ///
    /// The store knows draft/sent/paid/overdue; the creation form offers
    /// unpaid/paid/cancelled. Both sets are accepted.
    InvoiceStatus {
        #[default]
        Draft => "draft",
        Sent => "sent",
        Unpaid => "unpaid",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
}

impl InvoiceStatus {
    /// Whether the invoice still expects a payment
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::Sent | InvoiceStatus::Unpaid | InvoiceStatus::Overdue
        )
    }
}
