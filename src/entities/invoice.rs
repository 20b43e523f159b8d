use crate::core::entity::RecordId;
use crate::core::numbering::InvoiceNumber;
use crate::entities::non_negative;
use crate::entities::status::InvoiceStatus;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A billing record issued to a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    pub customer: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Kept as the raw token: older invoices may not follow the current scheme
    #[validate(length(min = 1, max = 20))]
    pub invoice_number: String,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[validate(custom(function = "non_negative"))]
    pub total_amount: Decimal,

    #[serde(default)]
    pub status: InvoiceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// The invoice number, if it follows the `INV-<year>-<seq>` scheme
    pub fn parsed_number(&self) -> Option<InvoiceNumber> {
        InvoiceNumber::parse(&self.invoice_number)
    }
}

crate::impl_record!(Invoice, "invoice", "invoices",
    search: [invoice_number, customer_name, status],
    fields: [invoice_number, customer, customer_name, date, due_date, total_amount, status, created_at],
);
