use crate::core::entity::RecordId;
use crate::entities::non_negative;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer, with its accounts-receivable terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    // General information
    #[serde(default)]
    #[validate(length(max = 255))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub city: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub state: String,

    #[serde(default)]
    #[validate(length(max = 10))]
    pub zip: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub country: String,

    #[serde(default)]
    #[validate(length(max = 15))]
    pub gstin: String,

    #[serde(default)]
    #[validate(length(max = 15))]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    #[serde(rename = "mobaile", default)]
    #[validate(length(max = 10))]
    pub mobile: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub website: Option<String>,

    #[serde(rename = "craeted_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    // Accounts receivable
    #[serde(default)]
    #[validate(length(max = 50))]
    pub payment_terms: String,

    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub credit_limit: Decimal,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub credit_days: i64,
}

crate::impl_record!(Customer, "customer", "customers",
    search: [name, city, email],
    fields: [name, city, state, country, email, credit_limit, credit_days, created_at],
);
