use crate::core::entity::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A supplier of products
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Vendor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    pub description: String,

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
}

crate::impl_record!(Vendor, "vendor", "vendors",
    search: [name, city],
    fields: [name, city, state, email, mobile, website, created_at],
);
