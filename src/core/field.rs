//! Field value types used for searching and sorting records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text used for free-text search
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Decimal(d) => d.to_string(),
            FieldValue::Date(d) => d.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => String::new(),
        }
    }

    /// Total order used by list sorting.
    ///
    /// Null sorts before everything. Integers and decimals compare
    /// numerically, dates and datetimes chronologically (a date counts as its
    /// midnight UTC). Any other mix falls back to comparing the search text.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Null, _) => Ordering::Less,
            (_, FieldValue::Null) => Ordering::Greater,
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Decimal(b)) => Decimal::from(*a).cmp(b),
            (FieldValue::Decimal(a), FieldValue::Integer(b)) => a.cmp(&Decimal::from(*b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::DateTime(b)) => midnight(a).cmp(b),
            (FieldValue::DateTime(a), FieldValue::Date(b)) => a.cmp(&midnight(b)),
            (a, b) => a.search_text().cmp(&b.search_text()),
        }
    }
}

fn midnight(date: &NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Conversion of record fields into [`FieldValue`]
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for u32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl ToFieldValue for Decimal {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Decimal(*self)
    }
}

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref()
            .map(ToFieldValue::to_field_value)
            .unwrap_or(FieldValue::Null)
    }
}
