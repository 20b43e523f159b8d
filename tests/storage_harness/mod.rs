//! Shared test harness for record store testing
//!
//! Provides record builders, a stub REST backend served by axum on an
//! ephemeral port, and the `record_service_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod record_service_tests;
pub mod stub_backend;

pub use stub_backend::*;

use chrono::NaiveDate;
use erp_admin::config::ClientConfig;
use erp_admin::entities::{Customer, Invoice, InvoiceStatus, Stock};
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

/// An unsaved invoice for customer 1, dated 2025-03-01
pub fn invoice(number: &str, total: i64) -> Invoice {
    Invoice {
        customer: 1,
        invoice_number: number.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        total_amount: Decimal::new(total, 0),
        status: InvoiceStatus::Unpaid,
        ..Default::default()
    }
}

/// `n` unsaved invoices numbered `INV-2025-001` onwards
pub fn invoice_batch(n: u64) -> Vec<Invoice> {
    (1..=n)
        .map(|i| invoice(&format!("INV-2025-{:03}", i), 100 * i as i64))
        .collect()
}

pub fn customer(name: &str, city: &str) -> Customer {
    Customer {
        name: name.to_string(),
        city: city.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        ..Default::default()
    }
}

pub fn stock(product: i64, on_hand: u32) -> Stock {
    Stock {
        product,
        product_name: Some(format!("Product {}", product)),
        quantity_on_hand: on_hand,
        ..Default::default()
    }
}

/// Default configuration pointed at a stub backend
pub fn config_for(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ClientConfig::default_config()
    }
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Assert that a list contains exactly `n` records.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Assert the invoice numbers of a list, in order.
pub fn assert_numbers(list: &[Invoice], expected: &[&str]) {
    let numbers: Vec<&str> = list.iter().map(|i| i.invoice_number.as_str()).collect();
    assert_eq!(numbers, expected);
}
