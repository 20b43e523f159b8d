//! # erp-admin
//!
//! Client library for the admin console of a small ERP: vendors, products,
//! customers, orders, purchase orders, goods movements, stock and invoices.
//!
//! ## Features
//!
//! - **Typed records** for every business entity, validated with `validator`
//! - **Record services** over the REST backend or an in-memory store
//! - **List views** with free-text search, column sort and pagination
//! - **Optimistic list mutation** applied only after the store accepts a write
//! - **Invoice numbering**: `INV-<year>-<seq>`, restarting each calendar year
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use erp_admin::prelude::*;
//!
//! let client = ApiClient::new(ClientConfig::default_config())?;
//! let invoices = client.records::<Invoice>()?;
//! let customers = client.records::<Customer>()?;
//!
//! let today = chrono::Local::now().date_naive();
//! let form = InvoiceForm::load(&invoices, &customers, today).await;
//! println!("next invoice: {}", form.invoice_number());
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod forms;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErpError, ErpResult, FieldValue, InvoiceNumber, ListView, Listing, Page, PaginationMeta,
        Record, RecordId, RecordService, SortConfig, SortDirection, StockAdjustment, StockService,
        next_invoice_number,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Records ===
    pub use crate::entities::{
        Customer, Inward, InvoiceStatus, InwardStatus, Invoice, Order, Outward, Product,
        PurchaseOrder, ShipmentStatus, Stock, Vendor,
    };

    // === Storage ===
    pub use crate::storage::{ApiClient, HttpRecordService, HttpStockService, InMemoryRecordService};

    // === Forms ===
    pub use crate::forms::{EditSession, InvoiceForm, RecordList};

    // === Config ===
    pub use crate::config::ClientConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
