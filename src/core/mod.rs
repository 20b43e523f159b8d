//! Core module containing fundamental traits and types for the crate

pub mod entity;
pub mod error;
pub mod field;
pub mod numbering;
pub mod query;
pub mod service;
pub mod store;

pub use entity::{Record, RecordId};
pub use error::{ApiError, ConfigError, ErpError, ErpResult, RecordError, ValidationError};
pub use field::{FieldValue, ToFieldValue};
pub use numbering::{InvoiceNumber, next_invoice_number};
pub use query::{Listing, Page, PaginationMeta};
pub use service::{RecordService, StockAdjustment, StockService};
pub use store::{ListView, SortConfig, SortDirection};
