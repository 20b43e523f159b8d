//! Record store implementations

pub mod http;
pub mod in_memory;

pub use http::{ApiClient, HttpRecordService, HttpStockService};
pub use in_memory::InMemoryRecordService;
