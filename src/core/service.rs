//! Service traits for record store operations

use crate::core::entity::{Record, RecordId};
use crate::core::error::ErpResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service trait for managing records of one type
///
/// Implementations talk to a concrete record store (the REST backend, or an
/// in-memory map). Callers only see records and typed errors.
#[async_trait]
pub trait RecordService<T: Record>: Send + Sync {
    /// List all records
    async fn list(&self) -> ErpResult<Vec<T>>;

    /// Get a record by id, `None` if the store does not know it
    async fn get(&self, id: RecordId) -> ErpResult<Option<T>>;

    /// Create a new record; returns it as stored (with its id)
    async fn create(&self, record: T) -> ErpResult<T>;

    /// Replace an existing record
    async fn update(&self, id: RecordId, record: T) -> ErpResult<T>;

    /// Partially update an existing record
    ///
    /// `changes` is a JSON object with the fields to overwrite.
    async fn patch(&self, id: RecordId, changes: Value) -> ErpResult<T>;

    /// Delete a record
    async fn delete(&self, id: RecordId) -> ErpResult<()>;

    /// The most recently created record, ordered by [`Record::ordering_field`]
    async fn latest(&self) -> ErpResult<Option<T>>;
}

/// Direction and size of a manual stock correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAdjustment {
    Add(u32),
    Reduce(u32),
}

impl StockAdjustment {
    /// Path segment naming the adjustment
    pub fn action(&self) -> &'static str {
        match self {
            StockAdjustment::Add(_) => "add",
            StockAdjustment::Reduce(_) => "reduce",
        }
    }

    pub fn amount(&self) -> u32 {
        match self {
            StockAdjustment::Add(n) | StockAdjustment::Reduce(n) => *n,
        }
    }
}

/// Service trait for manual stock corrections
#[async_trait]
pub trait StockService: Send + Sync {
    /// Add to or reduce the quantity on hand of a stock row
    async fn adjust(
        &self,
        stock_id: RecordId,
        adjustment: StockAdjustment,
    ) -> ErpResult<crate::entities::Stock>;
}
