//! In-memory implementation of RecordService for testing and development

use crate::core::error::{ErpError, ErpResult, RecordError, ValidationError};
use crate::core::{Record, RecordId, RecordService, StockAdjustment, StockService};
use crate::entities::Stock;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use validator::Validate;

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

/// In-memory record service
///
/// Ids are assigned sequentially from 1, so the highest id is the most
/// recently created record. Uses RwLock for thread-safe access.
#[derive(Debug)]
pub struct InMemoryRecordService<T: Record> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T: Record> Clone for InMemoryRecordService<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Record> InMemoryRecordService<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-filled with records, assigning ids in order.
    ///
    /// Records are inserted without validation.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                let id = index as RecordId + 1;
                record.set_id(id);
                (id, record)
            })
            .collect::<BTreeMap<_, _>>();
        let next_id = rows.len() as RecordId + 1;

        Self {
            table: Arc::new(RwLock::new(Table { rows, next_id })),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn not_found(id: RecordId) -> ErpError {
        RecordError::NotFound {
            resource: T::resource_name().to_string(),
            id,
        }
        .into()
    }

    fn read_lock(&self) -> ErpResult<std::sync::RwLockReadGuard<'_, Table<T>>> {
        self.table
            .read()
            .map_err(|e| ErpError::Internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> ErpResult<std::sync::RwLockWriteGuard<'_, Table<T>>> {
        self.table
            .write()
            .map_err(|e| ErpError::Internal(format!("Failed to acquire write lock: {}", e)))
    }
}

impl<T: Record> Default for InMemoryRecordService<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite the keys of `record` with those of `changes`
fn merge_fields<T: Record>(record: &T, changes: Value) -> ErpResult<T> {
    let Value::Object(changes) = changes else {
        return Err(ValidationError::InvalidJson {
            message: "patch body must be a JSON object".to_string(),
        }
        .into());
    };

    let mut current = serde_json::to_value(record).map_err(|e| RecordError::SerializationError {
        resource: T::resource_name().to_string(),
        message: e.to_string(),
    })?;

    if let Value::Object(fields) = &mut current {
        for (key, value) in changes {
            fields.insert(key, value);
        }
    }

    Ok(serde_json::from_value(current)?)
}

#[async_trait]
impl<T: Record> RecordService<T> for InMemoryRecordService<T> {
    async fn list(&self) -> ErpResult<Vec<T>> {
        let table = self.read_lock()?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: RecordId) -> ErpResult<Option<T>> {
        let table = self.read_lock()?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, mut record: T) -> ErpResult<T> {
        record.validate()?;

        let mut table = self.write_lock()?;
        let id = table.next_id;
        table.next_id += 1;

        record.set_id(id);
        table.rows.insert(id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: RecordId, mut record: T) -> ErpResult<T> {
        record.validate()?;

        let mut table = self.write_lock()?;
        let slot = table.rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;

        record.set_id(id);
        *slot = record.clone();

        Ok(record)
    }

    async fn patch(&self, id: RecordId, changes: Value) -> ErpResult<T> {
        let mut table = self.write_lock()?;
        let slot = table.rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;

        let mut patched = merge_fields(slot, changes)?;
        patched.set_id(id);
        patched.validate()?;
        *slot = patched.clone();

        Ok(patched)
    }

    async fn delete(&self, id: RecordId) -> ErpResult<()> {
        let mut table = self.write_lock()?;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn latest(&self) -> ErpResult<Option<T>> {
        let table = self.read_lock()?;
        Ok(table.rows.values().next_back().cloned())
    }
}

#[async_trait]
impl StockService for InMemoryRecordService<Stock> {
    async fn adjust(&self, stock_id: RecordId, adjustment: StockAdjustment) -> ErpResult<Stock> {
        let mut table = self.write_lock()?;
        let stock = table
            .rows
            .get_mut(&stock_id)
            .ok_or_else(|| Self::not_found(stock_id))?;

        let on_hand = stock.quantity_on_hand;
        stock.quantity_on_hand = match adjustment {
            StockAdjustment::Add(amount) => on_hand.saturating_add(amount),
            StockAdjustment::Reduce(amount) => {
                on_hand
                    .checked_sub(amount)
                    .ok_or(ValidationError::InsufficientStock {
                        stock_id,
                        on_hand,
                        requested: amount,
                    })?
            }
        };
        stock.last_updated = Some(Utc::now());

        Ok(stock.clone())
    }
}
