//! Locally held record lists with optimistic mutation
//!
//! A list is fetched once; afterwards writes go to the record store and, when
//! the store accepts them, the same change is applied to the local copy
//! instead of re-fetching everything.

use crate::core::error::{ErpResult, RecordError};
use crate::core::query::Page;
use crate::core::store::ListView;
use crate::core::{Record, RecordId, RecordService};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordList<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> RecordList<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Fetch the full list from the store
    pub async fn fetch<S>(service: &S) -> ErpResult<Self>
    where
        S: RecordService<T> + ?Sized,
    {
        Ok(Self::new(service.list().await?))
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// Search, sort and paginate the list for display
    pub fn view(&self, view: &ListView) -> Page<T> {
        view.apply(&self.records)
    }

    /// Replace the row with the same id; returns false if there is none
    pub fn replace(&mut self, record: T) -> bool {
        let Some(id) = record.id() else {
            return false;
        };

        match self.records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Mutate one row in place; returns false if there is none
    pub fn apply(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(record) => {
                change(record);
                true
            }
            None => false,
        }
    }

    /// Append a row
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Remove a row by id
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == Some(id))?;
        Some(self.records.remove(index))
    }

    /// Create through the store, then append the stored record
    pub async fn create<S>(&mut self, service: &S, record: T) -> ErpResult<&T>
    where
        S: RecordService<T> + ?Sized,
    {
        let created = service.create(record).await?;
        self.records.push(created);
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// PATCH through the store, then apply `change` locally.
    ///
    /// The local list is untouched if the store rejects the request.
    pub async fn patch_with<S>(
        &mut self,
        service: &S,
        id: RecordId,
        changes: Value,
        change: impl FnOnce(&mut T),
    ) -> ErpResult<()>
    where
        S: RecordService<T> + ?Sized,
    {
        service.patch(id, changes).await?;

        if !self.apply(id, change) {
            return Err(RecordError::NotFound {
                resource: T::resource_name().to_string(),
                id,
            }
            .into());
        }
        Ok(())
    }

    /// PATCH through the store, then replace the row with the store's answer
    pub async fn patch<S>(&mut self, service: &S, id: RecordId, changes: Value) -> ErpResult<()>
    where
        S: RecordService<T> + ?Sized,
    {
        let updated = service.patch(id, changes).await?;
        if !self.replace(updated.clone()) {
            self.insert(updated);
        }
        Ok(())
    }

    /// Delete through the store, then drop the row
    pub async fn delete<S>(&mut self, service: &S, id: RecordId) -> ErpResult<()>
    where
        S: RecordService<T> + ?Sized,
    {
        service.delete(id).await?;
        self.remove(id);
        Ok(())
    }
}
