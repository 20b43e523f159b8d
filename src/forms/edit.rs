//! Inline editing of a single row

use crate::core::error::{ErpResult, RecordError};
use crate::core::{Record, RecordId, RecordService};
use crate::forms::collection::RecordList;
use validator::Validate;

/// An in-progress edit of a stored record.
///
/// The draft is a copy; nothing reaches the store or the list until
/// [`EditSession::commit`] succeeds.
#[derive(Debug, Clone)]
pub struct EditSession<T: Record> {
    id: RecordId,
    original: T,
    draft: T,
}

impl<T: Record> EditSession<T> {
    /// Start editing a record; it must have been saved
    pub fn start(record: &T) -> ErpResult<Self> {
        let id = record.id().ok_or_else(|| RecordError::NotPersisted {
            resource: T::resource_name().to_string(),
        })?;

        Ok(Self {
            id,
            original: record.clone(),
            draft: record.clone(),
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Discard the draft
    pub fn cancel(self) -> T {
        self.original
    }

    /// Validate the draft, send it to the store and replace the row in `list`.
    ///
    /// On error the session is left as it was so the user can fix the draft.
    pub async fn commit<S>(&self, service: &S, list: &mut RecordList<T>) -> ErpResult<T>
    where
        S: RecordService<T> + ?Sized,
    {
        self.draft.validate()?;

        let updated = service.update(self.id, self.draft.clone()).await?;
        list.replace(updated.clone());

        Ok(updated)
    }
}

impl<T: Record + PartialEq> EditSession<T> {
    /// Whether the draft differs from the stored record
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }
}
