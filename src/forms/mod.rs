//! Client-side form state: list bookkeeping, inline edits and invoice creation

pub mod collection;
pub mod edit;
pub mod invoice;

pub use collection::RecordList;
pub use edit::EditSession;
pub use invoice::InvoiceForm;
