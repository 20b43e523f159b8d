//! Business records exchanged with the record store

pub mod macros;

pub mod customer;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod product;
pub mod purchase;
pub mod status;
pub mod stock;
pub mod vendor;

pub use customer::Customer;
pub use inventory::{Inward, Outward};
pub use invoice::Invoice;
pub use order::Order;
pub use product::Product;
pub use purchase::PurchaseOrder;
pub use status::{InvoiceStatus, InwardStatus, ShipmentStatus};
pub use stock::Stock;
pub use vendor::Vendor;

use rust_decimal::Decimal;

/// Amounts must not be negative
pub(crate) fn non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = validator::ValidationError::new("non_negative");
        error.message = Some("must not be negative".into());
        return Err(error);
    }
    Ok(())
}
