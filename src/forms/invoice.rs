//! Invoice creation form
//!
//! Opening the form fetches the most recent invoice and the customer list
//! together, then proposes the next invoice number. The number is read-only
//! for the user; the record store has the final say on uniqueness.

use crate::core::error::ErpResult;
use crate::core::numbering::{InvoiceNumber, next_invoice_number};
use crate::core::{RecordId, RecordService};
use crate::entities::{Customer, Invoice, InvoiceStatus};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct InvoiceForm {
    invoice_number: InvoiceNumber,

    #[validate(required(message = "select a customer"))]
    pub customer: Option<RecordId>,

    pub date: NaiveDate,

    #[validate(required(message = "due date is required"))]
    pub due_date: Option<NaiveDate>,

    #[validate(required(message = "total amount is required"))]
    pub total_amount: Option<Decimal>,

    pub status: InvoiceStatus,

    pub notes: String,

    customers: Vec<Customer>,
}

impl InvoiceForm {
    /// Blank form for `today`, numbered after `latest`
    pub fn initial(latest: Option<&str>, today: NaiveDate) -> Self {
        Self {
            invoice_number: next_invoice_number(latest, today.year()),
            customer: None,
            date: today,
            due_date: None,
            total_amount: None,
            status: InvoiceStatus::Unpaid,
            notes: String::new(),
            customers: Vec::new(),
        }
    }

    /// Fetch the latest invoice and the customer options, then build the form.
    ///
    /// Neither fetch is fatal: without a latest invoice the numbering starts
    /// at 001 for the year, and without customers the option list is empty.
    pub async fn load<I, C>(invoices: &I, customers: &C, today: NaiveDate) -> Self
    where
        I: RecordService<Invoice> + ?Sized,
        C: RecordService<Customer> + ?Sized,
    {
        let (latest, options) = futures::join!(invoices.latest(), customers.list());

        let latest = match latest {
            Ok(invoice) => invoice.map(|i| i.invoice_number),
            Err(e) => {
                warn!(error = %e, "failed to fetch latest invoice; numbering restarts for the year");
                None
            }
        };

        let options = options.unwrap_or_else(|e| {
            warn!(error = %e, "failed to fetch customers");
            Vec::new()
        });

        let mut form = Self::initial(latest.as_deref(), today);
        form.customers = options;
        form
    }

    /// The proposed invoice number
    pub fn invoice_number(&self) -> InvoiceNumber {
        self.invoice_number
    }

    /// Customers the user can pick from
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Check required fields and build the invoice to create
    pub fn validate(&self) -> ErpResult<Invoice> {
        Validate::validate(self)?;

        let invoice = Invoice {
            id: None,
            customer: self.customer.unwrap_or_default(),
            customer_name: None,
            invoice_number: self.invoice_number.to_string(),
            date: self.date,
            due_date: self.due_date,
            total_amount: self.total_amount.unwrap_or_default(),
            status: self.status,
            notes: Some(self.notes.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            created_at: None,
        };
        Validate::validate(&invoice)?;

        Ok(invoice)
    }

    /// Create the invoice, then open a fresh form with the next number
    pub async fn submit<I, C>(
        &self,
        invoices: &I,
        customers: &C,
        today: NaiveDate,
    ) -> ErpResult<(Invoice, InvoiceForm)>
    where
        I: RecordService<Invoice> + ?Sized,
        C: RecordService<Customer> + ?Sized,
    {
        let invoice = self.validate()?;
        let created = invoices.create(invoice).await?;
        info!(invoice_number = %created.invoice_number, "invoice created");

        let next = Self::load(invoices, customers, today).await;
        Ok((created, next))
    }
}
