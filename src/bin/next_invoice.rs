//! Print the next invoice number suggested by the configured backend.
//!
//! Reads the client configuration from the file named by `ERP_ADMIN_CONFIG`,
//! falling back to the built-in development configuration.

use anyhow::{Context, Result};
use erp_admin::prelude::*;
use erp_admin::telemetry::init_tracing;
use tracing::info;

const CONFIG_ENV: &str = "ERP_ADMIN_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => ClientConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        Err(_) => ClientConfig::default_config(),
    };
    info!(base_url = %config.base_url, "using record store");

    let client = ApiClient::new(config)?;
    let invoices = client.records::<Invoice>()?;
    let customers = client.records::<Customer>()?;

    let today = chrono::Local::now().date_naive();
    let form = InvoiceForm::load(&invoices, &customers, today).await;

    println!("{}", form.invoice_number());
    Ok(())
}
