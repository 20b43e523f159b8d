//! Configuration loading and management

use crate::core::error::{ConfigError, ErpResult};
use crate::core::store::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Endpoint key used for manual stock corrections
pub const STOCK_ADJUSTMENTS: &str = "stock_adjustments";

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Client configuration for the record store
///
/// ```yaml
/// base_url: http://127.0.0.1:8000
/// timeout_secs: 10
/// page_size: 10
/// endpoints:
///   invoices: stock/invoice
///   customers: customers/customers
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the backend, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rows per page in list views
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Collection path per resource name (e.g. `invoices -> stock/invoice`)
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ErpResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ErpResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: self.base_url.clone(),
            message: e.to_string(),
        })?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Collection path for a resource, without leading or trailing slashes
    pub fn endpoint(&self, resource: &str) -> Result<&str, ConfigError> {
        self.endpoints
            .get(resource)
            .map(|path| path.trim_matches('/'))
            .ok_or_else(|| ConfigError::UnknownResource {
                resource: resource.to_string(),
            })
    }

    /// Base URL without trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configuration matching a local development backend
    pub fn default_config() -> Self {
        let endpoints = [
            ("vendors", "vendors/vendors"),
            ("products", "products/products"),
            ("customers", "customers/customers"),
            ("orders", "orders/order-entries"),
            ("purchase_orders", "purchase/purchase-orders"),
            ("inwards", "inventory/inward"),
            ("outwards", "inventory/outward"),
            ("stock", "stock/stock"),
            ("invoices", "stock/invoice"),
            (STOCK_ADJUSTMENTS, "inventory/stock"),
        ]
        .into_iter()
        .map(|(resource, path)| (resource.to_string(), path.to_string()))
        .collect();

        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: default_timeout_secs(),
            page_size: DEFAULT_PAGE_SIZE,
            endpoints,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
