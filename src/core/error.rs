//! Typed error handling for erp-admin
//!
//! Errors are grouped by where they originate so callers can react to the
//! category they care about instead of matching on strings.
//!
//! # Error Categories
//!
//! - [`RecordError`]: record lookups and record state
//! - [`ApiError`]: talking to the REST backend
//! - [`ConfigError`]: loading and querying the client configuration
//! - [`ValidationError`]: form and record validation
//!
//! # Example
//!
//! ```rust,ignore
//! match invoices.update(id, draft).await {
//!     Ok(saved) => list.replace(saved),
//!     Err(ErpError::Api(ApiError::Status { status: 400, body })) => show(body),
//!     Err(e) => tracing::warn!(code = e.error_code(), "save failed: {}", e),
//! }
//! ```

use crate::core::entity::RecordId;
use serde::Serialize;
use thiserror::Error;

/// The main error type for erp-admin
#[derive(Debug, Error)]
pub enum ErpError {
    /// Record-related errors
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Backend/transport errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErpError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ErpError::Record(e) => e.error_code(),
            ErpError::Api(e) => e.error_code(),
            ErpError::Config(_) => "CONFIG_ERROR",
            ErpError::Validation(e) => e.error_code(),
            ErpError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the backend rejected the request as not found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErpError::Record(RecordError::NotFound { .. })
                | ErpError::Api(ApiError::Status { status: 404, .. })
        )
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to records
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record was not found
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: RecordId },

    /// The record has no id yet, so it cannot be updated or deleted
    #[error("{resource} has not been saved yet")]
    NotPersisted { resource: String },

    /// Failed to serialize/deserialize a record
    #[error("Failed to serialize/deserialize {resource}: {message}")]
    SerializationError { resource: String, message: String },
}

impl RecordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::NotPersisted { .. } => "RECORD_NOT_PERSISTED",
            RecordError::SerializationError { .. } => "RECORD_SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors raised while talking to the REST backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never got a response
    #[error("network: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Network(_) => "API_NETWORK",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// No endpoint configured for a resource
    #[error("No endpoint configured for resource '{resource}'")]
    UnknownResource { resource: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", .0.iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>().join(", "))]
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON payload
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Stock cannot go below zero
    #[error("Cannot reduce stock {stock_id} by {requested}: only {on_hand} on hand")]
    InsufficientStock {
        stock_id: RecordId,
        on_hand: u32,
        requested: u32,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } | ValidationError::FieldErrors(_) => {
                "VALIDATION_ERROR"
            }
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        }
    }

    /// Field names that failed, in reporting order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldValidationError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        // field_errors() iterates a HashMap
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for ErpError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ErpError::Validation(errors.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => ApiError::Network(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for ErpError {
    fn from(err: reqwest::Error) -> Self {
        ErpError::Api(err.into())
    }
}

impl From<serde_json::Error> for ErpError {
    fn from(err: serde_json::Error) -> Self {
        ErpError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ErpError {
    fn from(err: std::io::Error) -> Self {
        ErpError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ErpError {
    fn from(err: serde_yaml::Error) -> Self {
        ErpError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for erp-admin operations
pub type ErpResult<T> = Result<T, ErpError>;

// =============================================================================
// Tests
// =============================================================================
