//! Error types shared across Storefront crates
//!
//! `StorefrontError` covers the failures the recommendation service can
//! surface: input validation, missing resources, configuration problems and
//! catalog I/O. The recommenders themselves never fail; errors only come
//! from the edges (catalog loading, request validation, config).

use serde::Serialize;
use thiserror::Error;

/// Result alias using [`StorefrontError`]
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Storefront error type
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Input failed validation
    #[error("{message}")]
    ValidationError {
        message: String,
        field: Option<String>,
    },

    /// Requested resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        key: Option<String>,
    },

    /// Filesystem failure while reading catalog data
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed JSON payload or catalog file
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl StorefrontError {
    /// Validation error without a specific field
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    /// Validation error attributed to a named field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::ConfigurationError { .. } => "configuration_error",
            Self::IoError(_) => "io_error",
            Self::SerializationError(_) => "serialization_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } | Self::SerializationError(_) => 400,
            Self::NotFound { .. } => 404,
            _ => 500,
        }
    }

    /// JSON body for API responses
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
            field: match self {
                Self::ValidationError { field, .. } => field.clone(),
                _ => None,
            },
        }
    }
}

/// Serialized error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
