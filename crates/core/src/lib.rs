//! # Storefront Core
//!
//! Shared building blocks for Storefront services.
//!
//! ## Modules
//!
//! - `error`: Error type and HTTP mapping
//! - `validation`: Identifier and range validation
//! - `observability`: Structured logging setup

pub mod error;
pub mod observability;
pub mod validation;

// Re-export commonly used types
pub use error::{ErrorBody, StorefrontError};
pub use observability::{init_logging, LogConfig, LogFormat, ObservabilityError};
pub use validation::{
    validate_limit, validate_product_id, validate_user_id, validate_weight, DEFAULT_LIMIT,
    MAX_LIMIT,
};
