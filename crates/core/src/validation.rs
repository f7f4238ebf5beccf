//! Validation utilities for Storefront request inputs
//!
//! Provides identifier patterns and range checks. Error messages are fixed
//! English strings that API clients match on.

use crate::error::StorefrontError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of recommendations returned
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum number of recommendations per request
pub const MAX_LIMIT: usize = 100;

/// Product and user identifier pattern (e.g., sku-1042, user:77)
pub static ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._:-]{0,127}$").expect("Failed to compile id regex")
});

/// Validate a product identifier
///
/// # Examples
///
/// ```
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("sku-1042").is_ok());
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> Result<(), StorefrontError> {
    validate_id(id, "Product", "product_id")
}

/// Validate a user identifier
///
/// # Examples
///
/// ```
/// use storefront_core::validation::validate_user_id;
///
/// assert!(validate_user_id("user-1").is_ok());
/// assert!(validate_user_id("bad id").is_err());
/// ```
pub fn validate_user_id(id: &str) -> Result<(), StorefrontError> {
    validate_id(id, "User", "user_id")
}

fn validate_id(id: &str, label: &str, field: &str) -> Result<(), StorefrontError> {
    if id.trim().is_empty() {
        return Err(StorefrontError::validation_field(
            format!("{} id is required", label),
            field,
        ));
    }
    if !ID_REGEX.is_match(id) {
        return Err(StorefrontError::validation_field(
            format!("Invalid {} id format", label.to_lowercase()),
            field,
        ));
    }
    Ok(())
}

/// Validate a result limit
pub fn validate_limit(limit: usize) -> Result<(), StorefrontError> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(StorefrontError::validation_field(
            format!("limit must be between 1 and {}", MAX_LIMIT),
            "limit",
        ));
    }
    Ok(())
}

/// Validate a blending weight (finite, non-negative)
pub fn validate_weight(name: &str, value: f64) -> Result<(), StorefrontError> {
    if !value.is_finite() || value < 0.0 {
        return Err(StorefrontError::validation_field(
            format!("{} must be a non-negative number", name),
            name,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_messages() {
        let err = validate_product_id("").unwrap_err();
        assert_eq!(err.to_string(), "Product id is required");

        let err = validate_product_id("has space").unwrap_err();
        assert_eq!(err.to_string(), "Invalid product id format");

        assert!(validate_product_id("B00X-42.blue").is_ok());
    }

    #[test]
    fn test_user_id_messages() {
        assert_eq!(
            validate_user_id("   ").unwrap_err().to_string(),
            "User id is required"
        );
        assert_eq!(
            validate_user_id("-leading").unwrap_err().to_string(),
            "Invalid user id format"
        );
        assert!(validate_user_id("user:77").is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(MAX_LIMIT).is_ok());
        assert_eq!(
            validate_limit(0).unwrap_err().to_string(),
            "limit must be between 1 and 100"
        );
        assert!(validate_limit(MAX_LIMIT + 1).is_err());
    }

    #[test]
    fn test_weight_validation() {
        assert!(validate_weight("collaborative_weight", 0.0).is_ok());
        assert!(validate_weight("collaborative_weight", 0.4).is_ok());
        assert!(validate_weight("collaborative_weight", -0.1).is_err());
        assert!(validate_weight("collaborative_weight", f64::NAN).is_err());
    }
}
