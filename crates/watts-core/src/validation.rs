//! # Validation Module
//!
//! Input validation for store configuration and product construction.
//!
//! ## Usage
//! ```rust
//! use watts_core::validation::{validate_stock_capacity, validate_store_name};
//!
//! assert!(validate_store_name("Watts Up Electronics").is_ok());
//! assert!(validate_stock_capacity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_STOCK_CAPACITY, MAX_STORE_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a store name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 100 characters
pub fn validate_store_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_STORE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_STORE_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the stock capacity (`1..=1000`).
pub fn validate_stock_capacity(capacity: usize) -> ValidationResult<()> {
    if capacity == 0 || capacity > MAX_STOCK_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "stock_capacity".to_string(),
            min: 1,
            max: MAX_STOCK_CAPACITY as i64,
        });
    }
    Ok(())
}

/// Validates a unit price. Prices must be strictly positive.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
