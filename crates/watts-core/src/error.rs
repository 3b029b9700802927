//! # Error Types
//!
//! Domain-specific error types for watts-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - Store / product failures, config loading           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (watts-demo)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! The store state machine reports its own "soft" failures without `Err`:
//! - stock at capacity → `add_product` returns `false`
//! - bad stock index → `remove_from_stock` is a no-op
//! - removing an absent product from the cart → cart worth still drops
//!
//! `CoreError` covers the cases a caller cannot express against a live
//! object graph, such as passing an id the store has never seen.

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The store has no product registered under this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Insufficient stock to sell the requested units.
    ///
    /// ## When This Occurs
    /// - `Product::sell_units` asked for more than `stock_quantity`
    /// - A cart was built past a product's stock boundary
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: ProductId,
        available: u32,
        requested: u32,
    },

    /// A unit count of zero was passed where at least one unit is required.
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
