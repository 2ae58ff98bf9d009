//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Cart limits, unknown products                  │
//! │  └── ValidationError  - Malformed products, bad quantities             │
//! │                                                                         │
//! │  shopfront-session errors (separate crate)                             │
//! │  ├── ApiError         - What screens see (serialized)                  │
//! │  └── ConfigError      - session.toml / env problems                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing or updating something that is not there is NOT an error
//! anywhere in this crate. Screens race against removals they already
//! applied, and those calls must stay harmless.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core state errors.
///
/// Every operation that returns one of these has left its store untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not present where it was expected (e.g. moving a
    /// wishlist entry to the cart after it was removed).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Adding a new line would exceed the configured number of lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity would exceed the configured maximum.
    ///
    /// ## When This Occurs
    /// ```text
    /// Line "Sneakers / Red / M" has quantity 998
    ///      │
    ///      ▼
    /// add_to_cart(.., quantity: 5)
    ///      │
    ///      ▼
    /// QuantityTooLarge { requested: 1003, max: 999 }
    ///      │
    ///      ▼
    /// Line stays at 998
    /// ```
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The cart subtotal would exceed the ceiling (or overflow).
    #[error("Cart total would exceed the maximum of {max_cents} cents")]
    TotalTooLarge { max_cents: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the "invalid argument" conditions: the caller handed over a
/// product or quantity the stores refuse to hold.
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

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a rating that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
