//! # Validation Module
//!
//! Input validation for everything a screen can hand to the stores.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (JavaScript/TypeScript)                               │
//! │  ├── Quantity stepper never goes below 1                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session command (Rust)                                       │
//! │  └── Type validation (deserialization of the product payload)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store operation (Rust)                                       │
//! │  └── THIS MODULE: reject before any mutation                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policy
//! The stores are strict: a product without an id or name, with a negative
//! price, or with an impossible discount/rating is rejected instead of being
//! stored half-formed.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_product_id, validate_quantity};
//!
//! validate_product_id("42").unwrap();
//! assert!(validate_product_id("").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, Variant};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest accepted color or size label.
pub const MAX_VARIANT_LABEL_LEN: usize = 50;

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// Highest accepted unit price ($1,000,000.00).
///
/// Keeps `price × quantity` and the cart total far from `i64` overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Premium Leather Sneakers").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a color or size label (after normalization).
pub fn validate_variant(variant: &Variant) -> ValidationResult<()> {
    for (field, label) in [("color", &variant.color), ("size", &variant.size)] {
        if label.chars().count() > MAX_VARIANT_LABEL_LEN {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: MAX_VARIANT_LABEL_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity handed to `add_to_cart`.
///
/// Upper limits are a cart setting and are checked by the cart itself.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free gifts)
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use shopfront_core::money::Money;
/// use shopfront_core::validation::{validate_price, MAX_PRICE_CENTS};
///
/// assert!(validate_price("price", Money::from_cents(8999)).is_ok());
/// assert!(validate_price("price", Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a discount percentage (0-100).
pub fn validate_discount(discount: u8) -> ValidationResult<()> {
    if discount > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a review rating (0.0-5.0).
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if rating.is_nan() {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a whole product before a store keeps a copy of it.
///
/// Free-form attributes and the image reference are never inspected.
///
/// ## Example
/// ```rust
/// use shopfront_core::{Money, Product};
/// use shopfront_core::validation::validate_product;
///
/// let ok = Product::new("1", "Sneakers", Money::from_cents(8999));
/// assert!(validate_product(&ok).is_ok());
///
/// let no_id = Product::new("", "Sneakers", Money::from_cents(8999));
/// assert!(validate_product(&no_id).is_err());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(product.id.as_str())?;
    validate_product_name(&product.name)?;
    validate_price("price", product.price)?;

    if let Some(original) = product.original_price {
        validate_price("originalPrice", original)?;
    }
    if let Some(discount) = product.discount {
        validate_discount(discount)?;
    }
    if let Some(rating) = product.rating {
        validate_rating(rating)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("1", "Premium Leather Sneakers", Money::from_cents(8999))
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("1").is_ok());
        assert!(validate_product_id("sneakers-42").is_ok());

        assert!(matches!(
            validate_product_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Canvas Backpack").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_variant() {
        assert!(validate_variant(&Variant::of("Red", "M")).is_ok());
        assert!(validate_variant(&Variant::of(&"R".repeat(51), "M")).is_err());
        assert!(validate_variant(&Variant::of("Red", &"M".repeat(51))).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product()).is_ok());

        let mut free = product();
        free.price = Money::zero();
        assert!(validate_product(&free).is_ok());

        let mut negative = product();
        negative.price = Money::from_cents(-1);
        assert!(matches!(
            validate_product(&negative),
            Err(ValidationError::MustBeNonNegative { .. })
        ));

        let mut yacht = product();
        yacht.price = Money::from_cents(i64::MAX / 10);
        assert!(matches!(
            validate_product(&yacht),
            Err(ValidationError::OutOfRange { .. })
        ));

        let mut priciest = product();
        priciest.price = Money::from_cents(MAX_PRICE_CENTS);
        assert!(validate_product(&priciest).is_ok());

        let mut bad_original = product();
        bad_original.original_price = Some(Money::from_cents(-100));
        assert!(validate_product(&bad_original).is_err());

        let mut no_name = product();
        no_name.name = String::new();
        assert!(validate_product(&no_name).is_err());
    }

    #[test]
    fn test_validate_discount_and_rating() {
        assert!(validate_discount(0).is_ok());
        assert!(validate_discount(100).is_ok());
        assert!(validate_discount(101).is_err());

        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.5).is_err());
        assert!(matches!(
            validate_rating(f32::NAN),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
