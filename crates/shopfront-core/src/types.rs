//! # Domain Types
//!
//! Core domain types shared by the cart and the wishlist.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Variant      │   │   CartLineId    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │   │  color          │   │  UUID v4        │       │
//! │  │  name           │   │  size           │   │  one per line   │       │
//! │  │  price (Money)  │   │  "Default" when │   └─────────────────┘       │
//! │  │  originalPrice? │   │  not chosen     │                             │
//! │  │  discount?      │   └─────────────────┘                             │
//! │  │  rating?        │                                                    │
//! │  │  image          │   ┌─────────────────────────────────────┐         │
//! │  │  attributes     │   │  LineKey = (id, color, size)        │         │
//! │  └─────────────────┘   │  the identity of a cart line        │         │
//! │                        └─────────────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::DEFAULT_VARIANT_LABEL;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identifier of a catalog product.
///
/// Catalog ids are opaque strings ("1", "sneakers-42", ...). An empty id is
/// representable so that a payload without one deserializes and is then
/// rejected by validation instead of failing somewhere in serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product as handed over by a screen.
///
/// The core reads `id` and `price`; everything else is carried along so the
/// cart and wishlist screens can render their rows from the stored copy.
///
/// The JSON shape is the catalog's own: prices are decimal major units
/// (`"price": 89.99`) and `image` is whatever the screen uses as an image
/// source (a URL string or `{ "uri": ... }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier.
    #[serde(default)]
    pub id: ProductId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Unit price.
    #[serde(with = "crate::money::major_units")]
    #[ts(type = "number")]
    pub price: Money,

    /// Pre-sale price shown struck through on product cards.
    #[serde(default, with = "crate::money::major_units::option")]
    #[ts(type = "number | null")]
    pub original_price: Option<Money>,

    /// Discount badge as a whole percentage ("-30%").
    #[serde(default)]
    pub discount: Option<u8>,

    /// Average review rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: Option<f32>,

    /// Opaque image source, never inspected.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub image: serde_json::Value,

    /// Free-form display attributes (brand, category, badges, ...).
    #[serde(default)]
    #[ts(type = "Record<string, unknown>")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Product {
    /// Creates a product with only the fields the core needs.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            discount: None,
            rating: None,
            image: serde_json::Value::Null,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the struck-through original price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Sets the image source.
    pub fn with_image(mut self, image: impl Into<serde_json::Value>) -> Self {
        self.image = image.into();
        self
    }

    /// Product cards only strike through an original price that is higher
    /// than the current one.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.price)
    }

    /// Amount saved against the original price, if the product is on sale.
    pub fn savings(&self) -> Option<Money> {
        match self.original_price {
            Some(original) if original > self.price => Some(original - self.price),
            _ => None,
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// The (color, size) pair that distinguishes otherwise identical cart lines.
///
/// A missing or blank selector becomes [`DEFAULT_VARIANT_LABEL`]. Labels are
/// compared exactly, so `"Red"` and `"red"` are different variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    pub color: String,
    pub size: String,
}

impl Variant {
    /// Builds a variant, normalizing absent or blank selectors.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::Variant;
    ///
    /// let v = Variant::new(Some("Red"), None);
    /// assert_eq!(v.color, "Red");
    /// assert_eq!(v.size, "Default");
    /// assert_eq!(Variant::new(Some("  "), Some("M")), Variant::new(None, Some("M")));
    /// ```
    pub fn new(color: Option<&str>, size: Option<&str>) -> Self {
        Variant {
            color: normalize_label(color),
            size: normalize_label(size),
        }
    }

    /// Shorthand for a fully specified variant.
    pub fn of(color: &str, size: &str) -> Self {
        Variant::new(Some(color), Some(size))
    }

    /// Re-applies the blank-to-"Default" rule.
    ///
    /// The fields are public (and deserializable), so a variant built by
    /// hand can hold `""`; the cart normalizes every variant it is given.
    pub fn normalized(self) -> Self {
        Variant {
            color: normalize_label(Some(&self.color)),
            size: normalize_label(Some(&self.size)),
        }
    }

    /// True when neither selector was chosen.
    pub fn is_default(&self) -> bool {
        self.color == DEFAULT_VARIANT_LABEL && self.size == DEFAULT_VARIANT_LABEL
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::new(None, None)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.color, self.size)
    }
}

fn normalize_label(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => DEFAULT_VARIANT_LABEL.to_string(),
    }
}

// =============================================================================
// Line Key
// =============================================================================

/// Identity of a cart line: at most one line exists per key.
///
/// Borrowed, so the cart can compare a lookup key against every line
/// without cloning strings. Build it from a normalized [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey<'a> {
    pub product_id: &'a ProductId,
    pub color: &'a str,
    pub size: &'a str,
}

impl<'a> LineKey<'a> {
    pub fn new(product_id: &'a ProductId, variant: &'a Variant) -> Self {
        LineKey {
            product_id,
            color: &variant.color,
            size: &variant.size,
        }
    }
}

// =============================================================================
// Cart Line Id
// =============================================================================

/// Identifier of one cart line, generated when the line is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineId(#[ts(type = "string")] Uuid);

impl CartLineId {
    /// Generates a fresh line id.
    pub fn generate() -> Self {
        CartLineId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CartLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CartLineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(CartLineId)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
