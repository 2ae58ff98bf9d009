//! # Cart Store
//!
//! The authoritative set of cart lines and the aggregates derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Screen Action            Store Operation          Line Change          │
//! │  ─────────────            ───────────────          ───────────          │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_to_cart() ─────────► same key: qty += n   │
//! │                                                    new key:  push line  │
//! │                                                                         │
//! │  Stepper +/- ───────────► update_quantity() ─────► qty = n              │
//! │                                                    n <= 0: remove line  │
//! │                                                                         │
//! │  Tap ✕ ─────────────────► remove_from_cart() ────► remove line          │
//! │                                                                         │
//! │  Checkout done ─────────► clear_cart() ──────────► no lines             │
//! │                                                                         │
//! │  Badge / summary ───────► cart_count(), cart_total() (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per (product id, color, size)
//! - Every line has quantity >= 1
//! - The subtotal never exceeds `MAX_CART_TOTAL_CENTS`, so reading totals
//!   cannot overflow
//! - Rejected operations leave the lines untouched

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLineId, LineKey, Product, ProductId, Variant};
use crate::validation::{validate_product, validate_quantity, validate_variant};
use crate::{MAX_CART_LINES, MAX_CART_TOTAL_CENTS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One (product, variant, quantity) line in the cart.
///
/// ## Design Notes
/// `product` is a frozen copy taken when the line was created. The total
/// uses this stored price even if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Identity of this line.
    pub cart_line_id: CartLineId,

    /// Product snapshot at the time the line was created.
    pub product: Product,

    /// Selected color (or "Default").
    pub color: String,

    /// Selected size (or "Default").
    pub size: String,

    /// Always >= 1 while the line exists.
    pub quantity: i64,

    /// When the line was created. Merges do not touch it.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn new(product: &Product, variant: Variant, quantity: i64) -> Self {
        CartLineItem {
            cart_line_id: CartLineId::generate(),
            product: product.clone(),
            color: variant.color,
            size: variant.size,
            quantity,
            added_at: Utc::now(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn variant(&self) -> Variant {
        Variant {
            color: self.color.clone(),
            size: self.size.clone(),
        }
    }

    /// The (product id, color, size) identity of this line.
    pub fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: &self.product.id,
            color: &self.color,
            size: &self.size,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Limits
// =============================================================================

/// Upper bounds enforced by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLimits {
    /// Maximum number of distinct lines.
    pub max_lines: usize,

    /// Maximum quantity on a single line.
    pub max_item_quantity: i64,
}

impl Default for CartLimits {
    fn default() -> Self {
        CartLimits {
            max_lines: MAX_CART_LINES,
            max_item_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// What `update_quantity` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuantityChange {
    /// The line now has exactly the requested quantity.
    Updated,
    /// The requested quantity was <= 0 and the line was deleted.
    Removed,
    /// No line with that id; nothing changed.
    Missing,
}

/// Cart aggregates for badges and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of all line quantities.
    pub item_count: i64,
    /// Sum of all line totals.
    pub subtotal: Money,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The shopping cart.
///
/// Lines keep insertion order, which is the order the cart screen lists
/// them in.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLineItem>,
    limits: CartLimits,
}

impl CartStore {
    /// Creates an empty cart with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cart with explicit limits.
    pub fn with_limits(limits: CartLimits) -> Self {
        CartStore {
            lines: Vec::new(),
            limits,
        }
    }

    pub fn limits(&self) -> CartLimits {
        self.limits
    }

    /// Adds a product variant, merging into an existing line when the
    /// (product id, color, size) key already exists.
    ///
    /// ## Behavior
    /// - Key present: that line's quantity grows by `quantity`; its
    ///   snapshot and `added_at` stay as they were
    /// - Key absent: a new line with a fresh id is appended
    ///
    /// ## Errors
    /// - `Validation` for an invalid product, variant or quantity <= 0
    /// - `QuantityTooLarge` when the resulting line quantity exceeds the limit
    /// - `CartTooLarge` when a new line would exceed the line limit
    /// - `TotalTooLarge` when the subtotal would exceed its ceiling
    ///
    /// Returns the id of the line that was created or merged into.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        variant: Variant,
        quantity: i64,
    ) -> CoreResult<CartLineId> {
        let variant = variant.normalized();
        validate_product(product)?;
        validate_variant(&variant)?;
        validate_quantity(quantity)?;

        let max = self.limits.max_item_quantity;
        let key = LineKey::new(&product.id, &variant);

        if let Some(index) = self.lines.iter().position(|l| l.key() == key) {
            let existing = &self.lines[index];
            let merged = existing.quantity.saturating_add(quantity);
            if merged > max {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max,
                });
            }
            self.ensure_total_fits(Some(index), existing.product.price, merged)?;

            let line = &mut self.lines[index];
            trace!(line = %line.cart_line_id, from = line.quantity, to = merged, "Merged cart line");
            line.quantity = merged;
            return Ok(line.cart_line_id);
        }

        if quantity > max {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max,
            });
        }

        if self.lines.len() >= self.limits.max_lines {
            return Err(CoreError::CartTooLarge {
                max: self.limits.max_lines,
            });
        }
        self.ensure_total_fits(None, product.price, quantity)?;

        let line = CartLineItem::new(product, variant, quantity);
        let id = line.cart_line_id;
        trace!(line = %id, product_id = %product.id, quantity, "Created cart line");
        self.lines.push(line);
        Ok(id)
    }

    /// Removes a line. Removing a line that is not there is a no-op.
    pub fn remove_from_cart(&mut self, line_id: &CartLineId) -> Option<CartLineItem> {
        let index = self.lines.iter().position(|l| l.cart_line_id == *line_id)?;
        Some(self.lines.remove(index))
    }

    /// Sets a line's quantity to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`CartStore::remove_from_cart`]
    /// - unknown line: nothing happens
    ///
    /// Unlike `add_to_cart` this is an absolute set, not an increment.
    pub fn update_quantity(
        &mut self,
        line_id: &CartLineId,
        quantity: i64,
    ) -> CoreResult<QuantityChange> {
        if quantity <= 0 {
            return Ok(match self.remove_from_cart(line_id) {
                Some(_) => QuantityChange::Removed,
                None => QuantityChange::Missing,
            });
        }

        let max = self.limits.max_item_quantity;
        let Some(index) = self.lines.iter().position(|l| l.cart_line_id == *line_id) else {
            return Ok(QuantityChange::Missing);
        };

        if quantity > max {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max,
            });
        }
        self.ensure_total_fits(Some(index), self.lines[index].product.price, quantity)?;

        self.lines[index].quantity = quantity;
        Ok(QuantityChange::Updated)
    }

    /// Checks that the subtotal stays within [`MAX_CART_TOTAL_CENTS`] once
    /// the line at `replaced` (or a new line, for `None`) is worth
    /// `price × quantity`.
    fn ensure_total_fits(
        &self,
        replaced: Option<usize>,
        price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        let total = price.checked_multiply_quantity(quantity).and_then(|line_total| {
            self.lines
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != replaced)
                .try_fold(line_total, |acc, (_, l)| acc.checked_add(l.line_total()))
        });

        match total {
            Some(t) if t.cents() <= MAX_CART_TOTAL_CENTS => Ok(()),
            _ => Err(CoreError::TotalTooLarge {
                max_cents: MAX_CART_TOTAL_CENTS,
            }),
        }
    }

    /// Removes every line.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines (not the number of lines).
    pub fn cart_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price × quantity` using each line's stored unit price.
    pub fn cart_total(&self) -> Money {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// [`CartStore::cart_total`] in major units, for plain-number displays.
    pub fn cart_total_amount(&self) -> f64 {
        self.cart_total().to_major_f64()
    }

    /// True if any variant of the product is in the cart.
    ///
    /// Product cards and the details screen ask "is this product in my
    /// cart at all?", so this check ignores color and size. Use
    /// [`CartStore::is_variant_in_cart`] for the per-variant question.
    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|l| l.product.id == *product_id)
    }

    /// True if this exact (product, color, size) line exists. Blank
    /// selectors count as "Default".
    pub fn is_variant_in_cart(&self, product_id: &ProductId, variant: &Variant) -> bool {
        let variant = variant.clone().normalized();
        let key = LineKey::new(product_id, &variant);
        self.lines.iter().any(|l| l.key() == key)
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn get_line(&self, line_id: &CartLineId) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.cart_line_id == *line_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            line_count: self.line_count(),
            item_count: self.cart_count(),
            subtotal: self.cart_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
