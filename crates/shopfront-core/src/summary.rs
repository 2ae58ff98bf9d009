//! # Order Summary
//!
//! The subtotal / shipping / total block shown under the cart and on the
//! checkout screen.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Subtotal                    $89.98  │  ← CartStore::cart_total()
//! │  Shipping                     $5.99  │  ← flat fee from configuration
//! │  ──────────────────────────────────  │
//! │  Total                       $95.97  │
//! └──────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartStore;
use crate::money::Money;

/// Cart totals plus the flat shipping fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Builds the summary for the current cart.
    ///
    /// An empty cart ships nothing, so it is charged no shipping. The
    /// subtotal is bounded by [`MAX_CART_TOTAL_CENTS`](crate::MAX_CART_TOTAL_CENTS);
    /// an out-of-range fee saturates the total instead of overflowing.
    pub fn for_cart(cart: &CartStore, shipping_fee: Money) -> Self {
        let subtotal = cart.cart_total();
        let shipping = if cart.is_empty() {
            Money::zero()
        } else {
            shipping_fee
        };

        OrderSummary {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }
}
