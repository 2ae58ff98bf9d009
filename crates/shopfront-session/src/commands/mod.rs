//! # Commands
//!
//! The functions screens call in response to user gestures.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen                 Command                        Response         │
//! │  ──────                 ───────                        ────────         │
//! │  Product details  ────► cart::add_to_cart ───────────► CartResponse     │
//! │  Home "+" button  ────► cart::quick_add_to_cart ─────► CartResponse     │
//! │  Cart stepper     ────► cart::update_cart_item ──────► CartResponse     │
//! │  Cart ✕           ────► cart::remove_from_cart ──────► CartResponse     │
//! │  Cart summary     ────► cart::get_order_summary ─────► OrderSummary     │
//! │  ♡ button         ────► wishlist::toggle_wishlist ───► ToggleResponse   │
//! │  Wishlist "Cart"  ────► wishlist::move_wishlist_item_to_cart            │
//! │  Wishlist "Clear" ────► wishlist::clear_wishlist ────► WishlistResponse │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command publishes a [`SessionEvent`](crate::SessionEvent)
//! once its store lock has been released.

pub mod cart;
pub mod wishlist;

use shopfront_core::CartLineId;

use crate::error::{ApiError, ApiResult};

/// Parses a `cartLineId` string coming back from a screen.
pub fn parse_line_id(raw: &str) -> ApiResult<CartLineId> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid cart line id: '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_line_id() {
        let id = CartLineId::generate();
        assert_eq!(parse_line_id(&id.to_string()).unwrap(), id);

        let err = parse_line_id("1-1700000000000").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
