//! # Wishlist Commands
//!
//! Saving products for later from product cards, the details screen and
//! the wishlist screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ♡ tap ──► toggle_wishlist ──► Added   ──► "X added to wishlist!"      │
//! │                           └──► Removed ──► "X removed from wishlist!"  │
//! │                                                                         │
//! │  Wishlist screen "Add to Cart"                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  move_wishlist_item_to_cart ──► quick-add variant, quantity 1           │
//! │                                 (product stays saved)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{CoreError, Product, ProductId, WishlistItem, WishlistStore, WishlistToggle};
use tracing::{debug, info};

use super::cart::{quick_add_to_cart, CartResponse};
use crate::error::{ApiError, ApiResult};
use crate::events::SessionEvent;
use crate::Session;

/// Wishlist contents in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistItem>,
    pub count: usize,
}

impl From<&WishlistStore> for WishlistResponse {
    fn from(wishlist: &WishlistStore) -> Self {
        WishlistResponse {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
        }
    }
}

/// Result of a heart tap: which way it went, the toast text and the new
/// wishlist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub outcome: WishlistToggle,
    pub notice: String,
    pub wishlist: WishlistResponse,
}

fn wishlist_changed(session: &Session, response: WishlistResponse) -> WishlistResponse {
    session.publish(SessionEvent::WishlistChanged {
        count: response.count,
    });
    response
}

pub fn get_wishlist(session: &Session) -> WishlistResponse {
    debug!("get_wishlist command");
    session.wishlist().with_wishlist(|w| WishlistResponse::from(w))
}

/// Saves a product. Saving an already saved product changes nothing.
pub fn add_to_wishlist(session: &Session, product: &Product) -> ApiResult<WishlistResponse> {
    debug!(product_id = %product.id, "add_to_wishlist command");

    let response = session.wishlist().with_wishlist_mut(|w| {
        w.add_to_wishlist(product)?;
        Ok::<WishlistResponse, CoreError>(WishlistResponse::from(&*w))
    })?;

    Ok(wishlist_changed(session, response))
}

/// Removes a saved product. Unknown ids are ignored.
pub fn remove_from_wishlist(session: &Session, product_id: &ProductId) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    let response = session.wishlist().with_wishlist_mut(|w| {
        w.remove_from_wishlist(product_id);
        WishlistResponse::from(&*w)
    });

    wishlist_changed(session, response)
}

/// Saves the product if it isn't saved, removes it otherwise.
pub fn toggle_wishlist(session: &Session, product: &Product) -> ApiResult<ToggleResponse> {
    debug!(product_id = %product.id, "toggle_wishlist command");

    let (outcome, wishlist) = session.wishlist().with_wishlist_mut(|w| {
        let outcome = w.toggle_wishlist(product)?;
        Ok::<_, CoreError>((outcome, WishlistResponse::from(&*w)))
    })?;

    let wishlist = wishlist_changed(session, wishlist);
    Ok(ToggleResponse {
        notice: outcome.notice(&product.name),
        outcome,
        wishlist,
    })
}

pub fn clear_wishlist(session: &Session) -> WishlistResponse {
    debug!("clear_wishlist command");

    let response = session.wishlist().with_wishlist_mut(|w| {
        w.clear_wishlist();
        WishlistResponse::from(&*w)
    });

    wishlist_changed(session, response)
}

pub fn is_in_wishlist(session: &Session, product_id: &ProductId) -> bool {
    session.wishlist().with_wishlist(|w| w.is_in_wishlist(product_id))
}

/// Adds a saved product to the cart with the quick-add variant.
///
/// The product stays on the wishlist. The wishlist lock is released before
/// the cart is touched.
pub fn move_wishlist_item_to_cart(
    session: &Session,
    product_id: &ProductId,
) -> ApiResult<CartResponse> {
    debug!(product_id = %product_id, "move_wishlist_item_to_cart command");

    let product = session
        .wishlist()
        .with_wishlist(|w| w.get(product_id).map(|item| item.product.clone()))
        .ok_or_else(|| ApiError::from(CoreError::ProductNotFound(product_id.to_string())))?;

    let cart = quick_add_to_cart(session, &product)?;
    info!(product_id = %product_id, "Wishlist item added to cart");
    Ok(cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopfront_core::Money;

    fn jacket() -> Product {
        Product::new("2", "Denim Jacket", Money::from_cents(7999))
    }

    #[test]
    fn test_toggle_notices() {
        let session = Session::default();
        let product = jacket();

        let toggled = toggle_wishlist(&session, &product).unwrap();
        assert_eq!(toggled.outcome, WishlistToggle::Added);
        assert_eq!(toggled.notice, "Denim Jacket added to wishlist!");
        assert_eq!(toggled.wishlist.count, 1);

        let toggled = toggle_wishlist(&session, &product).unwrap();
        assert_eq!(toggled.outcome, WishlistToggle::Removed);
        assert_eq!(toggled.notice, "Denim Jacket removed from wishlist!");
        assert_eq!(toggled.wishlist.count, 0);
    }

    #[test]
    fn test_add_is_idempotent() {
        let session = Session::default();
        add_to_wishlist(&session, &jacket()).unwrap();
        let wishlist = add_to_wishlist(&session, &jacket()).unwrap();
        assert_eq!(wishlist.count, 1);
        assert!(is_in_wishlist(&session, &jacket().id));
    }

    #[test]
    fn test_invalid_product_is_rejected() {
        let session = Session::default();
        let bad = Product::new("3", "", Money::from_cents(100));

        let err = toggle_wishlist(&session, &bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_wishlist(&session).count, 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let session = Session::default();
        add_to_wishlist(&session, &jacket()).unwrap();
        add_to_wishlist(&session, &Product::new("5", "Hat", Money::from_cents(1500))).unwrap();

        let wishlist = remove_from_wishlist(&session, &ProductId::from("2"));
        assert_eq!(wishlist.count, 1);
        assert_eq!(wishlist.items[0].product.name, "Hat");

        // Unknown id is a no-op.
        assert_eq!(remove_from_wishlist(&session, &ProductId::from("99")).count, 1);

        assert_eq!(clear_wishlist(&session).count, 0);
    }

    #[test]
    fn test_move_to_cart_keeps_wishlist_entry() {
        let session = Session::default();
        let product = jacket();
        add_to_wishlist(&session, &product).unwrap();

        let cart = move_wishlist_item_to_cart(&session, &product.id).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].size, "M");
        assert_eq!(cart.items[0].quantity, 1);
        assert!(is_in_wishlist(&session, &product.id));

        let cart = move_wishlist_item_to_cart(&session, &product.id).unwrap();
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_move_unknown_item_is_not_found() {
        let session = Session::default();
        let err = move_wishlist_item_to_cart(&session, &ProductId::from("42")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(super::super::cart::get_cart(&session).items.is_empty());
    }

    #[test]
    fn test_toggle_response_serialization() {
        let session = Session::default();
        let toggled = toggle_wishlist(&session, &jacket()).unwrap();
        let json = serde_json::to_value(&toggled).unwrap();

        assert_eq!(json["outcome"], "added");
        assert_eq!(json["wishlist"]["count"], 1);
        assert_eq!(json["wishlist"]["items"][0]["product"]["price"], 79.99);
    }

    #[tokio::test]
    async fn test_toggle_publishes_wishlist_events() {
        let session = Session::default();
        let mut rx = session.subscribe();

        toggle_wishlist(&session, &jacket()).unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::WishlistChanged { count: 1 }
        );

        toggle_wishlist(&session, &jacket()).unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::WishlistChanged { count: 0 }
        );
    }

    #[tokio::test]
    async fn test_move_to_cart_publishes_cart_event_only() {
        let session = Session::default();
        add_to_wishlist(&session, &jacket()).unwrap();
        let mut rx = session.subscribe();

        move_wishlist_item_to_cart(&session, &jacket().id).unwrap();
        assert!(matches!(
            rx.recv().await.unwrap(),
            SessionEvent::CartChanged { .. }
        ));
        assert!(rx.try_recv().is_err());
    }
}
