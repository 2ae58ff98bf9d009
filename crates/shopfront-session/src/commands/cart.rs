//! # Cart Commands
//!
//! Cart manipulation for the product, home and cart screens.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Screen  │     │ Success  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                             │             │
//! │                   update_cart_item                        │             │
//! │                   remove_from_cart                        │             │
//! │                        │                                  ▼             │
//! │                        └──────────────────────────► clear_cart         │
//! │                                                     (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{
    CartLineItem, CartStore, CartTotals, CoreError, OrderSummary, Product, ProductId, Variant,
};
use tracing::debug;

use super::parse_line_id;
use crate::error::ApiResult;
use crate::events::SessionEvent;
use crate::Session;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}

fn cart_changed(session: &Session, response: CartResponse) -> CartResponse {
    session.publish(SessionEvent::CartChanged {
        totals: response.totals,
    });
    response
}

fn add_variant(
    session: &Session,
    product: &Product,
    variant: Variant,
    quantity: i64,
) -> ApiResult<CartResponse> {
    let response = session.cart().with_cart_mut(|c| {
        c.add_to_cart(product, variant, quantity)?;
        Ok::<CartResponse, CoreError>(CartResponse::from(&*c))
    })?;

    Ok(cart_changed(session, response))
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    session.cart().with_cart(|c| CartResponse::from(c))
}

/// Adds a product variant to the cart.
///
/// ## Behavior
/// - Same (product, color, size) already in cart: quantity increases
/// - Otherwise: new line
/// - Missing color/size become "Default"; missing quantity is 1
/// - Price is frozen at the time the line is created
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product details: pick color ● and size M, quantity 2                  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(product, Some("#000000"), Some("M"), Some(2))             │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Toast "Added to cart successfully!", badge shows totals.itemCount     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(
    session: &Session,
    product: &Product,
    color: Option<&str>,
    size: Option<&str>,
    quantity: Option<i64>,
) -> ApiResult<CartResponse> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product.id, ?color, ?size, quantity, "add_to_cart command");

    add_variant(session, product, Variant::new(color, size), quantity)
}

/// One-tap add from a product card: configured quick-add variant,
/// quantity 1.
pub fn quick_add_to_cart(session: &Session, product: &Product) -> ApiResult<CartResponse> {
    let variant = session.config().quick_add_variant();
    debug!(product_id = %product.id, %variant, "quick_add_to_cart command");

    add_variant(session, product, variant, 1)
}

/// Sets the quantity of a cart line.
///
/// `line_id` is the `cartLineId` string the screen got from a previous
/// response.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Unknown line: nothing changes
/// - Quantity > max: returns error, line unchanged
/// - Malformed id: `VALIDATION_ERROR`
pub fn update_cart_item(session: &Session, line_id: &str, quantity: i64) -> ApiResult<CartResponse> {
    debug!(line_id = %line_id, quantity, "update_cart_item command");
    let line_id = parse_line_id(line_id)?;

    let response = session.cart().with_cart_mut(|c| {
        let change = c.update_quantity(&line_id, quantity)?;
        debug!(?change, "Cart line quantity applied");
        Ok::<CartResponse, CoreError>(CartResponse::from(&*c))
    })?;

    Ok(cart_changed(session, response))
}

/// Removes a cart line. Removing an unknown line is not an error; a
/// malformed id is.
pub fn remove_from_cart(session: &Session, line_id: &str) -> ApiResult<CartResponse> {
    debug!(line_id = %line_id, "remove_from_cart command");
    let line_id = parse_line_id(line_id)?;

    let response = session.cart().with_cart_mut(|c| {
        if c.remove_from_cart(&line_id).is_none() {
            debug!(line_id = %line_id, "Cart line already gone");
        }
        CartResponse::from(&*c)
    });

    Ok(cart_changed(session, response))
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - Order placed (order success screen)
/// - Shopper empties the cart
pub fn clear_cart(session: &Session) -> CartResponse {
    debug!("clear_cart command");

    let response = session.cart().with_cart_mut(|c| {
        c.clear_cart();
        CartResponse::from(&*c)
    });

    cart_changed(session, response)
}

/// True if any variant of the product is in the cart.
pub fn is_in_cart(session: &Session, product_id: &ProductId) -> bool {
    session.cart().with_cart(|c| c.is_in_cart(product_id))
}

/// Subtotal, shipping and total for the cart and checkout screens.
pub fn get_order_summary(session: &Session) -> OrderSummary {
    debug!("get_order_summary command");
    let fee = session.config().shipping_fee();
    session.cart().with_cart(|c| OrderSummary::for_cart(c, fee))
}
