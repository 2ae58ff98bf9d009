//! # Cart State
//!
//! The session's one `CartStore`, shared by every screen.

use std::sync::{Arc, Mutex, PoisonError};

use shopfront_core::{CartLimits, CartStore};

/// Session-managed cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CartStore>>`:
/// - `Arc`: every clone of the session sees the same cart
/// - `Mutex`: one operation at a time, start to finish
///
/// A poisoned lock is recovered rather than propagated. Store operations
/// validate before they mutate, so a panicking reader cannot leave a
/// half-applied change behind.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<CartStore>>,
}

impl CartState {
    /// Creates an empty cart with the given limits.
    pub fn new(limits: CartLimits) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(CartStore::with_limits(limits))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use shopfront_session::state::CartState;
    ///
    /// let state = CartState::default();
    /// let count = state.with_cart(|cart| cart.cart_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, Product, Variant};

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::default();
        let other_screen = state.clone();
        let product = Product::new("1", "Sneakers", Money::from_cents(1000));

        state
            .with_cart_mut(|c| c.add_to_cart(&product, Variant::default(), 2))
            .unwrap();

        assert_eq!(other_screen.with_cart(|c| c.cart_count()), 2);
    }

    #[test]
    fn test_limits_are_applied() {
        let limits = CartLimits {
            max_lines: 1,
            max_item_quantity: 3,
        };
        let state = CartState::new(limits);
        assert_eq!(state.with_cart(|c| c.limits()), limits);
    }
}
