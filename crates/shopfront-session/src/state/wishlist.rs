//! # Wishlist State
//!
//! The session's one `WishlistStore`.

use std::sync::{Arc, Mutex, PoisonError};

use shopfront_core::WishlistStore;

/// Session-managed wishlist state. Same locking rules as
/// [`CartState`](super::CartState).
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<WishlistStore>>,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&WishlistStore) -> R,
    {
        let wishlist = self.wishlist.lock().unwrap_or_else(PoisonError::into_inner);
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut WishlistStore) -> R,
    {
        let mut wishlist = self.wishlist.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut wishlist)
    }
}
