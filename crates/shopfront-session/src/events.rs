//! # Change Notifications
//!
//! Screens re-render whenever the cart or wishlist changes. Every command
//! that mutates a store publishes one `SessionEvent` after its lock is
//! released.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  commands::cart::add_to_cart ──► CartState (locked, mutated, released)  │
//! │                 │                                                       │
//! │                 └──► broadcast: CartChanged { totals }                  │
//! │                              │                                          │
//! │            ┌─────────────────┼──────────────────┐                       │
//! │            ▼                 ▼                  ▼                       │
//! │       Header badge      Cart screen       Product details               │
//! │       (itemCount)       (re-reads)        (isInCart)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events carry a small summary only; the store is always the source of
//! truth. A receiver that lags behind gets `RecvError::Lagged` and should
//! re-read the state.

use serde::Serialize;
use shopfront_core::CartTotals;

/// Notification published after a store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The cart changed; `totals` reflects the new state.
    CartChanged { totals: CartTotals },

    /// The wishlist changed; `count` is the new number of entries.
    WishlistChanged { count: usize },
}
