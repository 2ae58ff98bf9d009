//! # State Module
//!
//! Shared, lockable wrappers around the two stores.
//!
//! ## Why Two State Types?
//! The cart and the wishlist never need each other, so each gets its own
//! lock. A screen toggling a heart never waits on a cart update.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Session                                 │   │
//! │  │  one per UI session, cloned into every screen that needs it     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐            │
//! │  │  CartState   │  │ WishlistState  │  │  SessionConfig   │            │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<    │  │  read-only after │            │
//! │  │   CartStore  │  │  WishlistStore │  │  load            │            │
//! │  │  >>          │  │  >>            │  │                  │            │
//! │  └──────────────┘  └────────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  Each command takes the lock once for its whole operation, so no       │
//! │  reader ever observes half of an update.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod wishlist;

pub use cart::CartState;
pub use wishlist::WishlistState;
