//! # shopfront-core: Cart & Wishlist State for Shopfront
//!
//! This crate is the state core behind the catalog app's cart and wishlist
//! screens. It contains all of their logic as plain data structures with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (React Native)                       │   │
//! │  │   Home ──► Product Details ──► Cart ──► Checkout   Wishlist     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-session                            │   │
//! │  │    add_to_cart, toggle_wishlist, get_order_summary, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ wishlist  │  │   │
//! │  │   │  Product  │  │   Money   │  │ CartStore │  │ Wishlist  │  │   │
//! │  │   │  Variant  │  │           │  │ CartLine  │  │  Store    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO GLOBALS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Variant, ids
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - CartStore and its line items
//! - [`wishlist`] - WishlistStore
//! - [`summary`] - Subtotal / shipping / total
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{CartStore, Money, Product, Variant};
//!
//! let mut cart = CartStore::new();
//! let sneakers = Product::new("1", "Sneakers", Money::from_cents(1000));
//!
//! cart.add_to_cart(&sneakers, Variant::of("Red", "M"), 1).unwrap();
//! cart.add_to_cart(&sneakers, Variant::of("Red", "M"), 2).unwrap();
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.cart_total(), Money::from_cents(3000));
//!
//! cart.add_to_cart(&sneakers, Variant::of("Blue", "M"), 2).unwrap();
//! assert_eq!(cart.line_count(), 2);
//! assert_eq!(cart.cart_count(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLimits, CartLineItem, CartStore, CartTotals, QuantityChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use summary::OrderSummary;
pub use types::*;
pub use wishlist::{WishlistItem, WishlistStore, WishlistToggle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Color or size label used when the shopper did not pick one.
pub const DEFAULT_VARIANT_LABEL: &str = "Default";

/// Maximum distinct lines allowed in a single cart.
///
/// Overridable per session through `CartLimits`.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity on a single cart line.
///
/// Stops a stuck "+" button from running a line into the thousands.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Ceiling on the cart subtotal ($10,000,000,000.00).
///
/// Line limits are configurable, so the cart checks its subtotal against
/// this on every add and update instead of trusting the limits alone.
pub const MAX_CART_TOTAL_CENTS: i64 = 1_000_000_000_000;
