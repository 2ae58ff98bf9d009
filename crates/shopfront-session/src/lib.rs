//! # shopfront-session: Session State for the Catalog Screens
//!
//! Owns the single cart and wishlist of a UI session and exposes them to
//! screens through plain command functions.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App Launch                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  init_tracing()           ← RUST_LOG or "info,shopfront=debug"          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionConfig::load()    ← session.toml + SHOPFRONT_* env              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session::new(config)     ← empty cart, empty wishlist                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.clone() into every screen; commands::* on user gestures        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopfront_core::{Money, Product};
//! use shopfront_session::{commands, Session};
//!
//! let session = Session::default();
//! let sneakers = Product::new("1", "Sneakers", Money::from_cents(8999));
//!
//! let cart = commands::cart::add_to_cart(&session, &sneakers, Some("Red"), Some("M"), None).unwrap();
//! assert_eq!(cart.totals.item_count, 1);
//!
//! let toggled = commands::wishlist::toggle_wishlist(&session, &sneakers).unwrap();
//! assert_eq!(toggled.notice, "Sneakers added to wishlist!");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;

pub use config::SessionConfig;
pub use error::{ApiError, ApiResult, ConfigError, ConfigResult, ErrorCode};
pub use events::SessionEvent;

use tokio::sync::broadcast;
use tracing::trace;
use tracing_subscriber::EnvFilter;

use state::{CartState, WishlistState};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,shopfront=debug";

// =============================================================================
// Session
// =============================================================================

/// One shopping session: the cart, the wishlist and their notification
/// channel.
///
/// Cloning is cheap and every clone shares the same stores, so each screen
/// can hold its own handle.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    cart: CartState,
    wishlist: WishlistState,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    /// Creates a session with an empty cart and wishlist.
    pub fn new(config: SessionConfig) -> Self {
        let (events, _) = broadcast::channel(config.events.capacity.max(1));

        Session {
            cart: CartState::new(config.cart_limits()),
            wishlist: WishlistState::new(),
            config,
            events,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn wishlist(&self) -> &WishlistState {
        &self.wishlist
    }

    /// Subscribes to change notifications from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Publishes a change. Having no subscribers is normal (no screen
    /// mounted yet) and not an error.
    pub(crate) fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            trace!("No subscribers for session event");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}

// =============================================================================
// Tracing
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=shopfront_core=trace` - Also show line merges
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, Product, Variant};

    #[test]
    fn test_session_clones_share_stores() {
        let session = Session::default();
        let screen = session.clone();
        let product = Product::new("1", "Sneakers", Money::from_cents(1000));

        session
            .cart()
            .with_cart_mut(|c| c.add_to_cart(&product, Variant::default(), 1))
            .unwrap();
        session
            .wishlist()
            .with_wishlist_mut(|w| w.add_to_wishlist(&product))
            .unwrap();

        assert!(screen.cart().with_cart(|c| c.is_in_cart(&product.id)));
        assert!(screen.wishlist().with_wishlist(|w| w.is_in_wishlist(&product.id)));
    }

    #[test]
    fn test_session_uses_configured_limits() {
        let mut config = SessionConfig::default();
        config.cart.max_lines = 3;
        let session = Session::new(config);
        assert_eq!(session.cart().with_cart(|c| c.limits().max_lines), 3);
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let session = Session::default();
        session.publish(SessionEvent::WishlistChanged { count: 0 });
    }

    #[test]
    fn test_init_tracing_twice_fails_gracefully() {
        // The first call may lose to another test; the second always finds
        // a subscriber already installed.
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
