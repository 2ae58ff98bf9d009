//! # Wishlist Store
//!
//! The set of products the shopper saved for later. Keyed by product id
//! only: no quantity, no variant.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ♡ on a product card ──► toggle_wishlist(p)                             │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │        p.id present                  p.id absent                        │
//! │        remove → Removed              insert → Added                     │
//! │               │                             │                           │
//! │               ▼                             ▼                           │
//! │   "p removed from wishlist!"     "p added to wishlist!"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// A saved product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product: Product,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Which branch `toggle_wishlist` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WishlistToggle {
    Added,
    Removed,
}

impl WishlistToggle {
    /// Message shown in the toast after the toggle.
    pub fn notice(&self, product_name: &str) -> String {
        match self {
            WishlistToggle::Added => format!("{} added to wishlist!", product_name),
            WishlistToggle::Removed => format!("{} removed from wishlist!", product_name),
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, WishlistToggle::Added)
    }
}

/// The wishlist.
///
/// `items` keeps insertion order for the wishlist screen; `ids` mirrors it
/// for constant-time membership checks. Both are only changed together.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    items: Vec<WishlistItem>,
    ids: HashSet<ProductId>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a product. Already saved products are left unchanged.
    ///
    /// Returns `true` if the product was inserted.
    pub fn add_to_wishlist(&mut self, product: &Product) -> CoreResult<bool> {
        validate_product(product)?;

        if self.ids.contains(&product.id) {
            return Ok(false);
        }

        self.ids.insert(product.id.clone());
        self.items.push(WishlistItem {
            product: product.clone(),
            added_at: Utc::now(),
        });
        Ok(true)
    }

    /// Removes a saved product. Removing an unknown id is a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> Option<WishlistItem> {
        if !self.ids.remove(product_id) {
            return None;
        }
        let index = self.items.iter().position(|i| i.product.id == *product_id)?;
        Some(self.items.remove(index))
    }

    /// Removes the product if saved, saves it otherwise.
    ///
    /// Validation only applies on the adding branch, so a product that is
    /// already saved can always be toggled off.
    pub fn toggle_wishlist(&mut self, product: &Product) -> CoreResult<WishlistToggle> {
        if self.remove_from_wishlist(&product.id).is_some() {
            return Ok(WishlistToggle::Removed);
        }
        self.add_to_wishlist(product)?;
        Ok(WishlistToggle::Added)
    }

    pub fn clear_wishlist(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.ids.contains(product_id)
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&WishlistItem> {
        if !self.is_in_wishlist(product_id) {
            return None;
        }
        self.items.iter().find(|i| i.product.id == *product_id)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(1000))
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = WishlistStore::new();
        let p = product("1");

        assert!(wishlist.add_to_wishlist(&p).unwrap());
        let first_added = wishlist.get(&p.id).unwrap().added_at;

        let mut renamed = p.clone();
        renamed.name = "Renamed".to_string();
        assert!(!wishlist.add_to_wishlist(&renamed).unwrap());

        assert_eq!(wishlist.len(), 1);
        let stored = wishlist.get(&p.id).unwrap();
        assert_eq!(stored.product.name, "Product 1");
        assert_eq!(stored.added_at, first_added);
    }

    #[test]
    fn test_membership_tracks_add_and_remove() {
        let mut wishlist = WishlistStore::new();
        let products: Vec<Product> = (1..=4).map(|i| product(&i.to_string())).collect();

        for p in &products {
            wishlist.add_to_wishlist(p).unwrap();
            assert!(wishlist.is_in_wishlist(&p.id));
        }
        for p in &products {
            assert!(wishlist.remove_from_wishlist(&p.id).is_some());
            assert!(!wishlist.is_in_wishlist(&p.id));
        }
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(&product("1")).unwrap();

        assert!(wishlist.remove_from_wishlist(&ProductId::from("2")).is_none());
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut wishlist = WishlistStore::new();
        let kept = product("1");
        wishlist.add_to_wishlist(&kept).unwrap();

        let b = product("2");
        assert_eq!(wishlist.toggle_wishlist(&b).unwrap(), WishlistToggle::Added);
        assert!(wishlist.is_in_wishlist(&b.id));
        assert_eq!(wishlist.toggle_wishlist(&b).unwrap(), WishlistToggle::Removed);
        assert!(!wishlist.is_in_wishlist(&b.id));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.is_in_wishlist(&kept.id));
    }

    #[test]
    fn test_toggle_from_empty_round_trip() {
        let mut wishlist = WishlistStore::new();
        let b = product("B");

        wishlist.toggle_wishlist(&b).unwrap();
        assert!(wishlist.is_in_wishlist(&b.id));
        wishlist.toggle_wishlist(&b).unwrap();
        assert!(!wishlist.is_in_wishlist(&b.id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut wishlist = WishlistStore::new();
        assert!(wishlist.add_to_wishlist(&product("")).is_err());
        assert!(wishlist.toggle_wishlist(&product(" ")).is_err());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut wishlist = WishlistStore::new();
        for id in ["3", "1", "2"] {
            wishlist.add_to_wishlist(&product(id)).unwrap();
        }
        wishlist.remove_from_wishlist(&ProductId::from("1"));

        let order: Vec<&str> = wishlist.items().iter().map(|i| i.product_id().as_str()).collect();
        assert_eq!(order, vec!["3", "2"]);
    }

    #[test]
    fn test_clear() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(&product("1")).unwrap();
        wishlist.add_to_wishlist(&product("2")).unwrap();

        wishlist.clear_wishlist();
        assert!(wishlist.is_empty());
        assert!(!wishlist.is_in_wishlist(&ProductId::from("1")));
    }

    #[test]
    fn test_toggle_notice() {
        assert_eq!(
            WishlistToggle::Added.notice("Sneakers"),
            "Sneakers added to wishlist!"
        );
        assert_eq!(
            WishlistToggle::Removed.notice("Sneakers"),
            "Sneakers removed from wishlist!"
        );
    }
}
