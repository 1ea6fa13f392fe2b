//! # Inventory
//!
//! The ordered product shelf and the single place stock is allowed to change.
//!
//! ## Ownership Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory exclusively owns every Product.                              │
//! │                                                                         │
//! │  Cart ───reserve(index, qty)───► Inventory ───► stock -= qty            │
//! │    ▲                                  │                                 │
//! │    └──────── snapshot (&Product) ─────┘                                 │
//! │                                                                         │
//! │  The cart records a frozen copy of name and price; it never holds a     │
//! │  live reference into the shelf.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::catalog::Product;
use crate::error::{StoreError, StoreResult};

/// Width of the separator line printed after each listing entry.
const SEPARATOR_WIDTH: usize = 20;

/// An ordered sequence of products.
///
/// Insertion order is display order is selection order: the shopper picks
/// by 1-based listing position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Appends a product to the end of the shelf.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Returns the product at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Number of distinct products on the shelf.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Renders the 1-based listing shown at the top of every loop turn.
    ///
    /// Each entry is its position, the product's full description, and a
    /// separator line. An empty inventory renders as an empty string.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (position, product) in self.products.iter().enumerate() {
            // String formatting cannot fail; ignore the fmt::Result plumbing
            let _ = writeln!(out, "{}. {}", position + 1, product.describe());
            let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
        }
        out
    }

    /// Reserves `quantity` units of the product at a 0-based position.
    ///
    /// On success the stock is decremented and the product is returned for
    /// snapshotting into a cart line. On failure nothing changes.
    ///
    /// ## Errors
    /// - [`StoreError::ProductNotFound`] for an unknown position
    /// - [`StoreError::InsufficientStock`] when `quantity` exceeds stock
    ///
    /// Zero and negative quantities are accepted: only the upper bound is
    /// checked, so a negative reservation puts units back on the shelf.
    /// Pinned by `test_negative_quantity_restocks`.
    pub fn reserve(&mut self, index: usize, quantity: i64) -> StoreResult<&Product> {
        let product = self
            .products
            .get_mut(index)
            .ok_or(StoreError::ProductNotFound { index })?;

        if quantity > product.stock {
            return Err(StoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        product.stock -= quantity;
        Ok(&*product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn shirt(stock: i64) -> Product {
        Product::shirt("Men's Shirt", Money::from_amount(80_000), stock, "M")
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(shirt(25));
        inventory.add(Product::pants(
            "Men's Pants",
            Money::from_amount(120_000),
            25,
            "L",
        ));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get(0).map(|p| p.name.as_str()), Some("Men's Shirt"));
        assert_eq!(inventory.get(1).map(|p| p.name.as_str()), Some("Men's Pants"));
    }

    #[test]
    fn test_listing_is_one_based_with_separators() {
        let mut inventory = Inventory::new();
        inventory.add(shirt(25));
        inventory.add(Product::clothing(
            "Women's Dress",
            Money::from_amount(45_000),
            10,
            "P",
        ));

        let listing = inventory.listing();
        assert!(listing.starts_with("1. Name: Men's Shirt"));
        assert!(listing.contains("2. Name: Women's Dress"));
        assert_eq!(listing.matches(&"-".repeat(20)).count(), 2);
    }

    #[test]
    fn test_empty_inventory_lists_nothing() {
        assert_eq!(Inventory::new().listing(), "");
    }

    #[test]
    fn test_reserve_decrements_stock() {
        let mut inventory = Inventory::new();
        inventory.add(shirt(25));

        let product = inventory.reserve(0, 3).unwrap();
        assert_eq!(product.stock, 22);
        assert_eq!(inventory.get(0).unwrap().stock, 22);
    }

    #[test]
    fn test_reserve_rejects_over_stock_without_changes() {
        let mut inventory = Inventory::new();
        inventory.add(Product::clothing(
            "Women's Dress",
            Money::from_amount(45_000),
            10,
            "P",
        ));

        let err = inventory.reserve(0, 100).unwrap_err();
        assert_eq!(
            err,
            StoreError::InsufficientStock {
                name: "Women's Dress".to_string(),
                available: 10,
                requested: 100,
            }
        );
        assert_eq!(inventory.get(0).unwrap().stock, 10);
    }

    #[test]
    fn test_reserve_exact_remaining_stock_empties_shelf() {
        let mut inventory = Inventory::new();
        inventory.add(shirt(25));

        inventory.reserve(0, 25).unwrap();
        assert_eq!(inventory.get(0).unwrap().stock, 0);

        let err = inventory.reserve(0, 1).unwrap_err();
        assert!(matches!(err, StoreError::InsufficientStock { available: 0, .. }));
    }

    #[test]
    fn test_reserve_unknown_position() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.reserve(5, 1).unwrap_err(),
            StoreError::ProductNotFound { index: 5 }
        );
    }

    /// Pins the inherited edge case: quantities <= 0 are not rejected, and a
    /// negative reservation increases stock.
    #[test]
    fn test_negative_quantity_restocks() {
        let mut inventory = Inventory::new();
        inventory.add(shirt(25));

        inventory.reserve(0, -3).unwrap();
        assert_eq!(inventory.get(0).unwrap().stock, 28);

        inventory.reserve(0, 0).unwrap();
        assert_eq!(inventory.get(0).unwrap().stock, 28);
    }
}
