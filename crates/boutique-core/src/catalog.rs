//! # Catalog Types
//!
//! The product type and its apparel variants.
//!
//! ## Variant Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Product                                        │
//! │   id (UUID) · name · price (Money) · stock · kind (Apparel)            │
//! │                                                                         │
//! │                          Apparel                                        │
//! │   ┌────────────┐ ┌──────────┐ ┌──────────┐ ┌────────────────────┐     │
//! │   │  Clothing  │ │  Shirt   │ │  Pants   │ │       Shoe         │     │
//! │   │  size      │ │  size    │ │  size    │ │  size, style       │     │
//! │   └────────────┘ └──────────┘ └──────────┘ └────────────────────┘     │
//! │                                                                         │
//! │   Variants share the same data except the shoe's style; they differ    │
//! │   only in the extra line `describe()` appends after the base line.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, carried into cart line snapshots
//! - Shelf position: the 1-based listing index the shopper types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Shoe Style
// =============================================================================

/// How a shoe is worn. Displayed as its label in the shoe's detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoeStyle {
    Casual,
    Formal,
}

impl fmt::Display for ShoeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShoeStyle::Casual => write!(f, "Casual"),
            ShoeStyle::Formal => write!(f, "Formal"),
        }
    }
}

// =============================================================================
// Apparel Variants
// =============================================================================

/// The apparel kind of a product.
///
/// A tagged union instead of an inheritance chain: the base description is
/// shared by [`Product::describe`], and each kind contributes at most one
/// extra detail line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Apparel {
    /// Generic clothing (jackets, dresses). No detail line of its own.
    Clothing { size: String },
    Shirt { size: String },
    Pants { size: String },
    Shoe { size: String, style: ShoeStyle },
}

impl Apparel {
    /// Returns the size label shared by every variant.
    pub fn size(&self) -> &str {
        match self {
            Apparel::Clothing { size }
            | Apparel::Shirt { size }
            | Apparel::Pants { size }
            | Apparel::Shoe { size, .. } => size,
        }
    }

    /// The extra description line for this kind, if it has one.
    ///
    /// Generic clothing prints nothing beyond the base line.
    fn detail_line(&self) -> Option<String> {
        match self {
            Apparel::Clothing { .. } => None,
            Apparel::Shirt { size } => Some(format!("Size: {} (Shirt)", size)),
            Apparel::Pants { size } => Some(format!("Size: {} (Pants)", size)),
            Apparel::Shoe { size, style } => {
                Some(format!("Size: {}, Type: {} (Shoe)", size, style))
            }
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Display name shown in the listing and on the receipt.
    pub name: String,

    /// Unit price in whole guaraníes.
    pub price: Money,

    /// Remaining sellable units. Mutated only through
    /// [`Inventory::reserve`](crate::inventory::Inventory::reserve).
    pub stock: i64,

    /// Apparel variant, drives the detail line of [`Product::describe`].
    pub kind: Apparel,
}

impl Product {
    /// Creates a product with a fresh id.
    pub fn new(name: impl Into<String>, price: Money, stock: i64, kind: Apparel) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            stock,
            kind,
        }
    }

    /// Generic clothing without a category of its own.
    pub fn clothing(name: impl Into<String>, price: Money, stock: i64, size: impl Into<String>) -> Self {
        Product::new(name, price, stock, Apparel::Clothing { size: size.into() })
    }

    pub fn shirt(name: impl Into<String>, price: Money, stock: i64, size: impl Into<String>) -> Self {
        Product::new(name, price, stock, Apparel::Shirt { size: size.into() })
    }

    pub fn pants(name: impl Into<String>, price: Money, stock: i64, size: impl Into<String>) -> Self {
        Product::new(name, price, stock, Apparel::Pants { size: size.into() })
    }

    pub fn shoe(
        name: impl Into<String>,
        price: Money,
        stock: i64,
        size: impl Into<String>,
        style: ShoeStyle,
    ) -> Self {
        Product::new(
            name,
            price,
            stock,
            Apparel::Shoe {
                size: size.into(),
                style,
            },
        )
    }

    /// Renders the multi-line description shown in the inventory listing.
    ///
    /// Base line first, then the variant's detail line if it has one:
    ///
    /// ```rust
    /// use boutique_core::{Money, Product, ShoeStyle};
    ///
    /// let shoes = Product::shoe("Men's Shoes", Money::from_amount(200_000), 25, "42", ShoeStyle::Casual);
    /// assert_eq!(
    ///     shoes.describe(),
    ///     "Name: Men's Shoes, Price: Gs.200000, Stock: 25\nSize: 42, Type: Casual (Shoe)"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let base = format!(
            "Name: {}, Price: {}, Stock: {}",
            self.name, self.price, self.stock
        );
        match self.kind.detail_line() {
            Some(detail) => format!("{}\n{}", base, detail),
            None => base,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
