//! # Cart
//!
//! Cart lines and purchase math.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Shopper Action          Session Step              Cart Change          │
//! │  ──────────────          ────────────              ───────────          │
//! │                                                                         │
//! │  Pick product + qty ───► inventory.reserve() ────► add_line(snapshot)   │
//! │                                                                         │
//! │  Enter 0 ──────────────► checkout ───────────────► summary() (read)     │
//! │                                                                         │
//! │  Every add appends its own line, in order. Repeat picks of the same     │
//! │  product stay separate lines; nothing is ever merged or removed.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uuid::Uuid;

use crate::catalog::Product;
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One recorded pick: a product snapshot plus the requested quantity.
///
/// ## Price Freezing
/// Name and unit price are captured at reserve time. The line stays
/// consistent even if the shelf entry changes afterwards; only the
/// product id ties the two together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the product this line was taken from.
    pub product_id: Uuid,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity requested. May be zero or negative — the reservation path
    /// only enforces the stock upper bound.
    pub quantity: i64,

    /// When this line was added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a cart line by snapshotting a product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line subtotal: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopper's cart: cart lines in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Appends a line to the cart.
    ///
    /// Stock policy lives in the inventory's reserve step; by the time a
    /// line reaches the cart it is unconditional.
    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Grand total: sum of every line subtotal.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the purchase summary: one subtotal line per cart line in
    /// insertion order, then the grand total.
    ///
    /// An empty cart renders the header and a zero total with no item
    /// lines. Pure read — printing the summary changes nothing.
    pub fn summary(&self) -> String {
        let mut out = String::from("Purchase summary:\n");
        for line in &self.lines {
            // String formatting cannot fail
            let _ = writeln!(
                out,
                "{} - Quantity: {} - Subtotal: {}",
                line.name,
                line.quantity,
                line.line_total()
            );
        }
        let _ = writeln!(out, "Total to pay: {}", self.total());
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
