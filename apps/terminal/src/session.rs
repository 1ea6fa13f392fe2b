//! # Store Session
//!
//! The controller that owns one inventory and one cart and drives the
//! interactive selection loop.
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Session                                      │
//! │                                                                         │
//! │  ┌──────────┐      ┌─────────────────┐      ┌──────────────────┐       │
//! │  │   Init   │─────►│  Selection loop │─────►│     Checkout     │       │
//! │  │  (seed)  │      │                 │  0   │  (cart summary)  │       │
//! │  └──────────┘      └─────────────────┘      └──────────────────┘       │
//! │                      │           ▲                                      │
//! │                      │           │ invalid option / bad quantity /      │
//! │                      │           │ insufficient stock: notice, retry    │
//! │                      ▼           │                                      │
//! │                    listing ──────┘                                      │
//! │                                                                         │
//! │  End-of-input on the reader is treated as the 0 selection: the loop     │
//! │  checks out instead of failing.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is generic over `BufRead`/`Write` so a whole session can run
//! against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::{debug, info, warn};

use boutique_core::{parse_quantity, parse_selection, Cart, CartLine, Inventory, Selection};

use crate::seed;

/// The interactive store: one inventory and one cart per session.
#[derive(Debug)]
pub struct Store {
    inventory: Inventory,
    cart: Cart,
}

impl Store {
    /// Creates a store stocked with the fixed starting catalog.
    pub fn new() -> Self {
        Store {
            inventory: seed::starting_inventory(),
            cart: Cart::new(),
        }
    }

    /// Read access to the shelf (used by tests and diagnostics).
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Runs the whole session: banner, selection loop, checkout summary.
    ///
    /// Every recognized failure — invalid option, malformed quantity,
    /// insufficient stock — prints a notice and re-loops without touching
    /// state. Only reader/writer failures surface as errors.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "Welcome to the Clothing Store!".bold())?;

        loop {
            writeln!(out)?;
            writeln!(out, "{}", "Store inventory".bold())?;
            write!(out, "{}", self.inventory.listing())?;
            write!(out, "Select a product number (0 to check out): ")?;
            out.flush()?;

            let Some(entry) = read_entry(input)? else {
                debug!("input closed, checking out");
                break;
            };

            let index = match parse_selection(&entry, self.inventory.len()) {
                Ok(Selection::Checkout) => break,
                Ok(Selection::Item(index)) => index,
                Err(e) => {
                    warn!(entry = entry.trim(), "rejected selection");
                    writeln!(out, "{}", e.to_string().red())?;
                    continue;
                }
            };

            // parse_selection bounds-checks against the current shelf size
            let name = match self.inventory.get(index) {
                Some(product) => product.name.clone(),
                None => continue,
            };

            write!(out, "Quantity of '{}' to buy: ", name)?;
            out.flush()?;

            let Some(entry) = read_entry(input)? else {
                debug!("input closed, checking out");
                break;
            };

            let quantity = match parse_quantity(&entry) {
                Ok(quantity) => quantity,
                Err(e) => {
                    warn!(entry = entry.trim(), "rejected quantity");
                    writeln!(out, "{}", e.to_string().red())?;
                    continue;
                }
            };

            match self.inventory.reserve(index, quantity) {
                Ok(product) => {
                    let line = CartLine::from_product(product, quantity);
                    info!(
                        product = %line.name,
                        quantity,
                        subtotal = %line.line_total(),
                        "added to cart"
                    );
                    writeln!(
                        out,
                        "{}",
                        format!("Added {} x {} to the cart.", quantity, line.name).green()
                    )?;
                    self.cart.add_line(line);
                }
                Err(e) => {
                    warn!(%e, "reservation rejected");
                    writeln!(out, "{}", e.to_string().red())?;
                }
            }
        }

        info!(total = %self.cart.total(), lines = self.cart.line_count(), "checkout");
        writeln!(out)?;
        write!(out, "{}", self.cart.summary())?;
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one line of input; `None` means the reader is exhausted.
fn read_entry<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::Money;
    use std::io::Cursor;

    /// Runs a whole session against a scripted stdin, returning the store
    /// and everything that was written to stdout.
    fn run_session(script: &str) -> (Store, String) {
        let mut store = Store::new();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        store.run(&mut input, &mut output).unwrap();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_purchase_session() {
        // 3 Men's Shirts, a rejected 100 Women's Dresses, then checkout
        let (store, output) = run_session("1\n3\n4\n100\n0\n");

        assert_eq!(store.inventory().get(0).unwrap().stock, 22);
        assert_eq!(store.inventory().get(3).unwrap().stock, 10);
        assert_eq!(store.cart().line_count(), 1);
        assert_eq!(store.cart().total(), Money::from_amount(240_000));

        assert!(output.contains("Welcome to the Clothing Store!"));
        assert!(output.contains("Added 3 x Men's Shirt to the cart."));
        assert!(output.contains(
            "Insufficient stock for Women's Dress: available 10, requested 100"
        ));
        assert!(output.contains("Men's Shirt - Quantity: 3 - Subtotal: Gs.240000"));
        assert!(output.contains("Total to pay: Gs.240000"));
        assert!(!output.contains("Women's Dress - Quantity"));
    }

    #[test]
    fn test_immediate_checkout_leaves_everything_untouched() {
        let (store, output) = run_session("0\n");

        assert_eq!(store.cart().line_count(), 0);
        assert_eq!(store.inventory().get(0).unwrap().stock, 25);
        assert!(output.contains("Total to pay: Gs.0"));
    }

    #[test]
    fn test_out_of_range_selection_is_recovered() {
        let (store, output) = run_session("9\n0\n");

        assert_eq!(store.cart().line_count(), 0);
        assert_eq!(store.inventory().get(0).unwrap().stock, 25);
        assert!(output.contains("Invalid option. Enter a number between 1 and 8"));
    }

    #[test]
    fn test_non_numeric_selection_gets_the_same_notice() {
        let (_, out_non_numeric) = run_session("shirt\n0\n");
        let (_, out_out_of_range) = run_session("42\n0\n");

        let notice = "Invalid option. Enter a number between 1 and 8, or 0 to check out.";
        assert!(out_non_numeric.contains(notice));
        assert!(out_out_of_range.contains(notice));
    }

    #[test]
    fn test_malformed_quantity_is_recovered() {
        let (store, output) = run_session("1\nmany\n0\n");

        assert_eq!(store.cart().line_count(), 0);
        assert_eq!(store.inventory().get(0).unwrap().stock, 25);
        assert!(output.contains("Invalid quantity. Enter a whole number."));
    }

    #[test]
    fn test_repeat_picks_accumulate_lines_and_stock_changes() {
        let (store, _) = run_session("1\n2\n1\n3\n0\n");

        assert_eq!(store.inventory().get(0).unwrap().stock, 20);
        assert_eq!(store.cart().line_count(), 2);
        assert_eq!(store.cart().total(), Money::from_amount(400_000));
    }

    #[test]
    fn test_end_of_input_checks_out() {
        // No explicit 0: the script just ends
        let (store, output) = run_session("1\n3\n");

        assert_eq!(store.cart().line_count(), 1);
        assert!(output.contains("Total to pay: Gs.240000"));
    }

    #[test]
    fn test_end_of_input_at_quantity_prompt_checks_out() {
        let (store, output) = run_session("1\n");

        assert_eq!(store.cart().line_count(), 0);
        assert!(output.contains("Total to pay: Gs.0"));
    }

    /// Pins the inherited edge case end to end: a negative quantity is
    /// accepted, restocks the shelf, and drives the total negative.
    #[test]
    fn test_negative_quantity_session() {
        let (store, output) = run_session("1\n-3\n0\n");

        assert_eq!(store.inventory().get(0).unwrap().stock, 28);
        assert_eq!(store.cart().total(), Money::from_amount(-240_000));
        assert!(output.contains("Total to pay: Gs.-240000"));
    }

    #[test]
    fn test_listing_reflects_depleted_stock_on_next_turn() {
        let (_, output) = run_session("1\n3\n0\n");

        assert!(output.contains("Name: Men's Shirt, Price: Gs.80000, Stock: 25"));
        assert!(output.contains("Name: Men's Shirt, Price: Gs.80000, Stock: 22"));
    }
}
