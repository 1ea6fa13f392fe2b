//! # Validation Module
//!
//! Parsing for the two things a shopper can type: a menu selection and a
//! quantity.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling                                     │
//! │                                                                         │
//! │  Selection prompt ──► parse_selection ──┬── 0 ───────► Checkout         │
//! │                                         ├── 1..=n ───► Item(index)      │
//! │                                         └── else ────► InvalidSelection │
//! │                                                                         │
//! │  Quantity prompt ───► parse_quantity ───┬── integer ─► i64 (any sign)   │
//! │                                         └── else ────► InvalidQuantity  │
//! │                                                                         │
//! │  Non-numeric and out-of-range selections get the SAME notice; the       │
//! │  shopper is never told which way the input was wrong.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::InputError;

/// Result type for input parsing.
pub type InputResult<T> = Result<T, InputError>;

/// What the shopper picked at the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0`: leave the loop and print the summary.
    Checkout,
    /// A product, as a 0-based inventory position.
    Item(usize),
}

/// Parses a selection prompt entry against the current shelf size.
///
/// `0` checks out; `1..=product_count` picks a product. Anything else —
/// including non-numeric input — is the one shared invalid-option error.
///
/// ## Example
/// ```rust
/// use boutique_core::{parse_selection, Selection};
///
/// assert_eq!(parse_selection("3", 8), Ok(Selection::Item(2)));
/// assert_eq!(parse_selection("0", 8), Ok(Selection::Checkout));
/// assert!(parse_selection("9", 8).is_err());
/// assert!(parse_selection("three", 8).is_err());
/// ```
pub fn parse_selection(input: &str, product_count: usize) -> InputResult<Selection> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidSelection { max: product_count })?;

    match choice {
        0 => Ok(Selection::Checkout),
        n if n <= product_count => Ok(Selection::Item(n - 1)),
        _ => Err(InputError::InvalidSelection { max: product_count }),
    }
}

/// Parses a quantity prompt entry.
///
/// Integer parsing only: sign and magnitude are NOT checked here, so `0`
/// and `-3` come back as valid quantities. The reservation path keeps
/// that edge case, pinned in the inventory tests.
pub fn parse_quantity(input: &str) -> InputResult<i64> {
    input.trim().parse().map_err(|_| InputError::InvalidQuantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_zero_is_checkout() {
        assert_eq!(parse_selection("0", 8), Ok(Selection::Checkout));
        assert_eq!(parse_selection(" 0 \n", 8), Ok(Selection::Checkout));
    }

    #[test]
    fn test_selection_maps_to_zero_based_index() {
        assert_eq!(parse_selection("1", 8), Ok(Selection::Item(0)));
        assert_eq!(parse_selection("8", 8), Ok(Selection::Item(7)));
    }

    #[test]
    fn test_selection_out_of_range() {
        assert_eq!(
            parse_selection("9", 8),
            Err(InputError::InvalidSelection { max: 8 })
        );
    }

    #[test]
    fn test_selection_non_numeric_gets_same_error_as_out_of_range() {
        let non_numeric = parse_selection("abc", 8).unwrap_err();
        let out_of_range = parse_selection("42", 8).unwrap_err();
        assert_eq!(non_numeric, out_of_range);
    }

    #[test]
    fn test_selection_negative_is_invalid() {
        assert!(parse_selection("-1", 8).is_err());
    }

    #[test]
    fn test_quantity_parses_any_integer() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 100 \n"), Ok(100));
        // Sign and zero pass through untouched
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("-3"), Ok(-3));
    }

    #[test]
    fn test_quantity_rejects_non_integers() {
        assert_eq!(parse_quantity("many"), Err(InputError::InvalidQuantity));
        assert_eq!(parse_quantity("2.5"), Err(InputError::InvalidQuantity));
        assert_eq!(parse_quantity(""), Err(InputError::InvalidQuantity));
    }
}
