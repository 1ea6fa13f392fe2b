//! # Error Types
//!
//! Domain-specific error types for boutique-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boutique-core errors (this file)                                      │
//! │  ├── StoreError  - Stock reservation failures                          │
//! │  └── InputError  - Menu/quantity input that fails to parse             │
//! │                                                                         │
//! │  Both kinds are recovered inside the selection loop and surfaced as    │
//! │  user-facing notices; neither ends the session.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, available stock)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Stock reservation errors.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No product at the given shelf position.
    ///
    /// The selection parser bounds-checks before lookup, so this surfaces
    /// only when `reserve` is called directly with a stale index.
    #[error("No product at position {index}")]
    ProductNotFound { index: usize },

    /// Requested quantity exceeds the remaining stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity prompt: 100
    ///      │
    ///      ▼
    /// reserve(index, 100) — available: 10
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Women's Dress", available: 10, requested: 100 }
    ///      │
    ///      ▼
    /// Notice printed, loop continues, nothing changed
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}

// =============================================================================
// Input Error
// =============================================================================

/// Console input that fails to parse.
///
/// Non-numeric selections and out-of-range selections deliberately share
/// one variant: the shopper sees the same notice for both.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid option. Enter a number between 1 and {max}, or 0 to check out.")]
    InvalidSelection { max: usize },

    #[error("Invalid quantity. Enter a whole number.")]
    InvalidQuantity,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
