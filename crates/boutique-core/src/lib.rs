//! # boutique-core: Pure Business Logic for the Boutique Store
//!
//! This crate is the heart of the boutique demo. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Boutique Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (console shell)                  │   │
//! │  │   welcome banner ──► selection loop ──► checkout summary        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boutique-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │ inventory │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │  reserve  │  │ CartLine  │  │   │
//! │  │   │  Apparel  │  │  Gs. fmt  │  │  listing  │  │  summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PROMPTS • NO TERMINAL • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product type and the `Apparel` variant union
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - Ordered product sequence and stock reservation
//! - [`cart`] - Cart lines (price snapshots) and summary math
//! - [`validation`] - Menu selection and quantity input parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, network, and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole guaraníes (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Single Owner**: The inventory exclusively owns product stock; carts
//!    record snapshots, never live references

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boutique_core::Money` instead of
// `use boutique_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{Apparel, Product, ShoeStyle};
pub use error::{InputError, StoreError, StoreResult};
pub use inventory::Inventory;
pub use money::Money;
pub use validation::{parse_quantity, parse_selection, Selection};
