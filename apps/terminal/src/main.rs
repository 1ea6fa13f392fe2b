//! # Boutique Terminal Entry Point
//!
//! This is the main entry point for the console session.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Boutique Terminal                                │
//! │                                                                         │
//! │  main.rs ────► delegates to lib.rs                                      │
//! │                                                                         │
//! │  lib.rs ─────► sets up tracing, wires stdin/stdout into the session     │
//! │                                                                         │
//! │  session.rs ─► Store: inventory + cart + the selection loop             │
//! │                                                                         │
//! │  seed.rs ────► the eight fixed starting products                        │
//! │                                                                         │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     boutique-core                                │  │
//! │  │  catalog · money · inventory · cart · validation · error         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the inventory
//! 3. Loop: listing → selection prompt → quantity prompt → reserve
//! 4. Checkout: print the purchase summary

fn main() {
    // The actual setup is in lib.rs for better testability.
    // The session always ends successfully: every bad input is recovered
    // inside the loop.
    boutique_terminal::run();
}
