//! # Boutique Terminal Library
//!
//! Wires the interactive store session onto stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! boutique_terminal/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── session.rs      ◄─── Store controller and the selection loop
//! └── seed.rs         ◄─── Fixed starting catalog (8 products)
//! ```

pub mod seed;
pub mod session;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use session::Store;

/// Runs one interactive store session over stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Seed the inventory with the fixed catalog
/// 3. Hand stdin/stdout to the selection loop
///
/// The session always exits cleanly: bad input is recovered inside the
/// loop, and end-of-input behaves like the `0` checkout selection. A
/// failure to write to stdout is logged and otherwise ignored.
pub fn run() {
    init_tracing();

    info!("Starting boutique terminal session");

    let mut store = Store::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = store.run(&mut stdin.lock(), &mut stdout.lock()) {
        error!(%e, "session I/O failed");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=boutique_terminal=trace` - Trace the session only
/// - Default: WARN, so diagnostics stay out of the shopper's console
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
