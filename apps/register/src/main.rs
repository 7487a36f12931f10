//! # Register Entry Point
//!
//! Demonstration driver for tally-core.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the illustrative cart
//! 3. Print the formatted ticket to stdout
//!
//! ## Usage
//! ```bash
//! cargo run -p tally-register
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p tally-register
//! ```

use std::error::Error;

use tally_core::{Cart, ItemType, Money};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut cart = Cart::new();
    cart.add_item("Apple", Money::from_major_minor(0, 99), 5, ItemType::New)?;
    cart.add_item(
        "Banana",
        Money::from_major_minor(20, 0),
        4,
        ItemType::SecondFree,
    )?;
    cart.add_item(
        "Toilet Paper",
        Money::from_major_minor(17, 20),
        1,
        ItemType::Sale,
    )?;
    cart.add_item("Nails", Money::from_major_minor(2, 0), 500, ItemType::Regular)?;

    info!(items = cart.item_count(), "cart assembled");

    print!("{}", cart.formatted_ticket());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: WARN level, so the ticket is the only stdout/stderr output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
