//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Tally Architecture                       │
//! │                                                             │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │                 apps/register (CLI)                   │  │
//! │  │        builds a cart, prints the ticket               │  │
//! │  └──────────────────────────┬────────────────────────────┘  │
//! │                             │                               │
//! │  ┌──────────────────────────▼────────────────────────────┐  │
//! │  │            ★ tally-core (THIS CRATE) ★                │  │
//! │  │                                                       │  │
//! │  │  ┌────────┐ ┌────────┐ ┌──────────┐ ┌─────────────┐   │  │
//! │  │  │ types  │ │ money  │ │ discount │ │    cart     │   │  │
//! │  │  │ Item   │ │ Money  │ │ percent  │ │   receipt   │   │  │
//! │  │  └────────┘ └────────┘ └──────────┘ └─────────────┘   │  │
//! │  │                                                       │  │
//! │  │  NO I/O • NO LOCALE • PURE FUNCTIONS                  │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemType)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - The discount rule: (type, quantity) → percentage
//! - [`receipt`] - Column-aligned text-table layout
//! - [`cart`] - The cart: ordered items, validation, ticket rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation used by the cart
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The ticket is returned as a `String`; callers decide where it goes
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Cart, ItemType, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Apple", Money::from_major_minor(0, 99), 5, ItemType::New)?;
//!
//! let ticket = cart.formatted_ticket();
//! assert!(ticket.contains("$4.95"));
//! # Ok::<(), tally_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Cart` instead of
// `use tally_core::cart::Cart`

pub use cart::Cart;
pub use discount::{discount_percent, MAX_DISCOUNT_PERCENT};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use receipt::Alignment;
pub use types::{Item, ItemType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item title, in characters.
///
/// ## Business Reason
/// Receipt columns auto-size to their longest cell; a bounded title keeps
/// tickets printable on narrow paper.
pub const MAX_TITLE_CHARS: usize = 32;
