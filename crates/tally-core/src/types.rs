//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Domain Types                          │
//! │                                                             │
//! │  ┌─────────────────┐          ┌─────────────────┐           │
//! │  │      Item       │          │    ItemType     │           │
//! │  │  ─────────────  │          │  ─────────────  │           │
//! │  │  title          │          │  New            │           │
//! │  │  price (Money)  │          │  Regular        │           │
//! │  │  quantity       │          │  SecondFree     │           │
//! │  │  item_type ─────┼─────────►│  Sale           │           │
//! │  └─────────────────┘          └─────────────────┘           │
//! │                                                             │
//! │  ItemType drives the discount policy (see discount module)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! `Item` is a frozen value: it is constructed only by `Cart::add_item`
//! after validation, is never mutated afterwards, and is owned exclusively
//! by the cart that created it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item Type
// =============================================================================

/// Pricing category of a cart item.
///
/// Closed set; the discount engine matches exhaustively on it, so adding a
/// variant here forces the discount rule to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// New arrival: never discounted, not even for bulk.
    New,
    /// Ordinary stock: bulk bonus only.
    Regular,
    /// "Buy one get second half price": 50% once quantity exceeds one.
    SecondFree,
    /// Clearance: flat 70% off.
    Sale,
}

// =============================================================================
// Item
// =============================================================================

/// A validated line item in the cart.
///
/// ## Invariants (enforced at construction by `Cart::add_item`)
/// - `title` is 1-32 characters
/// - `price` is positive
/// - `quantity` is at least 1
///
/// The receipt renderer relies on these and performs no re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display title, rendered verbatim on the receipt.
    pub title: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Quantity purchased.
    pub quantity: i64,

    /// Pricing category.
    pub item_type: ItemType,
}

impl Item {
    /// Crate-internal constructor; callers go through `Cart::add_item`,
    /// which validates every field first.
    pub(crate) fn new(title: String, price: Money, quantity: i64, item_type: ItemType) -> Self {
        Item {
            title,
            price,
            quantity,
            item_type,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
