//! # Discount Engine
//!
//! Maps (item type, quantity) to an integer discount percentage.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Discount Rule                           │
//! │                                                             │
//! │  Base discount by type:                                     │
//! │    New        → 0                                           │
//! │    Regular    → 0                                           │
//! │    SecondFree → 50 if quantity > 1, else 0                  │
//! │    Sale       → 70                                          │
//! │                                                             │
//! │  Bulk bonus (every type except New):                        │
//! │    + min(80, quantity / 10)     (integer division)          │
//! │                                                             │
//! │  Final: min(base + bonus, 80)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and total over its domain; quantity is validated upstream by the
//! cart, so every stored item sees a quantity of at least 1.

use crate::types::ItemType;

/// Ceiling on any discount, in percent.
pub const MAX_DISCOUNT_PERCENT: u32 = 80;

/// Computes the discount percentage for an item.
///
/// Returns a value in `[0, 80]`. The match on `ItemType` is exhaustive:
/// adding a variant forces a decision here.
///
/// ## Example
/// ```rust
/// use tally_core::discount::discount_percent;
/// use tally_core::types::ItemType;
///
/// assert_eq!(discount_percent(ItemType::SecondFree, 2), 50);
/// assert_eq!(discount_percent(ItemType::Sale, 1), 70);
/// ```
pub fn discount_percent(item_type: ItemType, quantity: i64) -> u32 {
    let base: u32 = match item_type {
        ItemType::New => 0,
        ItemType::Regular => 0,
        ItemType::SecondFree => {
            if quantity > 1 {
                50
            } else {
                0
            }
        }
        ItemType::Sale => 70,
    };

    let discount = if item_type == ItemType::New {
        base
    } else {
        // Integer division: quantity 95 earns a bonus of 9, not 9.5
        let bonus = (quantity / 10).min(MAX_DISCOUNT_PERCENT as i64) as u32;
        base + bonus
    };

    discount.min(MAX_DISCOUNT_PERCENT)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_never_discounted() {
        for quantity in [0, 1, 2, 10, 95, 1000, 1_000_000] {
            assert_eq!(discount_percent(ItemType::New, quantity), 0);
        }
    }

    #[test]
    fn test_second_free_needs_more_than_one() {
        assert_eq!(discount_percent(ItemType::SecondFree, 1), 0);
        assert_eq!(discount_percent(ItemType::SecondFree, 2), 50);
    }

    #[test]
    fn test_second_free_bulk_bonus() {
        // 50 base + 30/10 bonus
        assert_eq!(discount_percent(ItemType::SecondFree, 30), 53);
    }

    #[test]
    fn test_sale_flat_seventy() {
        assert_eq!(discount_percent(ItemType::Sale, 1), 70);
    }

    #[test]
    fn test_sale_capped_at_eighty() {
        // 70 base + min(80, 100) bonus, capped at 80
        assert_eq!(discount_percent(ItemType::Sale, 1000), 80);
    }

    #[test]
    fn test_regular_bulk_bonus() {
        // 0 base + min(80, 50) bonus
        assert_eq!(discount_percent(ItemType::Regular, 500), 50);
    }

    #[test]
    fn test_bulk_bonus_uses_integer_division() {
        // 95 / 10 = 9, not 9.5
        assert_eq!(discount_percent(ItemType::Regular, 95), 9);
        assert_eq!(discount_percent(ItemType::Regular, 99), 9);
        assert_eq!(discount_percent(ItemType::Regular, 100), 10);
    }

    #[test]
    fn test_bonus_alone_saturates_the_cap() {
        // Quantity 1000 alone reaches the bonus cap of 80
        assert_eq!(discount_percent(ItemType::Regular, 1000), 80);
        assert_eq!(discount_percent(ItemType::Regular, 10_000), 80);
    }
}
