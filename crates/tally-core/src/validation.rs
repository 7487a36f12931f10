//! # Validation Module
//!
//! Input validation for cart items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Validation Layer                         │
//! │                                                             │
//! │  Cart::add_item(title, price, quantity, item_type)          │
//! │       │                                                     │
//! │       ├── validate_title     (1-32 characters)              │
//! │       ├── validate_price     (> 0)                          │
//! │       └── validate_quantity  (>= 1)                         │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  All pass → Item is constructed and appended.               │
//! │  Any fail → error returned, cart untouched.                 │
//! │                                                             │
//! │  Items are validated exactly once, at insertion; the        │
//! │  renderer assumes well-formed fields from then on.          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_TITLE_CHARS;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 32 characters (character count, not bytes)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_title;
///
/// assert!(validate_title("Toilet Paper").is_ok());
/// assert!(validate_title("").is_err());
/// assert!(validate_title(&"A".repeat(33)).is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() {
        return Err(ValidationError::Required { field: "title" });
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_CHARS,
        });
    }

    Ok(())
}

/// Validates an item price.
///
/// ## Rules
/// - Must be strictly positive (free items are not representable here)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive { field: "price" });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
///
/// There is no upper bound: the discount engine caps the bulk bonus, not
/// the quantity itself.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "quantity",
            min: 1,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
