//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Error Types                           │
//! │                                                             │
//! │  ValidationError  - invalid argument to Cart::add_item      │
//! │                                                             │
//! │  That is the whole surface: validation happens before any   │
//! │  mutation, so every other operation is total. Rendering a   │
//! │  ticket cannot fail because stored items are pre-validated. │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message naming the constraint

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously by `Cart::add_item` when an argument violates a
/// constraint. A failed call leaves the cart unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_constraint() {
        let err = ValidationError::Required { field: "title" };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::TooLong {
            field: "title",
            max: 32,
        };
        assert_eq!(err.to_string(), "title must be at most 32 characters");

        let err = ValidationError::MustBePositive { field: "price" };
        assert_eq!(err.to_string(), "price must be greater than zero");

        let err = ValidationError::BelowMinimum {
            field: "quantity",
            min: 1,
        };
        assert_eq!(err.to_string(), "quantity must be at least 1");
    }
}
