//! # Cart
//!
//! The shopping cart: an ordered sequence of validated items and the
//! compute-then-render pipeline that turns it into a ticket.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                          │
//! │                                                             │
//! │  Caller Action            Cart State Change                 │
//! │  ─────────────            ─────────────────                 │
//! │  add_item(...) ─────────► validate, then items.push(item)   │
//! │                                                             │
//! │  formatted_ticket() ────► (read only) per item:             │
//! │                             discount_percent(type, qty)     │
//! │                             line total in exact sub-cents   │
//! │                           then table layout via receipt     │
//! │                                                             │
//! │  No intermediate state persists across render calls.        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None provided here: the item sequence is exclusively owned. A caller
//! needing shared access wraps the whole cart (`Arc<Mutex<Cart>>`) and
//! serializes calls externally.

use serde::{Deserialize, Serialize};

use crate::discount::discount_percent;
use crate::error::ValidationResult;
use crate::money::Money;
use crate::receipt::{render_table, Row};
use crate::types::{Item, ItemType};
use crate::validation::{validate_price, validate_quantity, validate_title};

/// Ticket text for a cart with no items.
const EMPTY_TICKET: &str = "No items.";

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved; it determines receipt row order and the
///   1-based `#` column.
/// - Every stored item has passed validation at insertion time, so
///   rendering never re-checks fields and cannot fail.
/// - Duplicate titles are allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds an item to the end of the cart.
    ///
    /// ## Validation
    /// - `title`: 1-32 characters
    /// - `price`: > 0
    /// - `quantity`: >= 1
    ///
    /// Validation happens before any mutation: a failed call returns the
    /// constraint that was violated and leaves the cart unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Cart, ItemType, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("Apple", Money::from_cents(99), 5, ItemType::New)?;
    /// assert_eq!(cart.item_count(), 1);
    /// # Ok::<(), tally_core::ValidationError>(())
    /// ```
    pub fn add_item(
        &mut self,
        title: &str,
        price: Money,
        quantity: i64,
        item_type: ItemType,
    ) -> ValidationResult<()> {
        validate_title(title)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        self.items
            .push(Item::new(title.to_string(), price, quantity, item_type));
        Ok(())
    }

    /// Returns the number of items (lines) in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read access to the stored items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Renders the full ticket.
    ///
    /// An empty cart yields exactly `"No items."`. Otherwise: header, dash
    /// separator, one row per item in insertion order, another separator,
    /// and a footer carrying the item count and the grand total. The grand
    /// total is the exact sum of the unrounded line totals, rounded to
    /// cents once at the end.
    pub fn formatted_ticket(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_TICKET.to_string();
        }

        let mut rows: Vec<Row> = Vec::with_capacity(self.items.len());
        // Exact accumulator in sub-cents (1/100 cent); no per-line rounding
        let mut total_subcents: i128 = 0;

        for (index, item) in self.items.iter().enumerate() {
            let discount = discount_percent(item.item_type, item.quantity);
            let line_subcents =
                item.price.cents() as i128 * item.quantity as i128 * (100 - discount) as i128;
            total_subcents += line_subcents;

            rows.push([
                (index + 1).to_string(),
                item.title.clone(),
                item.price.to_string(),
                item.quantity.to_string(),
                discount_cell(discount),
                Money::from_subcents(line_subcents).to_string(),
            ]);
        }

        let footer: Row = [
            self.items.len().to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            Money::from_subcents(total_subcents).to_string(),
        ];

        render_table(&rows, &footer)
    }
}

/// Discount column text: `"-"` for no discount, otherwise `"<N>%"`.
fn discount_cell(discount: u32) -> String {
    if discount == 0 {
        "-".to_string()
    } else {
        format!("{discount}%")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn demo_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Apple", Money::from_major_minor(0, 99), 5, ItemType::New)
            .unwrap();
        cart.add_item(
            "Banana",
            Money::from_major_minor(20, 0),
            4,
            ItemType::SecondFree,
        )
        .unwrap();
        cart.add_item(
            "Toilet Paper",
            Money::from_major_minor(17, 20),
            1,
            ItemType::Sale,
        )
        .unwrap();
        cart.add_item("Nails", Money::from_major_minor(2, 0), 500, ItemType::Regular)
            .unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_ticket() {
        assert_eq!(Cart::new().formatted_ticket(), "No items.");
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let cart = demo_cart();
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.items()[0].title, "Apple");
        assert_eq!(cart.items()[3].title, "Nails");
    }

    #[test]
    fn test_add_item_rejects_invalid_arguments() {
        let mut cart = Cart::new();
        let price = Money::from_cents(100);

        assert_eq!(
            cart.add_item("", price, 1, ItemType::Regular),
            Err(ValidationError::Required { field: "title" })
        );
        assert_eq!(
            cart.add_item(&"A".repeat(33), price, 1, ItemType::Regular),
            Err(ValidationError::TooLong {
                field: "title",
                max: 32
            })
        );
        assert_eq!(
            cart.add_item("Apple", Money::zero(), 1, ItemType::Regular),
            Err(ValidationError::MustBePositive { field: "price" })
        );
        assert_eq!(
            cart.add_item("Apple", Money::from_cents(-100), 1, ItemType::Regular),
            Err(ValidationError::MustBePositive { field: "price" })
        );
        assert_eq!(
            cart.add_item("Apple", price, 0, ItemType::Regular),
            Err(ValidationError::BelowMinimum {
                field: "quantity",
                min: 1
            })
        );

        // Failed calls leave the cart untouched
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.formatted_ticket(), "No items.");
    }

    #[test]
    fn test_discount_cell_text() {
        assert_eq!(discount_cell(0), "-");
        assert_eq!(discount_cell(50), "50%");
        assert_eq!(discount_cell(7), "7%");
    }

    #[test]
    fn test_footer_total_is_exact_sum_of_line_totals() {
        // Apple  $0.99 × 5, no discount        → $4.95
        // Banana $20.00 × 4, 50%               → $40.00
        // Toilet Paper $17.20 × 1, 70%         → $5.16
        // Nails  $2.00 × 500, 50%              → $500.00
        let ticket = demo_cart().formatted_ticket();
        assert!(ticket.contains("$550.11"));
    }

    #[test]
    fn test_demo_cart_ticket_layout() {
        let expected = "\
# Item          Price Quan. Discount   Total \n\
--------------------------------------------\n\
1 Apple         $0.99     5        -   $4.95 \n\
2 Banana       $20.00     4      50%  $40.00 \n\
3 Toilet Paper $17.20     1      70%   $5.16 \n\
4 Nails         $2.00   500      50% $500.00 \n\
--------------------------------------------\n\
4                                    $550.11 \n";
        assert_eq!(demo_cart().formatted_ticket(), expected);
    }

    #[test]
    fn test_single_row_index_matches_footer_count() {
        let mut cart = Cart::new();
        cart.add_item("Apple", Money::from_cents(99), 1, ItemType::New)
            .unwrap();
        let ticket = cart.formatted_ticket();

        let lines: Vec<&str> = ticket.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("1 "));
        assert!(lines[4].starts_with("1 "));
    }
}
