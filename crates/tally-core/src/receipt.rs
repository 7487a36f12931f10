//! # Receipt Layout
//!
//! Column-aligned text-table rendering for tickets.
//!
//! ## Ticket Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Ticket Layout                          │
//! │                                                             │
//! │  # Item         Price Quan. Discount   Total    ← header    │
//! │  ────────────────────────────────────────────   ← separator │
//! │  1 Apple        $0.99     5        -   $4.95    ← rows      │
//! │  2 Banana      $20.00     4      50%  $40.00                │
//! │  ────────────────────────────────────────────   ← separator │
//! │  2                                    $44.95    ← footer    │
//! │                                                             │
//! │  Column width = max cell length in that column              │
//! │  (header, every row, and footer all count).                 │
//! │  Every cell carries one trailing separator space.           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure string manipulation: no output stream, no side
//! effects, so each piece is table-driven testable on its own.

use serde::{Deserialize, Serialize};

/// Number of columns in a ticket.
pub const COLUMN_COUNT: usize = 6;

/// Header labels, in column order.
pub const HEADER: [&str; COLUMN_COUNT] = ["#", "Item", "Price", "Quan.", "Discount", "Total"];

/// Per-column alignment: only the item title is left-aligned.
pub const ALIGNMENTS: [Alignment; COLUMN_COUNT] = [
    Alignment::Right,
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// A transient rendered row: six display strings in column order.
pub type Row = [String; COLUMN_COUNT];

// =============================================================================
// Alignment
// =============================================================================

/// How a cell's value is placed within its column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Value flush left, padding on the right.
    Left,
    /// Value flush right, padding on the left.
    Right,
    /// Padding split evenly; an odd remainder goes on the right.
    Center,
}

// =============================================================================
// Cell Padding
// =============================================================================

/// Renders one cell: the value, padded to `width` per `alignment`, plus the
/// single trailing separator space every cell carries.
///
/// A value longer than `width` is truncated to `width` characters first, so
/// the function upholds the fixed-width invariant even for inputs that the
/// width computation would normally rule out.
///
/// ## Example
/// ```rust
/// use tally_core::receipt::{pad_cell, Alignment};
///
/// assert_eq!(pad_cell("SomeLine", Alignment::Center, 14), "   SomeLine    ");
/// assert_eq!(pad_cell("SomeLine", Alignment::Left, 15), "SomeLine        ");
/// ```
pub fn pad_cell(value: &str, alignment: Alignment, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    let padding = width - truncated.chars().count();

    let left = match alignment {
        Alignment::Left => 0,
        Alignment::Right => padding,
        // Remainder lands on the right
        Alignment::Center => padding / 2,
    };
    let right = padding - left;

    let mut cell = String::with_capacity(width + 1);
    cell.extend(std::iter::repeat(' ').take(left));
    cell.push_str(&truncated);
    cell.extend(std::iter::repeat(' ').take(right + 1));
    cell
}

// =============================================================================
// Table Layout
// =============================================================================

/// Computes each column's width: the maximum character length among the
/// header label, every row's value, and the footer's value in that column.
fn column_widths(rows: &[Row], footer: &Row) -> [usize; COLUMN_COUNT] {
    let mut widths = [0usize; COLUMN_COUNT];

    update_widths(&mut widths, &HEADER.map(str::len));
    for row in rows {
        update_widths(&mut widths, &row.each_ref().map(|cell| cell.chars().count()));
    }
    update_widths(&mut widths, &footer.each_ref().map(|cell| cell.chars().count()));

    widths
}

fn update_widths(widths: &mut [usize; COLUMN_COUNT], lengths: &[usize; COLUMN_COUNT]) {
    for (width, len) in widths.iter_mut().zip(lengths) {
        *width = (*width).max(*len);
    }
}

/// Appends one table line: every cell padded to its column width, then a
/// newline.
fn push_line(out: &mut String, cells: &Row, widths: &[usize; COLUMN_COUNT]) {
    for ((cell, alignment), width) in cells.iter().zip(ALIGNMENTS).zip(widths) {
        out.push_str(&pad_cell(cell, alignment, *width));
    }
    out.push('\n');
}

/// Appends a dash separator spanning `sum(widths) + COLUMN_COUNT - 1`
/// characters, then a newline.
fn push_separator(out: &mut String, widths: &[usize; COLUMN_COUNT]) {
    let total = widths.iter().sum::<usize>() + COLUMN_COUNT - 1;
    out.extend(std::iter::repeat('-').take(total));
    out.push('\n');
}

/// Lays out a full ticket table:
/// header, separator, item rows, separator, footer.
pub fn render_table(rows: &[Row], footer: &Row) -> String {
    let widths = column_widths(rows, footer);
    let header: Row = HEADER.map(str::to_string);

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    push_separator(&mut out, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    push_separator(&mut out, &widths);
    push_line(&mut out, footer, &widths);

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_center_splits_padding_evenly() {
        // Width 14, value length 8: padding 6 split 3/3, plus separator
        assert_eq!(pad_cell("SomeLine", Alignment::Center, 14), "   SomeLine    ");
    }

    #[test]
    fn test_pad_cell_center_puts_remainder_on_the_right() {
        // Width 15, value length 8: padding 7 split 3 left / 4 right
        assert_eq!(pad_cell("SomeLine", Alignment::Center, 15), "   SomeLine     ");
    }

    #[test]
    fn test_pad_cell_truncates_to_width() {
        assert_eq!(pad_cell("SomeLine", Alignment::Center, 5), "SomeL ");
        assert_eq!(pad_cell("SomeLine", Alignment::Left, 5), "SomeL ");
        assert_eq!(pad_cell("SomeLine", Alignment::Right, 5), "SomeL ");
    }

    #[test]
    fn test_pad_cell_left_and_right() {
        assert_eq!(pad_cell("SomeLine", Alignment::Left, 15), "SomeLine        ");
        assert_eq!(pad_cell("SomeLine", Alignment::Right, 15), "       SomeLine ");
    }

    #[test]
    fn test_pad_cell_exact_fit_has_only_the_separator() {
        assert_eq!(pad_cell("SomeLine", Alignment::Center, 8), "SomeLine ");
    }

    #[test]
    fn test_column_widths_consider_header_rows_and_footer() {
        let rows = vec![row(["1", "Apple", "$0.99", "5", "-", "$4.95"])];
        let footer = row(["1", "", "", "", "", "$4.95"]);
        let widths = column_widths(&rows, &footer);

        // col 1: "Apple" (5) beats the "Item" header (4)
        // col 4: the "Discount" header (8) beats "-" (1)
        assert_eq!(widths, [1, 5, 5, 5, 8, 5]);
    }

    #[test]
    fn test_separator_spans_widths_plus_gaps() {
        let mut out = String::new();
        push_separator(&mut out, &[1, 5, 5, 5, 8, 5]);
        assert_eq!(out, format!("{}\n", "-".repeat(29 + 5)));
    }

    #[test]
    fn test_render_table_shape() {
        let rows = vec![row(["1", "Apple", "$0.99", "5", "-", "$4.95"])];
        let footer = row(["1", "", "", "", "", "$4.95"]);
        let table = render_table(&rows, &footer);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5); // header, sep, row, sep, footer
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].chars().all(|c| c == '-'));
        assert_eq!(lines[1], lines[3]);
        // Every rendered line is equally wide (trailing cell space included)
        let width = lines[0].len();
        assert!(lines.iter().skip(2).step_by(2).all(|l| l.len() == width));
        assert!(table.ends_with('\n'));
    }

    fn row(cells: [&str; COLUMN_COUNT]) -> Row {
        cells.map(str::to_string)
    }
}
