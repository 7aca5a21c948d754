//! The in-session cart and its mutation rules.
//!
//! A [`Cart`] is the customer's not-yet-submitted selection of menu items.
//! It is a pure value type: persistence lives in the client crate, which
//! snapshots the lines after every mutation.
//!
//! # Invariants
//!
//! For every line in a cart, at every observation point:
//! - `menu_item_id` is unique within the cart
//! - `quantity >= 1` (a line that would drop to zero is removed instead)
//! - `subtotal == unit_price * quantity` (recomputed, never settable)
//!
//! Out-of-range operations (removing a missing line, decrementing past one)
//! are defined no-ops, not errors.

use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Money};

/// One entry in the active cart.
///
/// Wire field names match the remote API: the unit price travels as
/// `item_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub item_name: String,
    #[serde(rename = "item_price")]
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl CartLine {
    fn new(input: LineInput) -> Self {
        let subtotal = input.unit_price.times(input.quantity);
        Self {
            menu_item_id: input.menu_item_id,
            item_name: input.item_name,
            unit_price: input.unit_price,
            quantity: input.quantity,
            subtotal,
        }
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = self.unit_price.times(self.quantity);
    }
}

/// Input for adding an item to the cart.
///
/// The name and unit price are captured at add-time and not re-fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct LineInput {
    pub menu_item_id: MenuItemId,
    pub item_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// Ordered collection of [`CartLine`] (insertion order, stable for display).
///
/// Serializes transparently as a JSON array of lines, which is also the
/// durable snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Restore a cart from previously persisted lines.
    ///
    /// Returns `None` if the snapshot violates the cart invariants (a zero
    /// quantity or a duplicate `menu_item_id`); callers treat that the same
    /// as an absent snapshot. Subtotals are recomputed rather than trusted,
    /// so the subtotal invariant holds even for snapshots written by older
    /// code.
    #[must_use]
    pub fn restore(mut lines: Vec<CartLine>) -> Option<Self> {
        let mut seen = std::collections::HashSet::new();
        for line in &mut lines {
            if line.quantity == 0 || !seen.insert(line.menu_item_id) {
                return None;
            }
            line.recompute_subtotal();
        }
        Some(Self { lines })
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart.
    ///
    /// If a line for the same `menu_item_id` already exists, its quantity is
    /// incremented by `input.quantity`; otherwise a new line is appended.
    /// Adding with a zero quantity is a no-op: `add` never removes a line
    /// (use [`Cart::decrease`] or [`Cart::remove_one`] for that).
    pub fn add(&mut self, input: LineInput) {
        if input.quantity == 0 {
            return;
        }

        match self.line_mut(input.menu_item_id) {
            Some(line) => {
                line.quantity += input.quantity;
                line.recompute_subtotal();
            }
            None => self.lines.push(CartLine::new(input)),
        }
    }

    /// Decrement a line's quantity by one, removing the line when it would
    /// drop below one. A missing line is a no-op.
    pub fn remove_one(&mut self, menu_item_id: MenuItemId) {
        self.decrease(menu_item_id);
    }

    /// Increment a line's quantity by one. A missing line is a no-op.
    pub fn increase(&mut self, menu_item_id: MenuItemId) {
        if let Some(line) = self.line_mut(menu_item_id) {
            line.quantity += 1;
            line.recompute_subtotal();
        }
    }

    /// Decrement a line's quantity by one, removing the line when it would
    /// drop below one. A missing line is a no-op.
    pub fn decrease(&mut self, menu_item_id: MenuItemId) {
        let Some(line) = self.line_mut(menu_item_id) else {
            return;
        };

        if line.quantity <= 1 {
            self.lines.retain(|l| l.menu_item_id != menu_item_id);
        } else {
            line.quantity -= 1;
            line.recompute_subtotal();
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal).sum()
    }

    fn line_mut(&mut self, menu_item_id: MenuItemId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
    }
}
