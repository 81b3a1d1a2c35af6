//! # Cart Ledger
//!
//! Quantities of selected products and the totals derived from them.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Action                    Operation               Change               │
//! │  ──────                    ─────────               ──────               │
//! │                                                                         │
//! │  "Add to Cart" on row ───► add(product) ───────► qty += 1 or push line  │
//! │                                                                         │
//! │  [+] / [-] on line ──────► increment / decrement ► qty ± 1              │
//! │                                                                         │
//! │  Type a quantity ────────► update_quantity(n) ───► qty = n (n ≤ 0: del) │
//! │                                                                         │
//! │  Trash icon ─────────────► remove(id) ───────────► line deleted         │
//! │                                                                         │
//! │  NOTE: No operation fails. Unknown ids are no-ops, non-positive         │
//! │        quantities remove the line, larger ones clamp to 999.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// One product's entry in the cart.
///
/// ## Snapshot
/// Name, price and image are copied from the product when the line is
/// created. The line never looks the product up again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: u32,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Thumbnail at time of adding (frozen)
    pub image: String,

    /// Between 1 and [`MAX_ITEM_QUANTITY`].
    pub quantity: i64,
}

impl CartLine {
    /// New line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding again increases quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - Lines stay in the order they were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1 (up to the cap), position unchanged
    /// - Not in cart: appended with quantity 1
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity = (line.quantity + 1).min(MAX_ITEM_QUANTITY),
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Sets a line's quantity.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - `quantity > MAX_ITEM_QUANTITY`: set to [`MAX_ITEM_QUANTITY`]
    /// - Product not in cart: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = quantity.min(MAX_ITEM_QUANTITY);

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// The [+] control. A line at the cap stays there.
    pub fn increment(&mut self, product_id: u32) -> bool {
        match self.line(product_id) {
            Some(line) => {
                let quantity = line.quantity.saturating_add(1);
                self.update_quantity(product_id, quantity)
            }
            None => false,
        }
    }

    /// The [-] control. Decrementing a quantity of 1 removes the line.
    pub fn decrement(&mut self, product_id: u32) -> bool {
        match self.line(product_id) {
            Some(line) => {
                let quantity = line.quantity - 1;
                self.update_quantity(product_id, quantity)
            }
            None => false,
        }
    }

    /// Removes a line by product id. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total units across all lines (the cart badge).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantity × unit price.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
