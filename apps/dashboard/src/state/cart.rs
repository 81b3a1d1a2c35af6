//! # Cart State
//!
//! The session's cart, whether the cart overlay is open, and when the cart
//! last changed.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Access                                    │
//! │                                                                         │
//! │  Read (get_cart, render):                                               │
//! │  ────────────────────────                                               │
//! │  cart_state.with_cart(|cart| CartResponse::from(cart))                  │
//! │                                                                         │
//! │  Write (add, update, remove, clear):                                    │
//! │  ───────────────────────────────────                                    │
//! │  cart_state.with_cart_mut(|cart| cart.add(&product))                    │
//! │      └── updated_at is stamped only if the cart actually changed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The event loop owns the state, so there is no lock.

use chrono::{DateTime, Utc};

use catalog_core::Cart;

#[derive(Debug, Default)]
pub struct CartState {
    cart: Cart,
    is_open: bool,
    updated_at: Option<DateTime<Utc>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let before = self.cart.clone();
        let result = f(&mut self.cart);
        if self.cart != before {
            self.updated_at = Some(Utc::now());
        }
        result
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// `None` until the first change.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
