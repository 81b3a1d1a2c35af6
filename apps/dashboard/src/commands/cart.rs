//! # Cart Commands
//!
//! Cart manipulation and the cart overlay.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐   open_cart   ┌──────────┐   │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────►│ Overlay  │   │
//! │  │  Cart    │                │          │◄──────────────│  Shown   │   │
//! │  └──────────┘                └──────────┘   close_cart  └──────────┘   │
//! │       ▲                           │                                     │
//! │       │                      update_cart_item                           │
//! │       │                      remove_from_cart                           │
//! │       │                           │                                     │
//! │       └───────── clear_cart ──────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::{CartLine, Money};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,

    /// Total units (the cart badge)
    pub item_count: i64,

    pub total: Money,

    pub is_open: bool,

    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        state.with_cart(|cart| CartResponse {
            lines: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total: cart.total_price(),
            is_open: state.is_open(),
            updated_at: state.updated_at(),
        })
    }
}

pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds one unit of a product from the table.
///
/// ## Errors
/// `NOT_FOUND` when no product has `product_id`.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut CartState,
    product_id: u32,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = catalog
        .product(product_id)
        .ok_or_else(|| ApiError::not_found("Product", &product_id.to_string()))?;

    cart.with_cart_mut(|c| c.add(product));
    Ok(CartResponse::from(&*cart))
}

/// Sets a line's quantity. `quantity <= 0` removes the line; an id not in
/// the cart is ignored.
pub fn update_cart_item(cart: &mut CartState, product_id: u32, quantity: i64) -> CartResponse {
    debug!(product_id, quantity, "update_cart_item command");
    cart.with_cart_mut(|c| c.update_quantity(product_id, quantity));
    CartResponse::from(&*cart)
}

/// The [+] control.
pub fn increment_cart_item(cart: &mut CartState, product_id: u32) -> CartResponse {
    debug!(product_id, "increment_cart_item command");
    cart.with_cart_mut(|c| c.increment(product_id));
    CartResponse::from(&*cart)
}

/// The [-] control. Removes the line when its quantity reaches 0.
pub fn decrement_cart_item(cart: &mut CartState, product_id: u32) -> CartResponse {
    debug!(product_id, "decrement_cart_item command");
    cart.with_cart_mut(|c| c.decrement(product_id));
    CartResponse::from(&*cart)
}

pub fn remove_from_cart(cart: &mut CartState, product_id: u32) -> CartResponse {
    debug!(product_id, "remove_from_cart command");
    cart.with_cart_mut(|c| c.remove(product_id));
    CartResponse::from(&*cart)
}

pub fn clear_cart(cart: &mut CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| c.clear());
    CartResponse::from(&*cart)
}

pub fn open_cart(cart: &mut CartState) -> CartResponse {
    debug!("open_cart command");
    cart.open();
    CartResponse::from(&*cart)
}

pub fn close_cart(cart: &mut CartState) -> CartResponse {
    debug!("close_cart command");
    cart.close();
    CartResponse::from(&*cart)
}
