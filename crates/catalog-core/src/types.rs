//! # Domain Types
//!
//! Core domain types shared by the pipeline, the cart and the dashboard.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │ ProductStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (1..N)      │   │  Electronics    │   │  Active         │       │
//! │  │  name           │   │  Clothing       │   │  Inactive       │       │
//! │  │  category       │   │  Books  ...     │   │  Out of Stock   │       │
//! │  │  price_cents    │   │  (8 fixed)      │   └─────────────────┘       │
//! │  │  stock, status  │   └─────────────────┘                             │
//! │  │  image, desc.   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are created once by the generator and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Category
// =============================================================================

/// Product category, one of a fixed set of eight.
///
/// Serialized and displayed by its human name (`"Home & Garden"`), which is
/// also the text the search box matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Beauty,
    Automotive,
    Food,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Beauty,
        Category::Automotive,
        Category::Food,
    ];

    /// Display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Automotive => "Automotive",
            Category::Food => "Food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact display name. The category selector only ever offers
/// these names, so anything else is a caller bug.
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Product Status
// =============================================================================

/// Listing status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductStatus {
    Active,
    Inactive,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Inactive,
        ProductStatus::OutOfStock,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// ## Lifecycle
/// Created in bulk at startup, read-only for the rest of the session. The
/// cart copies the fields it displays instead of holding a reference, so a
/// cart line stays valid on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, 1..=N in generation order.
    pub id: u32,

    /// Display name, `Product {id}` for generated data.
    pub name: String,

    pub category: Category,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units on hand.
    pub stock: u32,

    pub status: ProductStatus,

    /// Thumbnail URI.
    pub image: String,

    pub description: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Stock below the low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
