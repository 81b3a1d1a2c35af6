//! # catalog-core: Pure Business Logic for the Catalog Dashboard
//!
//! This crate holds everything the dashboard computes, as pure functions
//! over small in-memory collections. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Dashboard Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console presentation (apps/dashboard)           │   │
//! │  │   Stats ──► Filter ──► Table ──► Pagination ──► Cart overlay    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │generator │ │  query   │ │pagination│ │   cart   │ │columns│ │   │
//! │  │  │ Product  │ │ filter + │ │  pages,  │ │  lines,  │ │reorder│ │   │
//! │  │  │ mock data│ │ sort     │ │  window  │ │  totals  │ │toggle │ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ProductStatus)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`generator`] - Mock catalog generation with an injectable RNG
//! - [`query`] - Filter and stable sort pipeline
//! - [`pagination`] - Page slicing and navigation clamping
//! - [`cart`] - Cart ledger
//! - [`columns`] - Table column layout and drag reorder
//! - [`stats`] - Catalog statistics
//! - [`validation`] - Fail-fast guards for programmer errors
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::generator::generate_seeded;
//! use catalog_core::pagination::paginate;
//! use catalog_core::query::{filter_and_sort, QueryState};
//!
//! let products = generate_seeded(1000, 7).unwrap();
//!
//! let mut query = QueryState::default();
//! query.search = "Product 5".to_string();
//!
//! let filtered = filter_and_sort(&products, &query);
//! assert_eq!(filtered.len(), 111);
//!
//! let page = paginate(&filtered, 10, 1).unwrap();
//! assert_eq!(page.total_pages, 12);
//! assert_eq!(page.items.len(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod columns;
pub mod error;
pub mod generator;
pub mod money;
pub mod pagination;
pub mod query;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use columns::{ColumnId, ColumnSpec};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pagination::{Page, PageState};
pub use query::{QueryState, SortConfig, SortDirection, SortKey};
pub use stats::DashboardStats;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products generated at startup.
pub const DEFAULT_PRODUCT_COUNT: usize = 1000;

/// Upper bound accepted by the generator.
///
/// Anything above this is treated as a caller bug, not a bigger catalog.
pub const MAX_PRODUCT_COUNT: usize = 100_000;

/// Rows shown per table page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Quiescent delay before a typed search term is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Largest quantity a single cart line can hold.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Products with stock below this count are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Number of page buttons shown in the pagination bar.
pub const PAGE_WINDOW_SIZE: usize = 5;
