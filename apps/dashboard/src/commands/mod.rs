//! # Commands Module
//!
//! One function per dashboard action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Search, category, sort, columns, stats
//! ├── page.rs     ◄─── Pagination + PageResponse
//! └── cart.rs     ◄─── Cart manipulation + overlay
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn go_to_page(catalog: &mut CatalogState, page: usize) -> PageResponse
//!
//! // Only needs the cart
//! fn remove_from_cart(cart: &mut CartState, product_id: u32) -> CartResponse
//!
//! // Needs both (the row must exist)
//! fn add_to_cart(catalog: &CatalogState, cart: &mut CartState, product_id: u32)
//!     -> Result<CartResponse, ApiError>
//! ```

pub mod cart;
pub mod page;
pub mod product;

pub use cart::CartResponse;
pub use page::{PageResponse, ProductRow};
pub use product::StatsResponse;
