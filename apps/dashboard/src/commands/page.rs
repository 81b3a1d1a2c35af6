//! # Page Commands
//!
//! Pagination controls and the page response every catalog command
//! returns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::{Category, ColumnSpec, Product, ProductStatus, QueryState};

use crate::state::CatalogState;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price_cents: i64,
    pub stock: u32,
    pub status: ProductStatus,
    pub image: String,
    /// Stock below the low-stock threshold; rendered with a marker.
    pub low_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        ProductRow {
            id: p.id,
            name: p.name.clone(),
            category: p.category,
            price_cents: p.price_cents,
            stock: p.stock,
            status: p.status,
            image: p.image.clone(),
            low_stock: p.is_low_stock(),
        }
    }
}

/// The visible page plus everything needed to draw the table around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub rows: Vec<ProductRow>,
    pub columns: Vec<ColumnSpec>,
    pub query: QueryState,
    pub current_page: usize,
    pub total_pages: usize,
    /// Length of the filtered view.
    pub total_items: usize,
    pub items_per_page: usize,
    pub page_window: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<&CatalogState> for PageResponse {
    fn from(catalog: &CatalogState) -> Self {
        let page = catalog.current_page();
        PageResponse {
            rows: catalog.page_products().into_iter().map(ProductRow::from).collect(),
            columns: catalog.columns().to_vec(),
            query: catalog.query().clone(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items_per_page: catalog.page_state().items_per_page(),
            page_window: page.window(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
        }
    }
}

pub fn get_page(catalog: &CatalogState) -> PageResponse {
    debug!("get_page command");
    PageResponse::from(catalog)
}

/// Jump to `page`, clamped into range.
pub fn go_to_page(catalog: &mut CatalogState, page: usize) -> PageResponse {
    let landed = catalog.go_to_page(page);
    debug!(requested = page, landed, "go_to_page command");
    PageResponse::from(&*catalog)
}

pub fn next_page(catalog: &mut CatalogState) -> PageResponse {
    let landed = catalog.next_page();
    debug!(landed, "next_page command");
    PageResponse::from(&*catalog)
}

pub fn prev_page(catalog: &mut CatalogState) -> PageResponse {
    let landed = catalog.prev_page();
    debug!(landed, "prev_page command");
    PageResponse::from(&*catalog)
}
