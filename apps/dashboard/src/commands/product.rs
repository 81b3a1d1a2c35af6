//! # Product Commands
//!
//! Search, category filter, header sort, column moves and catalog stats.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "Product 5"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_input() ──► SearchDebouncer::keystroke (timer restarts)         │
//! │       │                                                                 │
//! │       ▼  300 ms without input                                           │
//! │  settled term on the watch channel                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_search() ──► CatalogState::set_search ──► view recomputed        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageResponse (current page, re-clamped)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::{Category, ColumnId, CoreError, DashboardStats, Money};

use crate::commands::page::PageResponse;
use crate::error::ApiError;
use crate::state::{CatalogState, SearchDebouncer};

/// Stat cards plus the category selector's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub stats: DashboardStats,
    pub categories: Vec<Category>,
}

impl StatsResponse {
    pub fn total_value(&self) -> Money {
        self.stats.total_value
    }
}

/// Feeds raw search text to the debouncer. The view changes only once the
/// term settles (see [`apply_search`]).
pub fn search_input(search: &mut SearchDebouncer, text: &str) {
    debug!(text = %text, "search_input command");
    search.keystroke(text);
}

/// Applies a settled search term.
pub fn apply_search(catalog: &mut CatalogState, term: &str) -> PageResponse {
    debug!(term = %term, "apply_search command");
    catalog.set_search(term);
    PageResponse::from(&*catalog)
}

/// `None` clears the category filter.
pub fn set_category(catalog: &mut CatalogState, category: Option<Category>) -> PageResponse {
    debug!(category = ?category, "set_category command");
    catalog.set_category(category);
    PageResponse::from(&*catalog)
}

/// Header click.
///
/// ## Errors
/// `VALIDATION_ERROR` for columns without a sortable field (image,
/// actions).
pub fn toggle_sort(catalog: &mut CatalogState, column: ColumnId) -> Result<PageResponse, ApiError> {
    debug!(column = %column, "toggle_sort command");

    let sortable = catalog
        .columns()
        .iter()
        .any(|c| c.id == column && c.sort_key().is_some());
    if !sortable {
        return Err(CoreError::UnknownSortKey(column.to_string()).into());
    }

    catalog.click_column(column);
    Ok(PageResponse::from(&*catalog))
}

/// Drag-and-drop: moves `dragged` to `target`'s position. Same or missing
/// ids leave the layout as it was.
pub fn move_column(catalog: &mut CatalogState, dragged: ColumnId, target: ColumnId) -> PageResponse {
    debug!(dragged = %dragged, target = %target, "move_column command");
    catalog.move_column(dragged, target);
    PageResponse::from(&*catalog)
}

pub fn get_stats(catalog: &CatalogState) -> StatsResponse {
    debug!("get_stats command");
    StatsResponse {
        stats: DashboardStats::from_products(catalog.products()),
        categories: catalog.categories().to_vec(),
    }
}
