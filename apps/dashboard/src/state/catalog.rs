//! # Catalog State
//!
//! Products, the active query, the page cursor, the column layout and the
//! cached filtered view.
//!
//! ## Recompute
//! ```text
//! set_search / set_category / toggle_sort
//!         │
//!         ▼
//!  recompute() ──► view_indices(products, query) ──► view: Vec<usize>
//!         │
//!         ▼
//!  page.reclamp(view.len())
//! ```
//!
//! Paging and column moves never touch the view.

use std::time::Instant;
use tracing::info;

use catalog_core::columns::{click_header, default_columns, reorder_in_place};
use catalog_core::pagination::Page;
use catalog_core::query::view_indices;
use catalog_core::stats::distinct_categories;
use catalog_core::{
    Category, ColumnId, ColumnSpec, CoreResult, PageState, Product, QueryState,
};

#[derive(Debug)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<Category>,
    query: QueryState,
    page: PageState,
    columns: Vec<ColumnSpec>,

    /// Indices into `products`, filtered and sorted.
    view: Vec<usize>,
}

impl CatalogState {
    /// Builds the state on page 1 with no search, all categories and the
    /// default column order.
    ///
    /// ## Errors
    /// `CoreError::InvalidPageSize` when `items_per_page` is 0.
    pub fn new(products: Vec<Product>, items_per_page: usize) -> CoreResult<Self> {
        let page = PageState::new(items_per_page)?;
        let categories = distinct_categories(&products);
        let mut state = CatalogState {
            products,
            categories,
            query: QueryState::default(),
            page,
            columns: default_columns(),
            view: Vec::new(),
        };
        state.recompute();
        Ok(state)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    pub fn product(&self, id: u32) -> Option<&Product> {
        // Generated ids are 1..=n in order; fall back to a scan otherwise.
        let guess = (id as usize).checked_sub(1).and_then(|i| self.products.get(i));
        match guess {
            Some(p) if p.id == id => Some(p),
            _ => self.products.iter().find(|p| p.id == id),
        }
    }

    /// Categories offered by the selector.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Applies a settled search term. Returns whether the query changed.
    pub fn set_search(&mut self, term: &str) -> bool {
        if self.query.search == term {
            return false;
        }
        self.query.search = term.to_string();
        self.recompute();
        true
    }

    /// `None` shows every category.
    pub fn set_category(&mut self, category: Option<Category>) -> bool {
        if self.query.category == category {
            return false;
        }
        self.query.category = category;
        self.recompute();
        true
    }

    /// Header click on `column`. Returns whether the sort changed.
    ///
    /// Columns that aren't in the layout or aren't sortable leave the sort
    /// alone.
    pub fn click_column(&mut self, column: ColumnId) -> bool {
        let Some(header) = self.columns.iter().find(|c| c.id == column) else {
            return false;
        };
        if !click_header(&mut self.query.sort, header) {
            return false;
        }
        self.recompute();
        true
    }

    pub fn move_column(&mut self, dragged: ColumnId, target: ColumnId) -> bool {
        reorder_in_place(&mut self.columns, dragged, target)
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page.go_to_page(page, self.view.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.page.next_page(self.view.len())
    }

    pub fn prev_page(&mut self) -> usize {
        self.page.prev_page(self.view.len())
    }

    /// The visible page of view indices.
    pub fn current_page(&self) -> Page<'_, usize> {
        self.page.slice(&self.view)
    }

    /// Products on the visible page, in view order.
    pub fn page_products(&self) -> Vec<&Product> {
        self.current_page()
            .items
            .iter()
            .map(|&i| &self.products[i])
            .collect()
    }

    fn recompute(&mut self) {
        let started = Instant::now();
        self.view = view_indices(&self.products, &self.query);
        let page = self.page.reclamp(self.view.len());

        info!(
            search = %self.query.search,
            category = ?self.query.category,
            sort = ?self.query.sort.key,
            direction = ?self.query.sort.direction,
            matches = self.view.len(),
            page,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Catalog view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::generator::generate_seeded;
    use catalog_core::{SortDirection, SortKey};

    fn catalog(count: usize) -> CatalogState {
        CatalogState::new(generate_seeded(count, 7).unwrap(), 10).unwrap()
    }

    #[test]
    fn test_initial_view_is_whole_catalog() {
        let state = catalog(1000);
        assert_eq!(state.view_len(), 1000);
        assert_eq!(state.current_page().total_pages, 100);
        let ids: Vec<u32> = state.page_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_reclamps_current_page() {
        let mut state = catalog(1000);
        assert_eq!(state.go_to_page(100), 100);

        assert!(state.set_search("Product 5"));
        assert_eq!(state.view_len(), 111);
        assert_eq!(state.page_state().current_page(), 12);
        assert_eq!(state.page_products().len(), 1);

        assert!(!state.set_search("Product 5"));
    }

    #[test]
    fn test_category_filter() {
        let mut state = catalog(500);
        assert!(state.set_category(Some(Category::Books)));
        assert!(state.page_products().iter().all(|p| p.category == Category::Books));
        assert!(!state.set_category(Some(Category::Books)));
        assert!(state.set_category(None));
        assert_eq!(state.view_len(), 500);
    }

    #[test]
    fn test_click_column_toggles_sort() {
        let mut state = catalog(200);

        assert!(state.click_column(ColumnId::Price));
        assert_eq!(state.query().sort.key, Some(SortKey::Price));
        let prices: Vec<i64> = state.page_products().iter().map(|p| p.price_cents).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));

        assert!(state.click_column(ColumnId::Price));
        assert_eq!(state.query().sort.direction, SortDirection::Desc);

        assert!(!state.click_column(ColumnId::Image));
        assert_eq!(state.query().sort.key, Some(SortKey::Price));
    }

    #[test]
    fn test_move_column_keeps_view() {
        let mut state = catalog(30);
        let before: Vec<u32> = state.page_products().iter().map(|p| p.id).collect();

        assert!(state.move_column(ColumnId::Id, ColumnId::Category));
        assert_eq!(state.columns()[3].id, ColumnId::Id);

        let after: Vec<u32> = state.page_products().iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_product_lookup() {
        let state = catalog(50);
        assert_eq!(state.product(1).map(|p| p.id), Some(1));
        assert_eq!(state.product(50).map(|p| p.id), Some(50));
        assert!(state.product(0).is_none());
        assert!(state.product(51).is_none());
    }

    #[test]
    fn test_empty_view_is_single_empty_page() {
        let mut state = catalog(100);
        state.set_search("no such product");
        let page = state.current_page();
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(state.next_page(), 1);
    }
}
