//! # Paginator
//!
//! Slices an ordered view into fixed-size pages.
//!
//! ## Clamping
//! ```text
//! 23 items, 10 per page ──► total_pages = 3
//!
//!   requested   0 ──► page 1   items  1..=10
//!   requested   2 ──► page 2   items 11..=20
//!   requested   3 ──► page 3   items 21..=23   (short last page)
//!   requested   8 ──► page 3   items 21..=23
//!
//! 0 items ──► total_pages = 1, page 1 is empty
//! ```
//!
//! Navigation never fails. `next_page` on the last page and `prev_page` on
//! the first page stay where they are.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_items_per_page;
use crate::PAGE_WINDOW_SIZE;

// =============================================================================
// Free Functions
// =============================================================================

/// Number of pages needed for `total_items`. Never less than 1.
#[inline]
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
#[inline]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Page numbers for the pagination bar.
///
/// Up to [`PAGE_WINDOW_SIZE`] consecutive numbers starting two before the
/// current page, cut off at the last page.
///
/// ## Example
/// ```rust
/// use catalog_core::pagination::page_window;
///
/// assert_eq!(page_window(1, 100), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(50, 100), vec![48, 49, 50, 51, 52]);
/// assert_eq!(page_window(100, 100), vec![98, 99, 100]);
/// assert_eq!(page_window(1, 2), vec![1, 2]);
/// ```
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let start = current_page.saturating_sub(2).max(1);
    (0..PAGE_WINDOW_SIZE.min(total_pages))
        .map(|i| start + i)
        .filter(|&page| page <= total_pages)
        .collect()
}

/// Slices `items` to the requested page, clamping the page number.
///
/// ## Errors
/// `CoreError::InvalidPageSize` when `items_per_page` is 0.
///
/// ## Example
/// ```rust
/// use catalog_core::pagination::paginate;
///
/// let items: Vec<u32> = (1..=23).collect();
/// let page = paginate(&items, 10, 3).unwrap();
///
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items, &[21, 22, 23]);
/// ```
pub fn paginate<T>(items: &[T], items_per_page: usize, requested_page: usize) -> CoreResult<Page<'_, T>> {
    validate_items_per_page(items_per_page)?;

    let total_pages = total_pages(items.len(), items_per_page);
    let current_page = clamp_page(requested_page, total_pages);

    let start = ((current_page - 1) * items_per_page).min(items.len());
    let end = (start + items_per_page).min(items.len());

    Ok(Page {
        items: &items[start..end],
        current_page,
        total_pages,
        total_items: items.len(),
    })
}

// =============================================================================
// Page
// =============================================================================

/// One page of an ordered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The visible slice.
    pub items: &'a [T],

    /// 1-indexed, already clamped.
    pub current_page: usize,

    pub total_pages: usize,

    /// Length of the whole view, not of this page.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Whether a "previous" control should be enabled.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a "next" control should be enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page buttons around the current page.
    pub fn window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages)
    }
}

// =============================================================================
// Page State
// =============================================================================

/// Current page plus page size, owned by the session.
///
/// Every navigation takes the current view length so the result is
/// clamped against the view as it is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl PageState {
    /// Starts on page 1.
    ///
    /// ## Errors
    /// `CoreError::InvalidPageSize` when `items_per_page` is 0.
    pub fn new(items_per_page: usize) -> CoreResult<Self> {
        validate_items_per_page(items_per_page)?;
        Ok(PageState {
            current_page: 1,
            items_per_page,
        })
    }

    #[inline]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[inline]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.items_per_page)
    }

    /// Jumps to `page`, clamped into range. Returns the page landed on.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) -> usize {
        self.current_page = clamp_page(page, self.total_pages(total_items));
        self.current_page
    }

    pub fn next_page(&mut self, total_items: usize) -> usize {
        self.go_to_page(self.current_page.saturating_add(1), total_items)
    }

    pub fn prev_page(&mut self, total_items: usize) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1), total_items)
    }

    /// Re-clamps after the view changed size (e.g. a narrower search).
    pub fn reclamp(&mut self, total_items: usize) -> usize {
        self.go_to_page(self.current_page, total_items)
    }

    /// Slices `items` at the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let total_pages = self.total_pages(items.len());
        let current_page = clamp_page(self.current_page, total_pages);
        let start = ((current_page - 1) * self.items_per_page).min(items.len());
        let end = (start + self.items_per_page).min(items.len());

        Page {
            items: &items[start..end],
            current_page,
            total_pages,
            total_items: items.len(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_23_items_three_pages() {
        let items: Vec<u32> = (1..=23).collect();

        let page = paginate(&items, 10, 3).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_next());
        assert!(page.has_prev());

        let mut state = PageState::new(10).unwrap();
        state.go_to_page(3, items.len());
        assert_eq!(state.next_page(items.len()), 3);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = PageState::new(10).unwrap();
        let total = 23;

        assert_eq!(state.go_to_page(0, total), 1);
        assert_eq!(state.go_to_page(3 + 5, total), 3);
        assert_eq!(state.prev_page(total), 2);
        assert_eq!(state.prev_page(total), 1);
        assert_eq!(state.prev_page(total), 1);
    }

    #[test]
    fn test_empty_view_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 4).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.window(), vec![1]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_reclamp_after_view_shrinks() {
        let mut state = PageState::new(10).unwrap();
        state.go_to_page(100, 1000);
        assert_eq!(state.current_page(), 100);

        assert_eq!(state.reclamp(111), 12);
        let items: Vec<u32> = (0..111).collect();
        let page = state.slice(&items);
        assert_eq!(page.items, &[110]);
    }

    #[test]
    fn test_slice_matches_paginate() {
        let items: Vec<u32> = (1..=47).collect();
        let mut state = PageState::new(10).unwrap();
        state.go_to_page(4, items.len());
        assert_eq!(state.slice(&items), paginate(&items, 10, 4).unwrap());
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 12), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(12, 12), vec![10, 11, 12]);
    }

    #[test]
    fn test_zero_page_size_fails_fast() {
        let items = [1, 2, 3];
        assert!(matches!(
            paginate(&items, 0, 1),
            Err(CoreError::InvalidPageSize)
        ));
        assert!(PageState::new(0).is_err());
    }
}
