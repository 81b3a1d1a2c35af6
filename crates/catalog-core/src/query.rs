//! # Query Pipeline
//!
//! Turns the full catalog plus the user's query into the ordered view the
//! table pages through.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Query Pipeline                                       │
//! │                                                                         │
//! │  products (catalog order)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FILTER   search ""  OR name ∋ search  OR category ∋ search            │
//! │           (case-insensitive substring)                                  │
//! │           AND (no category selected OR category == selected)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SORT     no key      → keep filter order                              │
//! │           key + asc   → stable sort by field                           │
//! │           key + desc  → stable sort by reversed comparison             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filtered view ──► paginator                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stability
//! Products with equal sort keys keep their filter order in BOTH
//! directions. Descending reverses the comparison, not the output, so ties
//! are never flipped.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::{Category, Product};

// =============================================================================
// Sort Key & Direction
// =============================================================================

/// A product field the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortKey {
    Id,
    Name,
    Category,
    Price,
    Stock,
    Status,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Price => "price",
            SortKey::Stock => "stock",
            SortKey::Status => "status",
        }
    }

    /// Three-way comparison of two products on this field.
    ///
    /// Numeric fields compare numerically; text fields (including category
    /// and status) compare their display strings lexicographically, so
    /// `"Product 10"` sorts before `"Product 2"`.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
            SortKey::Price => a.price_cents.cmp(&b.price_cents),
            SortKey::Stock => a.stock.cmp(&b.stock),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field names are matched exactly. `image`, `description` and `actions`
/// are deliberately absent: passing them is a bug in the caller.
impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            "stock" => Ok(SortKey::Stock),
            "status" => Ok(SortKey::Status),
            other => Err(CoreError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

// =============================================================================
// Sort Config
// =============================================================================

/// The current table sort: an optional key plus a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortConfig {
            key: Some(key),
            direction,
        }
    }

    /// Header click on a sortable column.
    ///
    /// ## Toggle Rule
    /// ```text
    /// current sort        click        result
    /// ────────────        ─────        ──────
    /// none                price   ──►  price asc
    /// name asc            price   ──►  price asc    (new column)
    /// price asc           price   ──►  price desc   (same column: flip)
    /// price desc          price   ──►  price asc    (same column: flip)
    /// ```
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }

    /// Drops the sort key, returning to filter order.
    pub fn clear(&mut self) {
        *self = SortConfig::default();
    }
}

// =============================================================================
// Query State
// =============================================================================

/// Everything that shapes the filtered view.
///
/// `search` is the *settled* search term, i.e. after debouncing. The raw
/// text in the search box lives with the session, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QueryState {
    pub search: String,
    pub category: Option<Category>,
    pub sort: SortConfig,
}

impl QueryState {
    /// The filter predicate.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::generator::generate_seeded;
    /// use catalog_core::query::QueryState;
    ///
    /// let products = generate_seeded(20, 1).unwrap();
    /// let query = QueryState { search: "product 1".into(), ..Default::default() };
    ///
    /// assert!(query.matches(&products[0]));   // "Product 1"
    /// assert!(query.matches(&products[11]));  // "Product 12"
    /// assert!(!query.matches(&products[1]));  // "Product 2"
    /// ```
    pub fn matches(&self, product: &Product) -> bool {
        Matcher::new(self).matches(product)
    }
}

/// Predicate with the search needle lowercased once up front.
struct Matcher {
    needle: String,
    category: Option<Category>,
}

impl Matcher {
    fn new(query: &QueryState) -> Self {
        Matcher {
            needle: query.search.to_lowercase(),
            category: query.category,
        }
    }

    fn matches(&self, product: &Product) -> bool {
        let matches_search = self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.category.as_str().to_lowercase().contains(&self.needle);

        let matches_category = self.category.map_or(true, |c| product.category == c);

        matches_search && matches_category
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Positions (into `products`) of the filtered view, in display order.
///
/// This is the primitive the session caches; [`filter_and_sort`] maps it
/// back to product references.
pub fn view_indices(products: &[Product], query: &QueryState) -> Vec<usize> {
    let matcher = Matcher::new(query);

    let mut indices: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| matcher.matches(p))
        .map(|(i, _)| i)
        .collect();

    if let Some(key) = query.sort.key {
        let direction = query.sort.direction;
        // sort_by is stable; ties keep filter order
        indices.sort_by(|&a, &b| direction.apply(key.compare(&products[a], &products[b])));
    }

    indices
}

/// Filters and sorts the catalog.
///
/// ## Example
/// ```rust
/// use catalog_core::generator::generate_seeded;
/// use catalog_core::query::{filter_and_sort, QueryState, SortConfig, SortDirection, SortKey};
///
/// let products = generate_seeded(100, 5).unwrap();
/// let query = QueryState {
///     sort: SortConfig::new(SortKey::Price, SortDirection::Desc),
///     ..Default::default()
/// };
///
/// let view = filter_and_sort(&products, &query);
/// assert_eq!(view.len(), 100);
/// assert!(view.windows(2).all(|w| w[0].price_cents >= w[1].price_cents));
/// ```
pub fn filter_and_sort<'a>(products: &'a [Product], query: &QueryState) -> Vec<&'a Product> {
    view_indices(products, query)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_seeded;
    use crate::types::ProductStatus;

    fn product(id: u32, category: Category, price: i64, stock: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category,
            price_cents: price * 100,
            stock,
            status: ProductStatus::Active,
            image: String::new(),
            description: String::new(),
        }
    }

    fn ids(view: &[&Product]) -> Vec<u32> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_catalog_order() {
        let products = generate_seeded(30, 2).unwrap();
        let view = filter_and_sort(&products, &QueryState::default());
        assert_eq!(ids(&view), (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_product_5_in_1000_matches_111() {
        let products = generate_seeded(1000, 11).unwrap();
        let query = QueryState {
            search: "Product 5".to_string(),
            ..Default::default()
        };

        let view = filter_and_sort(&products, &query);
        assert_eq!(view.len(), 111);
        assert_eq!(view[0].id, 5);
        assert_eq!(view[1].id, 50);
        assert_eq!(view[110].id, 599);
    }

    #[test]
    fn test_search_matches_category_case_insensitively() {
        let products = vec![
            product(1, Category::HomeAndGarden, 10, 1),
            product(2, Category::Books, 10, 1),
            product(3, Category::HomeAndGarden, 10, 1),
        ];
        let query = QueryState {
            search: "gARDen".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![1, 3]);
    }

    #[test]
    fn test_category_filter_is_and_with_search() {
        let products = vec![
            product(1, Category::Books, 10, 1),
            product(2, Category::Food, 10, 1),
            product(11, Category::Books, 10, 1),
            product(12, Category::Food, 10, 1),
        ];
        let query = QueryState {
            search: "1".to_string(),
            category: Some(Category::Books),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![1, 11]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let products = vec![
            product(1, Category::Books, 30, 1),
            product(2, Category::Books, 10, 1),
            product(3, Category::Books, 30, 1),
            product(4, Category::Books, 20, 1),
            product(5, Category::Books, 10, 1),
        ];

        let asc = QueryState {
            sort: SortConfig::new(SortKey::Price, SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &asc)), vec![2, 5, 4, 1, 3]);

        let desc = QueryState {
            sort: SortConfig::new(SortKey::Price, SortDirection::Desc),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &desc)), vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_name_sort_is_lexicographic() {
        let products = vec![
            product(2, Category::Books, 10, 1),
            product(10, Category::Books, 10, 1),
            product(1, Category::Books, 10, 1),
        ];
        let query = QueryState {
            sort: SortConfig::new(SortKey::Name, SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![1, 10, 2]);
    }

    #[test]
    fn test_status_sorts_by_display_name() {
        let mut a = product(1, Category::Books, 10, 1);
        a.status = ProductStatus::OutOfStock;
        let mut b = product(2, Category::Books, 10, 1);
        b.status = ProductStatus::Inactive;
        let c = product(3, Category::Books, 10, 1);

        let products = vec![a, b, c];
        let query = QueryState {
            sort: SortConfig::new(SortKey::Status, SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![3, 2, 1]);
    }

    #[test]
    fn test_toggle_rule() {
        let mut sort = SortConfig::default();

        sort.toggle(SortKey::Price);
        assert_eq!(sort, SortConfig::new(SortKey::Price, SortDirection::Asc));

        sort.toggle(SortKey::Price);
        assert_eq!(sort, SortConfig::new(SortKey::Price, SortDirection::Desc));

        sort.toggle(SortKey::Price);
        assert_eq!(sort, SortConfig::new(SortKey::Price, SortDirection::Asc));

        sort.toggle(SortKey::Price);
        sort.toggle(SortKey::Name);
        assert_eq!(sort, SortConfig::new(SortKey::Name, SortDirection::Asc));

        sort.clear();
        assert_eq!(sort.key, None);
    }

    #[test]
    fn test_sort_key_parse_fails_fast_on_unknown_field() {
        assert_eq!("stock".parse::<SortKey>().unwrap(), SortKey::Stock);
        for bad in ["image", "actions", "description", "Price", ""] {
            assert!(matches!(
                bad.parse::<SortKey>(),
                Err(CoreError::UnknownSortKey(_))
            ));
        }
    }
}
