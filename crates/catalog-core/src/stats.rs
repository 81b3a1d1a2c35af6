//! Catalog statistics for the stat cards above the table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Category, Product};

/// Figures shown in the four stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    pub total_products: usize,

    /// Sum of every product's unit price (labelled "Total Revenue" on the
    /// card; it is catalog value, not sales).
    pub total_value: Money,

    pub low_stock_items: usize,

    pub categories_count: usize,
}

impl DashboardStats {
    pub fn from_products(products: &[Product]) -> Self {
        DashboardStats {
            total_products: products.len(),
            total_value: products.iter().map(Product::price).sum(),
            low_stock_items: products.iter().filter(|p| p.is_low_stock()).count(),
            categories_count: distinct_categories(products).len(),
        }
    }
}

/// Categories present in the catalog, in order of first appearance.
///
/// Feeds the category selector, so a category with no products is never
/// offered.
pub fn distinct_categories(products: &[Product]) -> Vec<Category> {
    let mut seen = Vec::with_capacity(Category::ALL.len());
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category);
            if seen.len() == Category::ALL.len() {
                break;
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductStatus;

    fn product(id: u32, category: Category, price: i64, stock: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category,
            price_cents: price * 100,
            stock,
            status: ProductStatus::Inactive,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_stats_on_fixed_catalog() {
        let products = vec![
            product(1, Category::Food, 10, 0),
            product(2, Category::Books, 200, 19),
            product(3, Category::Food, 509, 20),
            product(4, Category::Beauty, 31, 99),
        ];

        let stats = DashboardStats::from_products(&products);
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.total_value, Money::from_major(750));
        assert_eq!(stats.low_stock_items, 2);
        assert_eq!(stats.categories_count, 3);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let products = vec![
            product(1, Category::Sports, 10, 5),
            product(2, Category::Books, 10, 5),
            product(3, Category::Sports, 10, 5),
            product(4, Category::Automotive, 10, 5),
        ];
        assert_eq!(
            distinct_categories(&products),
            vec![Category::Sports, Category::Books, Category::Automotive]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let stats = DashboardStats::from_products(&[]);
        assert_eq!(stats.total_products, 0);
        assert!(stats.total_value.is_zero());
        assert_eq!(stats.categories_count, 0);
    }
}
