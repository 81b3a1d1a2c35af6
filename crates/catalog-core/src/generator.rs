//! # Mock Catalog Generator
//!
//! Produces the synthetic product collection the dashboard runs on.
//!
//! ## Generated Products
//! For each index `i` in `1..=count`:
//! - id: `i`
//! - name: `Product {i}`
//! - category: uniform over the 8 categories
//! - price: uniform whole units in `[10, 509]`
//! - stock: uniform in `[0, 99]`
//! - status: uniform over Active / Inactive / Out of Stock
//! - image: `https://picsum.photos/60/60?random={i}`
//! - description: `Description for Product {i}`
//!
//! The random source is a parameter. Pass a seeded [`StdRng`] for
//! reproducible fixtures, or use [`generate`] for a fresh catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CoreResult;
use crate::types::{Category, Product, ProductStatus};
use crate::validation::validate_product_count;

/// Lowest generated price, in whole units.
pub const MIN_PRICE: i64 = 10;

/// Highest generated price, in whole units.
pub const MAX_PRICE: i64 = 509;

/// Generated stock is in `0..STOCK_CEILING`.
pub const STOCK_CEILING: u32 = 100;

/// Generates `count` products using the thread-local RNG.
///
/// ## Errors
/// `CoreError::InvalidProductCount` when `count` is 0 or above
/// [`MAX_PRODUCT_COUNT`](crate::MAX_PRODUCT_COUNT).
pub fn generate(count: usize) -> CoreResult<Vec<Product>> {
    generate_with(count, &mut rand::thread_rng())
}

/// Generates `count` products from a fixed seed. Same seed, same catalog.
pub fn generate_seeded(count: usize, seed: u64) -> CoreResult<Vec<Product>> {
    generate_with(count, &mut StdRng::seed_from_u64(seed))
}

/// Generates `count` products drawing from the given random source.
pub fn generate_with<R: Rng>(count: usize, rng: &mut R) -> CoreResult<Vec<Product>> {
    validate_product_count(count)?;

    let products = (1..=count as u32)
        .map(|id| generate_product(id, rng))
        .collect();

    Ok(products)
}

fn generate_product<R: Rng>(id: u32, rng: &mut R) -> Product {
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let price = rng.gen_range(MIN_PRICE..=MAX_PRICE);
    let stock = rng.gen_range(0..STOCK_CEILING);
    let status = ProductStatus::ALL[rng.gen_range(0..ProductStatus::ALL.len())];

    Product {
        id,
        name: format!("Product {}", id),
        category,
        price_cents: price * 100,
        stock,
        status,
        image: format!("https://picsum.photos/60/60?random={}", id),
        description: format!("Description for Product {}", id),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::MAX_PRODUCT_COUNT;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let products = generate_seeded(50, 1).unwrap();
        assert_eq!(products.len(), 50);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert_eq!(p.name, format!("Product {}", i + 1));
            assert_eq!(p.description, format!("Description for Product {}", i + 1));
            assert!(p.image.ends_with(&format!("random={}", i + 1)));
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        let products = generate_seeded(2000, 99).unwrap();
        for p in &products {
            assert!(p.price_cents >= MIN_PRICE * 100 && p.price_cents <= MAX_PRICE * 100);
            assert_eq!(p.price_cents % 100, 0);
            assert!(p.stock < STOCK_CEILING);
        }
    }

    #[test]
    fn test_every_category_and_status_appears() {
        let products = generate_seeded(2000, 3).unwrap();
        for category in Category::ALL {
            assert!(products.iter().any(|p| p.category == category));
        }
        for status in ProductStatus::ALL {
            assert!(products.iter().any(|p| p.status == status));
        }
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = generate_seeded(100, 42).unwrap();
        let b = generate_seeded(100, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_generation_has_the_same_shape() {
        let products = generate(10).unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[9].id, 10);
    }

    #[test]
    fn test_out_of_range_count_fails_fast() {
        assert!(matches!(
            generate(0),
            Err(CoreError::InvalidProductCount { requested: 0, .. })
        ));
        assert!(generate_seeded(MAX_PRODUCT_COUNT + 1, 0).is_err());
    }
}
