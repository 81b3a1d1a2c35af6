//! # Validation Module
//!
//! Fail-fast guards and input parsers.
//!
//! ## Two Kinds of Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation input (console line, form field)                │
//! │  ├── parse_product_id / parse_page_number / parse_quantity             │
//! │  └── Text → typed value, rejected with a readable message              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Programmer-error guards                                      │
//! │  ├── validate_product_count / validate_items_per_page                  │
//! │  └── Values with no meaningful interpretation fail fast                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Core operations (total: clamp or no-op, never fail)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::{MAX_ITEM_QUANTITY, MAX_PRODUCT_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Programmer-Error Guards
// =============================================================================

/// Validates the number of products requested from the generator.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_PRODUCT_COUNT`]
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_count;
///
/// assert!(validate_product_count(1000).is_ok());
/// assert!(validate_product_count(0).is_err());
/// ```
pub fn validate_product_count(count: usize) -> CoreResult<()> {
    if count == 0 || count > MAX_PRODUCT_COUNT {
        return Err(CoreError::InvalidProductCount {
            requested: count,
            max: MAX_PRODUCT_COUNT,
        });
    }
    Ok(())
}

/// Validates a page size. Zero would make every page empty and the page
/// count undefined.
pub fn validate_items_per_page(items_per_page: usize) -> CoreResult<()> {
    if items_per_page == 0 {
        return Err(CoreError::InvalidPageSize);
    }
    Ok(())
}

// =============================================================================
// Input Parsers
// =============================================================================

/// Parses a product id typed by the user.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::parse_product_id;
///
/// assert_eq!(parse_product_id(" 42 ").unwrap(), 42);
/// assert!(parse_product_id("0").is_err());
/// assert!(parse_product_id("abc").is_err());
/// ```
pub fn parse_product_id(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    let id: u32 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "product id".to_string(),
        reason: format!("'{}' is not a number", input),
    })?;

    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    Ok(id)
}

/// Parses a page number. Any non-negative number is accepted; clamping
/// into range is the paginator's job, so `0` and huge values are fine here.
pub fn parse_page_number(input: &str) -> ValidationResult<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "page".to_string(),
        });
    }

    input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "page".to_string(),
        reason: format!("'{}' is not a page number", input),
    })
}

/// Parses a cart quantity. Negative and zero values are valid input: the
/// cart treats them as removal.
///
/// ## Errors
/// `OutOfRange` above [`MAX_ITEM_QUANTITY`].
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let quantity: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: format!("'{}' is not a whole number", input),
    })?;

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
