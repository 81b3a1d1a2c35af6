//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - Programmer errors caught at the boundary       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! Every pipeline and cart operation is total. Out-of-range pages clamp,
//! non-positive quantities remove, unknown ids are no-ops. The variants
//! below only cover inputs that cannot be given a sensible meaning: a sort
//! field that doesn't exist, a generator count of zero, a page size of zero.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sort key names a field that products don't have or can't be
    /// ordered by.
    ///
    /// ## When This Occurs
    /// - Parsing `"image"` or `"actions"` as a sort key
    /// - A typo in a column id coming from the presentation layer
    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),

    /// A category name is not one of the fixed category set.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// A column id is not part of the table layout.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// The generator was asked for an unsupported number of products.
    #[error("Product count {requested} is outside the supported range 1..={max}")]
    InvalidProductCount { requested: usize, max: usize },

    /// Paging with zero items per page has no meaning.
    #[error("Items per page must be at least 1")]
    InvalidPageSize,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
