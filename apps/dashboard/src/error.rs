//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  console line "sort image"                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad argument? ──── ValidationError ──────────┐                  │  │
//! │  │         │                                      │                  │  │
//! │  │         ▼                                      ▼                  │  │
//! │  │  Unknown key/column? ── CoreError ─────────► ApiError ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  console prints:  error [VALIDATION_ERROR] Unknown sort key: 'image'    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors never end the session. Only [`RunError`] does.

use serde::Serialize;
use thiserror::Error;

use catalog_core::{CoreError, ValidationError};

/// API error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 4242"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Referenced product does not exist
    NotFound,

    /// Internal error
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
///
/// Every core error is a bad input from the caller's point of view.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            other => ApiError::validation(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Run Error
// =============================================================================

/// Errors that end the session.
#[derive(Debug, Error)]
pub enum RunError {
    /// The catalog or session could not be built from the configuration.
    #[error("startup failed: {0}")]
    Startup(#[from] ApiError),

    /// Reading commands or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_validation() {
        let err = ApiError::from(CoreError::UnknownSortKey("image".into()));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown sort key: 'image'");

        let err = ApiError::from(CoreError::InvalidPageSize);
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_wrapped_validation_error_is_unwrapped() {
        let inner = ValidationError::Required {
            field: "product id".into(),
        };
        let err = ApiError::from(CoreError::Validation(inner));
        assert_eq!(err.message, "product id is required");
    }

    #[test]
    fn test_serialized_code_is_screaming_snake_case() {
        let err = ApiError::not_found("Product", "4242");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 4242");
        assert_eq!(err.to_string(), "[NOT_FOUND] Product not found: 4242");
    }
}
