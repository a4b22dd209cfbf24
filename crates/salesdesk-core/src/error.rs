//! # Error Types
//!
//! Domain-specific error types for salesdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salesdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Parsing of domain values, total overflow       │
//! │  └── ValidationError  - Operator input that breaks a rule              │
//! │                                                                         │
//! │  salesdesk-store errors (separate crate)                               │
//! │  └── StoreError       - Durable storage failures                       │
//! │                                                                         │
//! │  salesdesk-client errors (separate crate)                              │
//! │  └── ClientError      - Transport / Request / Format / Auth            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console prints the message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building domain values from raw input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount could not be parsed.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// A line or invoice total does not fit in the cent range.
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    /// An invoice line spec was not `ITEM:QTY:PRICE`.
    #[error("Invalid invoice line '{input}': expected ITEM:QTY:PRICE")]
    InvalidLineSpec { input: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any request leaves the client so the operator gets a
/// precise message instead of a server-side 400.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., malformed email).
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
