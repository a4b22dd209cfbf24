//! # Validation Module
//!
//! Checks applied to operator input before a request is built.
//!
//! ## Where It Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  console arguments ──► THIS MODULE ──► resource operation ──► backend  │
//! │                                                                         │
//! │  The backend still validates; these checks only turn the common       │
//! │  mistakes into a readable message without a round trip.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salesdesk_core::validation::{parse_line_spec, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//!
//! let line = parse_line_spec("item-7:2:4.50").unwrap();
//! assert_eq!(line.line_total().unwrap().cents(), 900);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::SaleItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only values and returns the trimmed value.
pub fn validate_required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with text on both sides
/// - Domain part contains a dot that is neither first nor last
///
/// ## Example
/// ```rust
/// use salesdesk_core::validation::validate_email;
///
/// assert!(validate_email("ada@example.com").is_ok());
/// assert!(validate_email("ada@example").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = validate_required("email", email)?;

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("expected name@domain"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Quantities on an invoice line must be positive.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Unit prices may be zero (free items) but never negative.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }
    Ok(())
}

/// Validates page number and page size for the invoice listing.
///
/// ## Rules
/// - Page number starts at 1
/// - Page size between 1 and 100
pub fn validate_page(page_number: u32, page_size: u32) -> ValidationResult<()> {
    if page_number == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page number".to_string(),
        });
    }
    if page_size == 0 || page_size > 100 {
        return Err(ValidationError::OutOfRange {
            field: "page size".to_string(),
            min: 1,
            max: 100,
        });
    }
    Ok(())
}

// =============================================================================
// Line Specs
// =============================================================================

/// Parses an invoice line written as `ITEM:QTY:PRICE`.
///
/// The item id is everything before the last two colons, so ids containing
/// a colon survive. The resulting line has no invoice id yet.
pub fn parse_line_spec(spec: &str) -> CoreResult<SaleItem> {
    let bad = || CoreError::InvalidLineSpec {
        input: spec.to_string(),
    };

    let mut parts = spec.trim().rsplitn(3, ':');
    let price = parts.next().ok_or_else(bad)?;
    let qty = parts.next().ok_or_else(bad)?;
    let item = parts.next().ok_or_else(bad)?;

    let item = validate_required("item", item)?;
    let quantity: i64 = qty.trim().parse().map_err(|_| bad())?;
    validate_quantity(quantity)?;
    let unit_price: Money = price.parse()?;
    validate_unit_price(unit_price)?;

    let line = SaleItem::new(item, quantity, unit_price);
    line.line_total()?;
    Ok(line)
}

// =============================================================================
// Unit Tests
// =============================================================================
