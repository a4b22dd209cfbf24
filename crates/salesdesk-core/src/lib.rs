//! # salesdesk-core: Pure Types and Rules for SalesDesk
//!
//! This crate holds everything the SalesDesk client knows about its domain
//! without touching the network or the disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SalesDesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    login ──► products ──► customers ──► sales                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        salesdesk-client (REST gateway + route guard)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ salesdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   route   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Route   │  │   rules   │  │   │
//! │  │   │  SaleDto  │  │  (cents)  │  │  guard    │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Product, Customer, Sale, SaleDto, SaleItem, ...)
//! - [`money`] - Money type with integer arithmetic, decimal on the wire
//! - [`route`] - Route table and the pure navigation guard decision
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks for values typed by the operator
//!
//! ## Example Usage
//!
//! ```rust
//! use salesdesk_core::route::{decide_redirect, AuthState, Route};
//!
//! // Anonymous users asking for the sales page are sent to login
//! let redirect = decide_redirect(AuthState::Unauthenticated, Route::Sales);
//! assert_eq!(redirect, Some(Route::Login));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod route;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use route::{decide_redirect, AuthState, Route};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Durable storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable storage key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "userId";

/// First page of the invoice listing.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
