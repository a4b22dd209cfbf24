//! # salesdesk-client: REST Gateway for SalesDesk
//!
//! Authenticated access to the SalesDesk backend and the navigation guard
//! that gates the authenticated views.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SalesDesk Request Flow                           │
//! │                                                                         │
//! │  Console command (sales create)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                salesdesk-client (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RouteGuard   │    │  Resource     │    │  ApiClient   │  │   │
//! │  │   │  (guard.rs)   │    │  APIs (api/)  │───►│  (http.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ decide before │    │ products()    │    │ one request  │  │   │
//! │  │   │ each command  │    │ invoices() .. │    │ chokepoint   │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────┬───────┘  │   │
//! │  │           └──────────────► SessionStore ◄──────────┘          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  https://localhost:7296  (REST, JSON, bearer token)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`http`] - `ApiClient` and the request chokepoint
//! - [`api`] - Per-resource operations
//! - [`guard`] - `RouteGuard` over the core route table
//! - [`config`] - `ClientConfig` (TOML + environment)
//! - [`error`] - `ClientError`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use salesdesk_client::{ApiClient, ClientConfig, InvoiceQuery};
//! use salesdesk_store::{MemoryStore, SessionStore};
//!
//! # async fn run() -> salesdesk_client::ClientResult<()> {
//! let session = SessionStore::new(MemoryStore::new());
//! let client = ApiClient::new(&ClientConfig::default(), session)?;
//!
//! client.auth().login("ada@example.com", "secret").await?;
//! let page = client.invoices().list(&InvoiceQuery::new().page_size(20)).await?;
//! println!("{} invoices", page.total_count);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{
    AuthApi, CustomersApi, InvoiceLinesApi, InvoiceQuery, InvoicesApi, LoginEnvelope, ProductsApi,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{NavigationOutcome, RouteGuard};
pub use http::ApiClient;

// Callers building extra headers for `ApiClient::request` need these
pub use reqwest::header::{HeaderMap, HeaderValue};
pub use reqwest::Method;
