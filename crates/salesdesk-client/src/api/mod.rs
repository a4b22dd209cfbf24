//! # Resource APIs
//!
//! One accessor per backend resource, each a thin projection over
//! [`ApiClient::request`](crate::ApiClient::request).
//!
//! ```text
//! client.auth()           POST /users/login            (+ local logout)
//! client.products()       /items[/{id}]
//! client.customers()      /customers[/{id}]
//! client.invoices()       /invoices[?query | /{id}]
//! client.invoice_lines()  /invoice-line[/{id} | /getby-invoiceid/{id}]
//! ```
//!
//! Ids are inserted into paths verbatim; the backend issues GUIDs.

pub mod auth;
pub mod customers;
pub mod invoice_lines;
pub mod invoices;
pub mod products;

pub use auth::{AuthApi, LoginEnvelope};
pub use customers::CustomersApi;
pub use invoice_lines::InvoiceLinesApi;
pub use invoices::{InvoiceQuery, InvoicesApi};
pub use products::ProductsApi;
