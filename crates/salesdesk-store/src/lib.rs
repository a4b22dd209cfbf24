//! # salesdesk-store: Durable Storage for SalesDesk
//!
//! Holds the session (token + user id) across process restarts, on top of a
//! small key-value capability that can be backed by files or by memory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SalesDesk Data Flow                              │
//! │                                                                         │
//! │  ApiClient (bearer token)        RouteGuard (auth state)               │
//! │       │                               │                                 │
//! │       └───────────────┬───────────────┘                                 │
//! │                       ▼                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 salesdesk-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ SessionStore  │───►│ KeyValueStore │◄───│  FileStore   │  │   │
//! │  │   │ (session.rs)  │    │   (kv.rs)     │    │ MemoryStore  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  ~/.local/share/salesdesk/session/{token,userId}                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KeyValueStore` capability
//! - [`memory`] - In-memory implementation (tests, ephemeral sessions)
//! - [`file`] - One-file-per-key implementation
//! - [`session`] - `SessionStore`, the auth state holder
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use salesdesk_store::{MemoryStore, SessionStore};
//!
//! let session = SessionStore::new(MemoryStore::new());
//! session.set_auth_data(Some("tok"), Some("user-1")).unwrap();
//! assert!(session.is_authenticated().unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use session::SessionStore;
