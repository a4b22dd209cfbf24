//! # Client Error Types
//!
//! Error types for everything that goes through [`ApiClient`](crate::ApiClient).
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Request      │  │       Format            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  DNS, refused,  │  │  non-2xx with   │  │  invalid JSON, wrong    │ │
//! │  │  timeout, body  │  │  status + body  │  │  shape for the call     │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Auth        │  │    Storage      │  │    Configuration        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  no token, bad  │  │  StoreError     │  │  InvalidConfig          │ │
//! │  │  login envelope │  │  (propagated)   │  │  InvalidUrl             │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retried. Every error reaches the caller.

use salesdesk_store::StoreError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Network
    // =========================================================================
    /// The request never produced a response (or its body could not be read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Request { status: u16, body: String },

    /// The response body does not have the shape the call expects.
    #[error("Invalid response format: {0}")]
    Format(String),

    // =========================================================================
    // Session
    // =========================================================================
    /// A call needs a session that is not there, or login returned no token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Durable session storage failed.
    #[error("Session storage error: {0}")]
    Storage(#[from] StoreError),

    // =========================================================================
    // Configuration
    // =========================================================================
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Format(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::InvalidConfig(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::InvalidConfig(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for missing or rejected credentials, local or server-side.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Auth(_)) || matches!(self.status(), Some(401 | 403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_) | ClientError::InvalidUrl(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display_has_status_and_body() {
        let err = ClientError::Request {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.to_string(), "API Error: 404 - not found");
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_auth_predicates() {
        assert!(ClientError::Auth("no token".into()).is_auth_error());
        assert!(ClientError::Request {
            status: 401,
            body: String::new()
        }
        .is_auth_error());
        assert!(!ClientError::Transport("refused".into()).is_auth_error());
    }

    #[test]
    fn test_config_predicates() {
        assert!(ClientError::InvalidUrl("x".into()).is_config_error());
        assert!(!ClientError::Format("x".into()).is_config_error());
        assert_eq!(ClientError::Format("x".into()).status(), None);
    }
}
