//! # API Gateway
//!
//! The single request chokepoint every resource operation goes through.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request(method, endpoint, body?, extra_headers)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Content-Type: application/json                                        │
//! │  Authorization: Bearer <token>     ◄── only if stored right now        │
//! │  extra_headers                     ◄── merged last, caller wins        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  reqwest ──► base_url + endpoint   (cookie store on)                   │
//! │       │                                                                 │
//! │       ├── network fault ─────────► ClientError::Transport              │
//! │       ├── non-2xx ───────────────► ClientError::Request{status, body}  │
//! │       ├── 2xx, empty body ───────► {}                                  │
//! │       ├── 2xx, JSON ─────────────► serde_json::Value                   │
//! │       └── 2xx, not JSON ─────────► ClientError::Format                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use salesdesk_store::SessionStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::api::{AuthApi, CustomersApi, InvoiceLinesApi, InvoicesApi, ProductsApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Authenticated JSON client for the SalesDesk backend.
///
/// Cheap to clone; clones share the connection pool, cookie jar and session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &ClientConfig, session: SessionStore) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(config.api.accept_invalid_certs)
            .user_agent(config.api.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("HTTP client: {}", e)))?;

        debug!(base_url = %config.base_url(), "API client ready");
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            session,
        })
    }

    /// Shorthand for a client with default settings against `base_url`.
    pub fn with_base_url(base_url: &str, session: SessionStore) -> ClientResult<Self> {
        Self::new(&ClientConfig::with_base_url(base_url), session)
    }

    /// The session this client reads its bearer token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // Resource Accessors
    // =========================================================================

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(self)
    }

    pub fn invoices(&self) -> InvoicesApi<'_> {
        InvoicesApi::new(self)
    }

    pub fn invoice_lines(&self) -> InvoiceLinesApi<'_> {
        InvoiceLinesApi::new(self)
    }

    // =========================================================================
    // Request Chokepoint
    // =========================================================================

    /// Sends one request and returns the decoded JSON body.
    ///
    /// An empty 2xx body yields an empty object, never `null`.
    pub async fn request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: &HeaderMap,
    ) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let headers = self.build_headers(extra_headers)?;
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(method = %method, endpoint = %endpoint, "API call");

        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ClientError::Format(format!("request body: {}", e)))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            error!(method = %method, endpoint = %endpoint, error = %e, "API transport failure");
            ClientError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                method = %method,
                endpoint = %endpoint,
                status = status.as_u16(),
                "API response error"
            );
            return Err(ClientError::Request {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(endpoint = %endpoint, error = %e, "Response is not JSON");
            ClientError::Format(format!("{} returned invalid JSON: {}", endpoint, e))
        })
    }

    /// Like [`request`](Self::request), decoded into `T` at the boundary.
    pub async fn request_as<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self
            .request(method, endpoint, body, &HeaderMap::new())
            .await?;
        decode(endpoint, value)
    }

    /// Like [`request`](Self::request), for calls whose body is not used.
    pub async fn execute<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, endpoint, body, &HeaderMap::new())
            .await
            .map(|_| ())
    }

    /// GET with no body, decoded into `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.request_as(Method::GET, endpoint, None::<&()>).await
    }

    fn build_headers(&self, extra: &HeaderMap) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token()? {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ClientError::Auth("stored token is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in extra {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }
}

/// Decodes a JSON value into `T`, reporting mismatches as `Format` errors.
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| {
        error!(endpoint = %endpoint, error = %e, "Unexpected response shape");
        ClientError::Format(format!("{}: {}", endpoint, e))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
