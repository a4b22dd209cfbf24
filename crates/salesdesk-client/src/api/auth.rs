//! Login, logout and token-gated reads.

use reqwest::header::HeaderMap;
use reqwest::Method;
use salesdesk_core::{LoginCredentials, LoginSession};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{ClientError, ClientResult};
use crate::http::{decode, ApiClient};

const LOGIN_ENDPOINT: &str = "/users/login";

/// Shape of a `/users/login` response: `{ "value": { "token", "userId" } }`.
///
/// Every field is optional here so a missing piece is reported as an
/// authentication failure rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginEnvelope {
    #[serde(default)]
    pub value: Option<LoginValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginValue {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl LoginEnvelope {
    /// Extracts the session, or fails when the token is missing.
    pub fn into_session(self) -> ClientResult<LoginSession> {
        let value = self
            .value
            .ok_or_else(|| ClientError::Auth("Token not found in response".into()))?;
        let token = value
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Auth("Token not found in response".into()))?;
        Ok(LoginSession {
            token,
            user_id: value.user_id.filter(|u| !u.is_empty()),
        })
    }
}

/// `/users/login` plus session bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a token and persists the session.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginSession> {
        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .request(
                Method::POST,
                LOGIN_ENDPOINT,
                Some(&credentials),
                &HeaderMap::new(),
            )
            .await?;

        if !response.is_object() {
            return Err(ClientError::Format(format!(
                "{} returned {} instead of an object",
                LOGIN_ENDPOINT,
                json_kind(&response)
            )));
        }

        let envelope: LoginEnvelope = decode(LOGIN_ENDPOINT, response)?;
        let session = envelope.into_session().map_err(|e| {
            warn!("Login response carried no token");
            e
        })?;

        self.client
            .session()
            .set_auth_data(Some(&session.token), session.user_id.as_deref())?;
        info!(user_id = session.user_id.as_deref().unwrap_or("-"), "Logged in");
        Ok(session)
    }

    /// Forgets the local session. The backend is not contacted.
    pub fn logout(&self) -> ClientResult<()> {
        self.client.session().clear_auth_data()?;
        info!("Logged out");
        Ok(())
    }

    /// GET that refuses to run without a stored token.
    pub async fn fetch_protected<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        if !self.client.session().is_authenticated()? {
            return Err(ClientError::Auth(
                "No token available. Please log in.".into(),
            ));
        }
        self.client.get(endpoint).await
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
