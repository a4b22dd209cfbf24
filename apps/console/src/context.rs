//! Wiring: configuration, session storage, API client and guard.

use anyhow::{Context, Result};
use salesdesk_client::{ApiClient, ClientConfig, RouteGuard};
use salesdesk_store::{FileStore, SessionStore};
use tracing::debug;

use crate::cli::Cli;

/// Everything a command needs. Client and guard share one session.
pub struct AppContext {
    pub client: ApiClient,
    pub guard: RouteGuard,
}

impl AppContext {
    /// Loads config (file, environment, then command-line flags) and opens
    /// the file-backed session.
    pub fn build(cli: &Cli) -> Result<Self> {
        let mut config =
            ClientConfig::load(cli.config.clone()).context("loading configuration")?;
        if let Some(url) = &cli.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(dir) = &cli.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        Self::from_config(&config)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let data_dir = config
            .data_dir()
            .context("no session directory; set SALESDESK_DATA_DIR or --data-dir")?;
        debug!(dir = %data_dir.display(), "Session directory");

        let session = SessionStore::new(FileStore::new(data_dir));
        let client = ApiClient::new(config, session.clone()).context("creating API client")?;
        Ok(Self {
            client,
            guard: RouteGuard::new(session),
        })
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_and_guard_share_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::with_base_url("http://127.0.0.1:1");
        config.storage.data_dir = Some(dir.path().to_path_buf());

        let ctx = AppContext::from_config(&config).unwrap();
        ctx.session().set_auth_data(Some("t"), Some("u")).unwrap();
        assert!(ctx.guard.auth_state().unwrap().is_authenticated());
        assert!(dir.path().join("token").exists());
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::with_base_url("ftp://nope");
        config.storage.data_dir = Some(dir.path().to_path_buf());
        assert!(AppContext::from_config(&config).is_err());
    }
}
