//! Delivery client for the Urban Airship push API.

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::OnceLock;
use tracing::debug;

use crate::{AirshipError, PushPayload, Result};

/// Default production API root.
pub const DEFAULT_BASE_URL: &str = "https://go.urbanairship.com";

/// Version pin so the service answers with the v3 response shape.
const ACCEPT_V3: &str = "application/vnd.urbanairship+json; version=3;";

const PUSH_PATH: &str = "/api/push";
const BROADCAST_PATH: &str = "/api/push/broadcast";

/// Process-wide transport used when the caller does not supply one.
fn shared_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(Client::new)
}

/// Application credentials and target server.
#[derive(Debug, Clone)]
pub struct AirshipConfig {
    /// Application key (Basic-Auth username).
    pub app_key: String,
    /// Application master secret (Basic-Auth password).
    pub master_secret: String,
    /// API server root.
    pub base_url: String,
}

impl AirshipConfig {
    /// Create a config targeting the production API.
    pub fn new(app_key: impl Into<String>, master_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            master_secret: master_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API server root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Client for the push API.
///
/// Credentials are fixed at construction and sign every outgoing request.
/// Each call is an independent, stateless request/response exchange; no
/// retries happen at this layer. Concurrent calls from multiple tasks are
/// fine — the underlying `reqwest::Client` is safe for concurrent use.
pub struct AirshipClient {
    config: AirshipConfig,
    client: Client,
}

impl AirshipClient {
    /// Create a client using the shared default transport.
    pub fn new(config: AirshipConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client with a caller-supplied transport.
    ///
    /// Timeout and TLS policy belong to the supplied client; this layer
    /// adds neither.
    pub fn with_http_client(config: AirshipConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AirshipConfig {
        &self.config
    }

    /// Send a push to the payload's audience.
    pub async fn push(&self, payload: &PushPayload) -> Result<()> {
        self.deliver(PUSH_PATH, payload).await
    }

    /// Send a push to every registered device.
    ///
    /// The audience field is conventionally left unset here; a populated
    /// audience is passed through as-is and its effect is the service's
    /// to decide.
    pub async fn broadcast(&self, payload: &PushPayload) -> Result<()> {
        self.deliver(BROADCAST_PATH, payload).await
    }

    async fn deliver(&self, path: &str, payload: &PushPayload) -> Result<()> {
        let body = serde_json::to_vec(payload)?;
        let url = format!("{}{}", self.config.base_url, path);

        debug!(%url, "Sending push request");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.app_key, Some(&self.config.master_secret))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, ACCEPT_V3)
            .body(body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            debug!(status = status.as_u16(), "Push accepted");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AirshipError::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_production() {
        let config = AirshipConfig::new("key", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.app_key, "key");
        assert_eq!(config.master_secret, "secret");
    }

    #[test]
    fn test_config_base_url_override() {
        let config = AirshipConfig::new("key", "secret").base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_keeps_config() {
        let client = AirshipClient::new(AirshipConfig::new("key", "secret"));
        assert_eq!(client.config().base_url, DEFAULT_BASE_URL);
    }
}
