//! Client for the Typefully API.

use crate::config::ClientConfig;
use crate::error::{TypefullyError, TypefullyResult};
use crate::types::{ContentFilter, DraftRequest};
use crate::DEFAULT_API_BASE;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the Typefully API.
///
/// Each operation is exactly one HTTP round-trip. The API key is checked
/// before any I/O; a keyless client fails every call without touching the
/// network.
#[derive(Debug, Clone)]
pub struct TypefullyClient {
    config: ClientConfig,
    http: Client,
}

impl TypefullyClient {
    /// Create a new client builder.
    pub fn builder() -> TypefullyClientBuilder {
        TypefullyClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> TypefullyResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Create a draft from plain-text content.
    ///
    /// POSTs to `/drafts/`; the response payload is relayed verbatim as JSON.
    pub async fn create_draft(
        &self,
        request: &DraftRequest,
    ) -> TypefullyResult<serde_json::Value> {
        let api_key = self.require_api_key()?;
        let url = self.endpoint("drafts/")?;
        debug!(url = %url, "creating draft");

        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-API-KEY", Self::auth_value(api_key)?)
            .json(request)
            .send()
            .await?;

        Self::relay_json(response).await
    }

    /// List the most recently scheduled drafts, optionally filtered to
    /// threads or tweets.
    ///
    /// GETs `/drafts/recently-scheduled/`; the `content_filter` query
    /// parameter is appended only when a filter was supplied.
    pub async fn recently_scheduled(
        &self,
        filter: Option<ContentFilter>,
    ) -> TypefullyResult<serde_json::Value> {
        let api_key = self.require_api_key()?;
        let mut url = self.endpoint("drafts/recently-scheduled/")?;
        if let Some(filter) = filter {
            url.query_pairs_mut()
                .append_pair("content_filter", filter.as_str());
        }
        debug!(url = %url, "listing recently scheduled drafts");

        let response = self
            .http
            .get(url)
            .header("X-API-KEY", Self::auth_value(api_key)?)
            .send()
            .await?;

        Self::relay_json(response).await
    }

    fn require_api_key(&self) -> TypefullyResult<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(TypefullyError::MissingApiKey)
    }

    fn auth_value(api_key: &str) -> TypefullyResult<header::HeaderValue> {
        header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| TypefullyError::Config("Invalid API key format".to_string()))
    }

    /// Build a URL for the given path relative to the API base.
    fn endpoint(&self, path: &str) -> TypefullyResult<Url> {
        // Url::join drops the last path segment of a base without a trailing
        // slash, so normalize before joining.
        let mut base = self.config.base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?.join(path)?)
    }

    /// Map a response to the relayed JSON payload or an API error carrying
    /// the status code and raw body text.
    async fn relay_json(response: reqwest::Response) -> TypefullyResult<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TypefullyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for creating a TypefullyClient.
pub struct TypefullyClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl TypefullyClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the API base URL. Defaults to the production API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> TypefullyResult<TypefullyClient> {
        let base_url_str = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key,
            timeout: self.timeout,
        };

        TypefullyClient::from_config(config)
    }
}

impl Default for TypefullyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
