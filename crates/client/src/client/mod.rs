//! HTTP client for the inventario API.

pub mod devices;
pub mod upload;
pub mod users;

use inventario_core::ensure_items_array;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{fetch_json, FetchOptions, RequestInit};

/// A record as returned by the listing endpoints.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// HTTP client for the inventario API.
#[derive(Debug, Clone)]
pub struct InventarioClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl InventarioClient {
    /// Create a new client with the given base URL and the default deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms: FetchOptions::default().timeout_ms,
        }
    }

    /// Create from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url).with_timeout_ms(config.timeout_ms)
    }

    /// Create from environment (see [`Config::from_env`]).
    pub fn from_env() -> Self {
        Self::from_config(&Config::from_env())
    }

    /// Override the per-request deadline.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request deadline in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Options for a request to `path`, labelled with the path itself.
    fn options(&self, path: &str) -> FetchOptions {
        FetchOptions::default()
            .with_timeout_ms(self.timeout_ms)
            .with_ctx(path)
    }

    /// Send a request to `path` and decode the JSON response.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        init: RequestInit,
    ) -> Result<T> {
        let value = fetch_json(&self.client, &self.url(path), init, self.options(path)).await?;
        Ok(value)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_json(path, RequestInit::method(Method::GET)).await
    }

    /// GET `path` and return the `items` array of the response.
    async fn list_items(&self, path: &str) -> Result<Vec<Record>> {
        let value: serde_json::Value = self.get_json(path).await?;
        let items = ensure_items_array(value, Some(path))?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventario_core::Locale;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = InventarioClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/usuarios"), "http://localhost:3000/api/usuarios");
    }

    #[test]
    fn test_options_carry_path_and_timeout() {
        let client = InventarioClient::new("http://localhost:3000").with_timeout_ms(800);
        let opts = client.options("/api/dispositivos");
        assert_eq!(opts.timeout_ms, 800);
        assert_eq!(opts.ctx.as_deref(), Some("/api/dispositivos"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            base_url: "http://inventario.test".to_string(),
            timeout_ms: 3_000,
            locale: Locale::En,
        };
        let client = InventarioClient::from_config(&config);
        assert_eq!(client.base_url(), "http://inventario.test");
        assert_eq!(client.timeout_ms(), 3_000);
    }
}
