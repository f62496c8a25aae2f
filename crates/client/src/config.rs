use std::{env, time::Duration};

use inventario_core::http::DEFAULT_TIMEOUT_MS;
use inventario_core::Locale;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL (default: "http://localhost:3000")
    pub base_url: String,
    /// Per-request deadline in milliseconds (default: 12,000)
    pub timeout_ms: u64,
    /// Language for user-facing messages (default: es)
    pub locale: Locale,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INVENTARIO_URL` - API base URL (default: "http://localhost:3000")
    /// - `INVENTARIO_TIMEOUT_MS` - Request deadline in milliseconds (default: 12,000)
    /// - `INVENTARIO_LOCALE` - Message language, `es` or `en` (default: "es")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("INVENTARIO_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_ms: env::var("INVENTARIO_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            locale: env::var("INVENTARIO_LOCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Get the request deadline as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
