//! Timed JSON fetch.
//!
//! [`fetch_json`] sends one request under a deadline, rejects non-success
//! statuses, and decodes the body. Every failure is reported as an
//! [`HttpError`] tagged with the caller's context label.

use std::time::{Duration, Instant};

use inventario_core::http::{HttpError, DEFAULT_TIMEOUT_MS};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;

/// Request parameters supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct RequestInit {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestInit {
    /// A request with the given method and no headers or body.
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header, replacing any previous value.
    pub fn with_header(
        mut self,
        name: reqwest::header::HeaderName,
        value: reqwest::header::HeaderValue,
    ) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Options for a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Deadline for the whole exchange, in milliseconds.
    pub timeout_ms: u64,
    /// Label attached to every error produced by the call.
    pub ctx: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            ctx: None,
        }
    }
}

impl FetchOptions {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_ctx(mut self, ctx: impl Into<String>) -> Self {
        self.ctx = Some(ctx.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Sends a request and decodes the JSON response body as `T`.
///
/// The deadline covers sending the request and receiving the full body.
/// When it elapses the in-flight request is dropped and the call fails with
/// a timeout before any decoding happens. Transport failures map to
/// `network`, non-2xx statuses to `client-error`, `server-error` or
/// `unknown`, and undecodable bodies to `parse-error`.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    init: RequestInit,
    opts: FetchOptions,
) -> Result<T, HttpError> {
    let started = Instant::now();
    let ctx = opts.ctx.clone();
    let method = init.method.clone();

    let url = match Url::parse(url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(ctx = ?ctx, %url, error = %e, "invalid request url");
            return Err(HttpError::network(ctx));
        }
    };

    tracing::debug!(%method, %url, ctx = ?ctx, timeout_ms = opts.timeout_ms, "sending request");

    let mut request = client.request(init.method, url.clone()).headers(init.headers);
    if let Some(body) = init.body {
        request = request.body(body);
    }

    // Dropping the losing future releases both the timer and the connection.
    let exchange = async {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, ctx.clone()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::from_status(status.as_u16(), ctx.clone()));
        }

        response
            .bytes()
            .await
            .map_err(|e| transport_error(e, ctx.clone()))
    };

    let body = match tokio::time::timeout(opts.timeout(), exchange).await {
        Ok(Ok(body)) => body,
        Ok(Err(error)) => {
            tracing::warn!(
                %method,
                %url,
                kind = %error.kind(),
                status = ?error.status(),
                ctx = ?ctx,
                "request failed"
            );
            return Err(error);
        }
        Err(_) => {
            tracing::warn!(
                %method,
                %url,
                ctx = ?ctx,
                timeout_ms = opts.timeout_ms,
                "request timed out"
            );
            return Err(HttpError::timeout(ctx));
        }
    };

    let value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(%method, %url, ctx = ?ctx, error = %e, "response body is not valid JSON");
        HttpError::parse(ctx.clone())
    })?;

    tracing::debug!(
        %method,
        %url,
        ctx = ?ctx,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request succeeded"
    );

    Ok(value)
}

fn transport_error(error: reqwest::Error, ctx: Option<String>) -> HttpError {
    if error.is_timeout() {
        HttpError::timeout(ctx)
    } else {
        tracing::debug!(error = %error, "transport error");
        HttpError::network(ctx)
    }
}
