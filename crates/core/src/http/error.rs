use serde::Serialize;
use thiserror::Error;

/// Classification of a failed HTTP helper call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HttpErrorKind {
    /// The request never produced a response (DNS, refused connection, TLS).
    Network,
    /// The deadline elapsed before the response was received.
    Timeout,
    /// The server answered with a 4xx status.
    ClientError,
    /// The server answered with a 5xx status.
    ServerError,
    /// The body could not be decoded into the expected shape.
    ParseError,
    /// Any other non-success outcome.
    Unknown,
}

impl HttpErrorKind {
    /// Returns the kebab-case tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpErrorKind::Network => "network",
            HttpErrorKind::Timeout => "timeout",
            HttpErrorKind::ClientError => "client-error",
            HttpErrorKind::ServerError => "server-error",
            HttpErrorKind::ParseError => "parse-error",
            HttpErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced by the HTTP helper.
///
/// Built once at the point of failure and never mutated afterwards, so the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}{}", .ctx.as_ref().map(|ctx| format!(" [{ctx}]")).unwrap_or_default())]
pub struct HttpError {
    message: String,
    kind: HttpErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ctx: Option<String>,
}

impl HttpError {
    /// Creates a new error.
    pub fn new(
        message: impl Into<String>,
        kind: HttpErrorKind,
        status: Option<u16>,
        ctx: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            status,
            ctx,
        }
    }

    /// The request could not reach the server.
    pub fn network(ctx: Option<String>) -> Self {
        Self::new("could not connect to the server", HttpErrorKind::Network, None, ctx)
    }

    /// The deadline elapsed before a response arrived.
    pub fn timeout(ctx: Option<String>) -> Self {
        Self::new("request timed out", HttpErrorKind::Timeout, None, ctx)
    }

    /// The response body was not valid JSON for the expected type.
    pub fn parse(ctx: Option<String>) -> Self {
        Self::new("invalid response from the server", HttpErrorKind::ParseError, None, ctx)
    }

    /// A non-success status was received.
    pub fn from_status(status: u16, ctx: Option<String>) -> Self {
        Self::new(
            format!("HTTP {status}"),
            super::status_to_error_kind(status),
            Some(status),
            ctx,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn ctx(&self) -> Option<&str> {
        self.ctx.as_deref()
    }
}

/// Result type for HTTP helper operations.
pub type Result<T> = std::result::Result<T, HttpError>;
