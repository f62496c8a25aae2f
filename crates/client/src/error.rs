//! Client error types.

use inventario_core::{HttpError, Locale};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the message to show an end user.
    ///
    /// HTTP failures get their specific translation; everything else falls
    /// back to the generic message.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            ClientError::Http(error) => inventario_core::message_for_user(error, locale),
            other => inventario_core::message_for_user(other, locale),
        }
    }

    /// The underlying HTTP error, if any.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            ClientError::Http(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use inventario_core::http::{GENERIC_MESSAGE_EN, GENERIC_MESSAGE_ES};

    use super::*;

    #[test]
    fn test_http_variant_is_translated() {
        let error = ClientError::from(HttpError::timeout(None));
        assert_eq!(
            error.user_message(Locale::Es),
            "La solicitud tardó demasiado. Intenta de nuevo."
        );
        assert!(error.as_http().is_some());
    }

    #[test]
    fn test_http_variant_displays_inner_error() {
        let error = ClientError::from(HttpError::from_status(500, Some("/api/carga".into())));
        assert_eq!(error.to_string(), "HTTP 500 [/api/carga]");
    }

    #[test]
    fn test_other_variants_use_generic_message() {
        let io = ClientError::from(std::io::Error::other("missing file"));
        assert_eq!(io.user_message(Locale::Es), GENERIC_MESSAGE_ES);

        let input = ClientError::InvalidInput("empty path".to_string());
        assert_eq!(input.user_message(Locale::En), GENERIC_MESSAGE_EN);
        assert!(input.as_http().is_none());
    }
}
