//! Localized, user-facing messages for HTTP helper failures.

use std::error::Error;

use super::{HttpError, HttpErrorKind};
use crate::locale::Locale;

/// Fallback shown for anything that is not an [`HttpError`] (Spanish).
pub const GENERIC_MESSAGE_ES: &str = "Ocurrió un error inesperado.";
/// Fallback shown for anything that is not an [`HttpError`] (English).
pub const GENERIC_MESSAGE_EN: &str = "An unexpected error occurred.";

fn generic(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => GENERIC_MESSAGE_ES,
        Locale::En => GENERIC_MESSAGE_EN,
    }
}

/// Produces the message to show an end user for any error value.
///
/// Only an [`HttpError`] gets a specific message; every other error type
/// gets the generic fallback.
///
/// # Examples
///
/// ```
/// use inventario_core::{message_for_user, HttpError, Locale};
///
/// let err = HttpError::from_status(404, None);
/// assert_eq!(message_for_user(&err, Locale::En), "Resource not found (404).");
///
/// let io = std::io::Error::other("disk full");
/// assert_eq!(message_for_user(&io, Locale::En), "An unexpected error occurred.");
/// ```
pub fn message_for_user(err: &(dyn Error + 'static), locale: Locale) -> &'static str {
    match err.downcast_ref::<HttpError>() {
        Some(http) => http.user_message(locale),
        None => generic(locale),
    }
}

impl HttpError {
    /// Returns the localized message for this error.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => spanish(self),
            Locale::En => english(self),
        }
    }
}

fn spanish(err: &HttpError) -> &'static str {
    match (err.kind(), err.status()) {
        (HttpErrorKind::Network, _) => {
            "No se pudo conectar con el servidor. Verifica que el backend esté en línea."
        }
        (HttpErrorKind::Timeout, _) => "La solicitud tardó demasiado. Intenta de nuevo.",
        (HttpErrorKind::ClientError, Some(401)) => {
            "No autorizado (401). Inicia sesión o solicita acceso."
        }
        (HttpErrorKind::ClientError, Some(403)) => "Acceso denegado (403).",
        (HttpErrorKind::ClientError, Some(404)) => "Recurso no encontrado (404).",
        (HttpErrorKind::ClientError, _) => "Hubo un problema con la solicitud (HTTP 4xx).",
        (HttpErrorKind::ServerError, _) => {
            "El servidor presentó un problema (HTTP 5xx). Intenta más tarde."
        }
        (HttpErrorKind::ParseError, _) => "El servidor respondió con un formato inesperado.",
        (HttpErrorKind::Unknown, _) => GENERIC_MESSAGE_ES,
    }
}

fn english(err: &HttpError) -> &'static str {
    match (err.kind(), err.status()) {
        (HttpErrorKind::Network, _) => {
            "Could not connect to the server. Check that the backend is online."
        }
        (HttpErrorKind::Timeout, _) => "The request took too long. Please try again.",
        (HttpErrorKind::ClientError, Some(401)) => "Unauthorized (401). Sign in or request access.",
        (HttpErrorKind::ClientError, Some(403)) => "Access denied (403).",
        (HttpErrorKind::ClientError, Some(404)) => "Resource not found (404).",
        (HttpErrorKind::ClientError, _) => "There was a problem with the request (HTTP 4xx).",
        (HttpErrorKind::ServerError, _) => {
            "The server ran into a problem (HTTP 5xx). Please try again later."
        }
        (HttpErrorKind::ParseError, _) => "The server replied with an unexpected format.",
        (HttpErrorKind::Unknown, _) => GENERIC_MESSAGE_EN,
    }
}
