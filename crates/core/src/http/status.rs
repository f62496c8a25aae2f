//! Pure functions for mapping HTTP status codes to error kinds.

use super::HttpErrorKind;

/// Maps a non-success HTTP status code to an [`HttpErrorKind`].
///
/// - `500..` -> `ServerError`
/// - `400..=499` -> `ClientError`
/// - anything else -> `Unknown`
///
/// Callers only reach this for statuses outside `200..=299`.
///
/// # Examples
///
/// ```
/// use inventario_core::http::{status_to_error_kind, HttpErrorKind};
///
/// assert_eq!(status_to_error_kind(404), HttpErrorKind::ClientError);
/// assert_eq!(status_to_error_kind(502), HttpErrorKind::ServerError);
/// ```
pub fn status_to_error_kind(status: u16) -> HttpErrorKind {
    match status {
        500.. => HttpErrorKind::ServerError,
        400..=499 => HttpErrorKind::ClientError,
        _ => HttpErrorKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_5xx_maps_to_server_error() {
        for status in [500, 502, 503, 504, 599] {
            assert_eq!(status_to_error_kind(status), HttpErrorKind::ServerError);
        }
    }

    #[test]
    fn test_4xx_maps_to_client_error() {
        for status in [400, 401, 403, 404, 422, 499] {
            assert_eq!(status_to_error_kind(status), HttpErrorKind::ClientError);
        }
    }

    #[test]
    fn test_other_statuses_map_to_unknown() {
        for status in [100, 101, 301, 304, 399] {
            assert_eq!(status_to_error_kind(status), HttpErrorKind::Unknown);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(status_to_error_kind(399), HttpErrorKind::Unknown);
        assert_eq!(status_to_error_kind(400), HttpErrorKind::ClientError);
        assert_eq!(status_to_error_kind(499), HttpErrorKind::ClientError);
        assert_eq!(status_to_error_kind(500), HttpErrorKind::ServerError);
    }
}
