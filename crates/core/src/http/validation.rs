//! Response shape validation.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{HttpError, HttpErrorKind};

/// Message attached to every shape validation failure.
pub const ITEMS_SHAPE_MESSAGE: &str = "unexpected response shape: expected { items: [...] }";

/// Validates that `value` is an object with an `items` array and returns the
/// decoded elements.
///
/// Null, non-object values, a missing or non-array `items` field, and
/// elements that do not decode as `T` all fail with
/// [`HttpErrorKind::ParseError`].
///
/// # Examples
///
/// ```
/// use inventario_core::http::ensure_items_array;
/// use serde_json::json;
///
/// let names: Vec<String> = ensure_items_array(json!({ "items": ["a", "b"] }), None).unwrap();
/// assert_eq!(names, vec!["a", "b"]);
///
/// let err = ensure_items_array::<String>(json!({ "rows": [] }), Some("users")).unwrap_err();
/// assert_eq!(err.ctx(), Some("users"));
/// ```
pub fn ensure_items_array<T: DeserializeOwned>(
    value: Value,
    ctx: Option<&str>,
) -> Result<Vec<T>, HttpError> {
    let shape_error = || {
        HttpError::new(
            ITEMS_SHAPE_MESSAGE,
            HttpErrorKind::ParseError,
            None,
            ctx.map(str::to_string),
        )
    };

    let Value::Object(mut object) = value else {
        return Err(shape_error());
    };

    match object.remove("items") {
        Some(items @ Value::Array(_)) => serde_json::from_value(items).map_err(|_| shape_error()),
        _ => Err(shape_error()),
    }
}
