//! HTTP helper building blocks: error taxonomy, status classification,
//! response shape validation, and user-facing messages.

mod error;
mod messages;
mod status;
mod validation;

pub use error::{HttpError, HttpErrorKind, Result};
pub use messages::{message_for_user, GENERIC_MESSAGE_EN, GENERIC_MESSAGE_ES};
pub use status::status_to_error_kind;
pub use validation::{ensure_items_array, ITEMS_SHAPE_MESSAGE};

/// Default deadline for a single request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;
