//! inventario_core - Pure building blocks shared by the inventario clients.
//!
//! Everything in this crate is free of I/O: the HTTP error taxonomy and its
//! classification rules, response shape validation, localized user messages,
//! and the static route table of the single-page application.

pub mod http;
pub mod locale;
pub mod routes;

pub use http::{ensure_items_array, message_for_user, HttpError, HttpErrorKind};
pub use locale::{Locale, LocaleError};
pub use routes::{routes, Page, RouteTable};
