//! Static route table of the single-page application.
//!
//! The table only answers "which page lives at this path"; dispatching,
//! rendering, and not-found fallbacks belong to the router that consumes it.

mod table;
mod types;

pub use table::{routes, RouteTable};
pub use types::Page;
