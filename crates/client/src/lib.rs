//! inventario_client - HTTP client and CLI for the inventario API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;

#[cfg(test)]
mod test_support;

pub use client::InventarioClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use fetch::{fetch_json, FetchOptions, RequestInit};
