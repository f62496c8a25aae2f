//! CLI command definitions.

pub mod devices;
pub mod routes;
pub mod users;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use inventario_core::http::DEFAULT_TIMEOUT_MS;
use inventario_core::Locale;

use crate::config::{Config, DEFAULT_BASE_URL};

/// CLI client for the inventario API.
#[derive(Debug, Parser)]
#[command(name = "inventario-client")]
#[command(about = "CLI client for the inventario API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "INVENTARIO_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request deadline in milliseconds.
    #[arg(long, env = "INVENTARIO_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Language for error messages (es, en).
    #[arg(long, env = "INVENTARIO_LOCALE", default_value = "es")]
    pub locale: Locale,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration resolved from flags and environment.
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
            locale: self.locale,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User lookup.
    Users(users::UsersCommand),
    /// Device lookup.
    Devices(devices::DevicesCommand),
    /// Import records from a CSV file.
    Upload {
        /// Path to the CSV file.
        file: PathBuf,
    },
    /// GET an arbitrary API path and print the JSON response.
    Get {
        /// Path relative to the base URL (e.g. /api/usuarios).
        path: String,
    },
    /// Inspect the application's route table.
    Routes(routes::RoutesCommand),
}
