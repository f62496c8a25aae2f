//! Device CLI commands.

use clap::{Parser, Subcommand};

/// Device lookup commands.
#[derive(Debug, Parser)]
pub struct DevicesCommand {
    #[command(subcommand)]
    pub action: DevicesAction,
}

/// Available device actions.
#[derive(Debug, Subcommand)]
pub enum DevicesAction {
    /// List all devices.
    List,
}
