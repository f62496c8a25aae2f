//! Route table CLI commands.

use clap::{Parser, Subcommand};

/// Route table commands.
#[derive(Debug, Parser)]
pub struct RoutesCommand {
    #[command(subcommand)]
    pub action: RoutesAction,
}

/// Available route table actions.
#[derive(Debug, Subcommand)]
pub enum RoutesAction {
    /// List every path and the page mounted at it.
    List,
    /// Show which page a path resolves to.
    Resolve {
        /// Path to resolve (e.g. /usuarios).
        path: String,
    },
}
