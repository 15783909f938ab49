//! CLI interface for the AlgoForge backend

pub mod commands;
mod output;
pub mod seed;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "algoforge")]
#[command(version = "1.0.0")]
#[command(about = "Marketing site and admin backend for AlgoForge", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new algoforge.toml configuration file
    Init,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "4100")]
        port: u16,
    },

    /// Interactive first-run seeding (super-admin account, demo data)
    Seed {
        /// Skip interactive prompts and seed demo data with defaults
        #[arg(short, long)]
        quick: bool,
    },

    /// Inspect user accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Control maintenance mode locally
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceAction,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all user accounts
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum MaintenanceAction {
    /// Enable maintenance mode
    Enable,

    /// Disable maintenance mode
    Disable,

    /// Show current maintenance state
    Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
