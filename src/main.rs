use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analytics;
mod cli;
mod config;
mod error;
mod maintenance;
mod store;

pub mod api;
pub mod auth;
pub mod ui;

use cli::{Cli, Commands, UsersAction};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Serve { host, port } => cli::commands::serve(&host, port).await,
        Commands::Seed { quick } => cli::seed::run_seed(quick).await,
        Commands::Users { action } => match action {
            UsersAction::List { format } => cli::commands::users_list(format).await,
        },
        Commands::Maintenance { action } => cli::commands::maintenance(action).await,
    }
}
