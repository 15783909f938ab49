//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::cli::{error, info, print_user_table, success, warn, MaintenanceAction, OutputFormat};
use crate::config::{self, Config};
use crate::maintenance::MaintenanceFlag;
use crate::store::Store;

/// Initialize a new algoforge.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("algoforge.toml");

    if config_path.exists() {
        warn("algoforge.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created algoforge.toml");
    info("Edit the configuration file and run 'algoforge seed' to create the first account");

    Ok(())
}

/// Start the HTTP API server
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let config = load_config()?;

    info(&format!("Starting server on {}:{}", host, port));

    crate::api::run_server(config, host, port).await?;

    Ok(())
}

/// List user accounts
pub async fn users_list(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let store = Store::open(&config.storage.data_file).await?;

    let users = store.list_users().await;

    match format {
        OutputFormat::Table => {
            print_user_table(&users);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&users)?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&users)?;
            println!("{}", yaml);
        }
    }

    Ok(())
}

/// Toggle or inspect maintenance mode via the local marker file
pub async fn maintenance(action: MaintenanceAction) -> Result<()> {
    let config = load_config()?;
    let flag = MaintenanceFlag::new(
        &config.maintenance.marker_path,
        config.maintenance.control_key.clone(),
    );

    match action {
        MaintenanceAction::Enable => {
            flag.enable()?;
            success("Maintenance mode enabled");
        }
        MaintenanceAction::Disable => {
            flag.disable()?;
            success("Maintenance mode disabled");
        }
        MaintenanceAction::Status => {
            if flag.is_enabled() {
                match flag.enabled_since() {
                    Some(since) => warn(&format!("Maintenance mode is ON (since {})", since)),
                    None => warn("Maintenance mode is ON"),
                }
            } else {
                success("Maintenance mode is off");
            }
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    match config::load_config() {
        Ok(config) => Ok(config),
        Err(e) => {
            error(&e.to_string());
            Err(e.into())
        }
    }
}
