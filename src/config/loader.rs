//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "algoforge.toml";

/// Load configuration from algoforge.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Persist configuration back to algoforge.toml
pub fn save_config(config: &Config) -> Result<()> {
    let config_path = find_config_file()?;
    let content =
        toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(config_path, content)?;
    Ok(())
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# AlgoForge Configuration

[server]
host = "0.0.0.0"
port = 4100
public_dir = "./public"

[auth]
jwt_secret = "${ALGOFORGE_JWT_SECRET:-algoforge-secret-key-change-in-production}"
token_ttl_hours = 24
super_admin_ttl_hours = 1
secure_cookies = false  # enable outside local development

[storage]
data_file = "./data/algoforge.json"
upload_dir = "./data/uploads"

[maintenance]
marker_path = "./data/.maintenance"
control_key = "${ALGOFORGE_MAINTENANCE_KEY:-change-me}"

# Third-party reporting API (optional)
# [analytics]
# base_url = "https://reports.example.com/v1"
# api_key = "${ALGOFORGE_ANALYTICS_KEY}"
"#
}
