//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub maintenance: MaintenanceConfig,

    #[serde(default)]
    pub analytics: Option<AnalyticsConfig>,
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static public assets served at the site root
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4100
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

/// Authentication and session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Session lifetime for student/admin logins, in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// Session lifetime for the super-admin login path, in hours
    #[serde(default = "default_super_admin_ttl_hours")]
    pub super_admin_ttl_hours: i64,

    /// Mark session cookies Secure (disable for local development)
    #[serde(default)]
    pub secure_cookies: bool,
}

fn default_jwt_secret() -> String {
    "algoforge-secret-key-change-in-production".to_string()
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_super_admin_ttl_hours() -> i64 {
    1
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
            super_admin_ttl_hours: default_super_admin_ttl_hours(),
            secure_cookies: false,
        }
    }
}

/// Document store and upload locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the document store file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory for uploaded resumes
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/algoforge.json")
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./data/uploads")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upload_dir: default_upload_dir(),
        }
    }
}

/// Maintenance mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Marker file whose presence enables maintenance mode
    #[serde(default = "default_marker_path")]
    pub marker_path: PathBuf,

    /// Shared secret for the maintenance control endpoint.
    /// Compared by exact string match.
    #[serde(default = "default_control_key")]
    pub control_key: String,
}

fn default_marker_path() -> PathBuf {
    PathBuf::from("./data/.maintenance")
}

fn default_control_key() -> String {
    "change-me".to_string()
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            marker_path: default_marker_path(),
            control_key: default_control_key(),
        }
    }
}

/// Third-party reporting API (optional; analytics routes 502 without it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub base_url: String,

    pub api_key: String,
}
