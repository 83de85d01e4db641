use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Result output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the embedded defaults, an optional file and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("ZENSEARCH_CONFIG")
            .unwrap_or_else(|_| "config/zensearch.toml".to_string());

        Self::load_from(&config_path)
    }

    /// Same as [`Config::load`] with an explicit override file
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(config_path).required(false))
            // Override with environment variables (prefix: ZENSEARCH__)
            .add_source(
                config::Environment::with_prefix("ZENSEARCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of user records
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,

    /// JSON array of organization records
    #[serde(default = "default_organizations_path")]
    pub organizations_path: PathBuf,

    /// JSON array of ticket records
    #[serde(default = "default_tickets_path")]
    pub tickets_path: PathBuf,
}

impl DataConfig {
    /// `users.json`, `organizations.json` and `tickets.json` inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            users_path: dir.join("users.json"),
            organizations_path: dir.join("organizations.json"),
            tickets_path: dir.join("tickets.json"),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            organizations_path: default_organizations_path(),
            tickets_path: default_tickets_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent result JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

// Default value functions
fn default_users_path() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_organizations_path() -> PathBuf {
    PathBuf::from("data/organizations.json")
}

fn default_tickets_path() -> PathBuf {
    PathBuf::from("data/tickets.json")
}

fn default_log_level() -> String {
    "zensearch=warn".to_string()
}

fn default_true() -> bool {
    true
}
