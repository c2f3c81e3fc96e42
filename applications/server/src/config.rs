/// Server configuration
use crate::error::{Result, ServerError};
use crate::services::activities::{ONSLAUGHT_LEGEND_HASHES, ONSLAUGHT_NORMAL_HASHES};
use bungie_client::{ActivityHistoryQuery, BungieConfig, DEFAULT_API_ROOT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the Bungie application API key.
pub const API_KEY_ENV: &str = "BUNGIE_API_KEY";

/// Largest page the activity history endpoint serves.
pub const MAX_ACTIVITY_COUNT: u32 = 250;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_bungie")]
    pub bungie: BungieSettings,

    #[serde(default = "default_activities")]
    pub activities: ActivitySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BungieSettings {
    #[serde(default = "default_api_root")]
    pub api_root: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActivitySettings {
    /// `DestinyActivityModeType` passed to the history endpoint
    #[serde(default = "default_mode")]
    pub mode: i32,

    #[serde(default = "default_count")]
    pub count: u32,

    #[serde(default = "default_normal_hashes")]
    pub normal_hashes: Vec<u32>,

    #[serde(default = "default_legend_hashes")]
    pub legend_hashes: Vec<u32>,
}

impl BungieSettings {
    /// Client configuration for these settings.
    pub fn client_config(&self) -> BungieConfig {
        BungieConfig::new(self.api_key.clone())
            .with_api_root(self.api_root.clone())
            .with_timeouts(
                Duration::from_secs(self.timeout_secs),
                Duration::from_secs(self.connect_timeout_secs),
            )
    }
}

impl ActivitySettings {
    /// History query for the first page of these settings.
    pub fn query(&self) -> ActivityHistoryQuery {
        ActivityHistoryQuery {
            mode: self.mode,
            count: self.count,
            page: 0,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from the given file (or `config.toml`) and environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        // Override with environment variables (ONSLAUGHT_SERVER__PORT, ...)
        settings = settings.add_source(
            config::Environment::with_prefix("ONSLAUGHT")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("activities.normal_hashes")
                .with_list_parse_key("activities.legend_hashes")
                .try_parsing(true),
        );

        settings = settings
            .set_override_option("bungie.api_key", std::env::var(API_KEY_ENV).ok())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.bungie.api_key.trim().is_empty() {
            return Err(ServerError::Config(format!(
                "Bungie API key is required (set {})",
                API_KEY_ENV
            )));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.activities.count == 0 || self.activities.count > MAX_ACTIVITY_COUNT {
            return Err(ServerError::Config(format!(
                "Activity count must be between 1 and {}",
                MAX_ACTIVITY_COUNT
            )));
        }

        if self.activities.normal_hashes.is_empty() && self.activities.legend_hashes.is_empty() {
            return Err(ServerError::Config(
                "At least one activity hash must be allowed".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_bungie() -> BungieSettings {
    BungieSettings {
        api_root: default_api_root(),
        api_key: String::new(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_activities() -> ActivitySettings {
    ActivitySettings {
        mode: default_mode(),
        count: default_count(),
        normal_hashes: default_normal_hashes(),
        legend_hashes: default_legend_hashes(),
    }
}

fn default_mode() -> i32 {
    // AllPvE
    7
}

fn default_count() -> u32 {
    MAX_ACTIVITY_COUNT
}

fn default_normal_hashes() -> Vec<u32> {
    ONSLAUGHT_NORMAL_HASHES.to_vec()
}

fn default_legend_hashes() -> Vec<u32> {
    ONSLAUGHT_LEGEND_HASHES.to_vec()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            bungie: default_bungie(),
            activities: default_activities(),
        }
    }
}
