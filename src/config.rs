//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\fonos\config.toml
//! - macOS: ~/Library/Application Support/fonos/config.toml
//! - Linux: ~/.config/fonos/config.toml
//!
//! The config file is human-readable and editable. Credentials can also be
//! supplied via `FONOS_*` environment variables, which take precedence over
//! the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Result cache settings
    pub cache: CacheConfig,

    /// Outbound HTTP settings
    pub network: NetworkConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Jamendo application client id
    pub jamendo_client_id: Option<String>,

    /// Last.fm API key for metadata enhancement
    pub lastfm_api_key: Option<String>,

    /// Base URL of a self-hosted ytmusicapi bridge
    pub ytmusic_base_url: Option<String>,
}

/// Result cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live for cached upstream results, in seconds
    pub ttl_secs: u64,

    /// Maximum entries per cache before the oldest is evicted
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 1200, // 20 minutes
            capacity: 256,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Outbound HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fonos"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk, then apply environment overrides.
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let mut config = load_file();
    apply_env_overrides(&mut config);
    config
}

fn load_file() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Environment variables beat the config file, so containerized deployments
/// never need to write one.
fn apply_env_overrides(config: &mut Config) {
    let non_empty = |v: String| (!v.is_empty()).then_some(v);

    if let Ok(v) = std::env::var("FONOS_JAMENDO_CLIENT_ID")
        && let Some(v) = non_empty(v)
    {
        config.credentials.jamendo_client_id = Some(v);
    }
    if let Ok(v) = std::env::var("FONOS_LASTFM_API_KEY")
        && let Some(v) = non_empty(v)
    {
        config.credentials.lastfm_api_key = Some(v);
    }
    if let Ok(v) = std::env::var("FONOS_YTMUSIC_API_URL")
        && let Some(v) = non_empty(v)
    {
        config.credentials.ytmusic_base_url = Some(v);
    }
}

// ============================================================================
// Tests
// ============================================================================
