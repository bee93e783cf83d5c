use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api/v2/recipes";
pub const DEFAULT_STORAGE_KEY: &str = "saved-recipes";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Number of search results shown per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Where saved recipes are kept
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Configuration for the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the recipes collection
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as the `key` query parameter (needed for uploads)
    pub api_key: Option<String>,
    /// Request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

/// Configuration for saved recipe storage
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the storage files, platform data dir when unset
    pub dir: Option<PathBuf>,
    /// Key the saved recipes are stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl StorageConfig {
    /// Resolve the storage directory, falling back to `<data dir>/forkify`
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("forkify")
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_storage_key(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            items_per_page: default_items_per_page(),
            storage: StorageConfig::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_items_per_page() -> usize {
    10
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl AppConfig {
    /// Load configuration from `forkify.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration, reading `path` instead of `forkify.toml` when given
///
/// An explicit path must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("forkify").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: FORKIFY__API__BASE_URL
        .add_source(
            Environment::with_prefix("FORKIFY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
