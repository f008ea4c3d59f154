use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub sample_data: SampleDataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Live sales feed simulation
#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    /// Maximum number of sales records kept once the feed is running
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Default threshold for the low-stock filter when a product has none
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

/// Fixed seed makes the generated catalog history and the feed reproducible
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SampleDataConfig {
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: default_interval_seconds(),
            window_size: default_window_size(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_interval_seconds() -> u64 {
    60
}

fn default_window_size() -> usize {
    30
}

fn default_low_stock_threshold() -> u32 {
    contracts::domain::a001_product::LOW_STOCK_LIMIT
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3002
uploads_dir = "uploads"
max_upload_bytes = 10485760

[feed]
enabled = true
interval_seconds = 60
window_size = 30

[inventory]
low_stock_threshold = 10

[sample_data]
# seed = 42
"#;

impl Config {
    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be greater than 0");
        }
        if self.feed.interval_seconds == 0 {
            anyhow::bail!("feed.interval_seconds must be greater than 0");
        }
        if self.feed.window_size == 0 {
            anyhow::bail!("feed.window_size must be greater than 0");
        }
        Ok(())
    }

    /// `PORT` from the environment wins over the file, like most mock servers.
    fn apply_env_overrides(&mut self) {
        if let Some(port) = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3002,
                uploads_dir: default_uploads_dir(),
                max_upload_bytes: default_max_upload_bytes(),
            },
            feed: FeedConfig::default(),
            inventory: InventoryConfig::default(),
            sample_data: SampleDataConfig::default(),
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves the uploads directory; relative paths are taken from the working directory
pub fn get_uploads_path(config: &Config) -> PathBuf {
    let path = Path::new(&config.server.uploads_dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
