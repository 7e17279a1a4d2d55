//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Lower end of the payload range selector (kg)
    #[serde(default)]
    pub slider_min: f64,

    /// Upper end of the payload range selector (kg)
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,

    /// Selector step (kg)
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_heading() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1000.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            slider_min: 0.0,
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Logging is not set up yet when this runs, so the chosen source is
    /// returned alongside the config for the caller to report. A config file
    /// that exists but cannot be read or parsed is an error.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_paths: Vec<PathBuf> = [
            Some(PathBuf::from("./launchdash.toml")),
            dirs::config_dir().map(|p| p.join("launch-dashboard").join("config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first_existing(&config_paths)
    }

    /// Load the first candidate path that exists, else fall back to the environment
    fn load_first_existing(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LAUNCHDASH_DATA") {
            self.dataset.path = PathBuf::from(path);
        }

        // API overrides
        if let Ok(host) = std::env::var("LAUNCHDASH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("LAUNCHDASH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("LAUNCHDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LAUNCHDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launch Dashboard Configuration
#
# Environment variables override these settings:
# - LAUNCHDASH_DATA
# - LAUNCHDASH_API_HOST
# - LAUNCHDASH_API_PORT
# - LAUNCHDASH_LOG_LEVEL
# - LAUNCHDASH_LOG_FORMAT

[dataset]
# CSV file with the launch records
path = "spacex_launch_dash.csv"

[api]
# Server host
host = "127.0.0.1"

# Server port
port = 8050

# Allowed CORS origins (empty = allow any)
cors_origins = []

[dashboard]
# Page heading
heading = "SpaceX Launch Records Dashboard"

# Payload range selector bounds and step (kg)
slider_min = 0.0
slider_max = 10000.0
slider_step = 1000.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.api.addr(), "127.0.0.1:8050");
        assert!(config.api.cors_origins.is_empty());
        assert_eq!(config.dashboard.heading, "SpaceX Launch Records Dashboard");
        assert_eq!(config.dashboard.slider_max, 10_000.0);
        assert_eq!(config.dashboard.slider_step, 1000.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
[api]
port = 9000

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.dashboard.slider_min, 0.0);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[dataset]\npath = \"/data/launches.csv\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("/data/launches.csv"));
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[api]\nport = \"not a number\"\n").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_broken_default_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("launchdash.toml");
        std::fs::write(
            &broken,
            "[api]\nport = \"oops\"\n[dataset]\npath = \"/custom.csv\"\n",
        )
        .unwrap();
        let fallback = dir.path().join("config.toml");
        std::fs::write(&fallback, "[api]\nport = 9000\n").unwrap();

        let err = Config::load_first_existing(&[broken.clone(), fallback]).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, broken),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_config_skips_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("launchdash.toml");
        let present = dir.path().join("config.toml");
        std::fs::write(&present, "[dataset]\npath = \"/custom.csv\"\n").unwrap();

        let (config, source) =
            Config::load_first_existing(&[missing, present.clone()]).unwrap();
        assert_eq!(source, Some(present));
        assert_eq!(config.dataset.path, PathBuf::from("/custom.csv"));

        let (_, source) = Config::load_first_existing(&[dir.path().join("none.toml")]).unwrap();
        assert_eq!(source, None);
    }
}
