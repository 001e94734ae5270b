//! Configuration System
//!
//! Handles loading configuration from files and the environment.
//! Supports a TOML config file; `PREPBOT_API_URL` overrides the backend URL.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::{BackendConfig, DEFAULT_API_URL};

/// Environment variable that overrides the backend base URL
pub const API_URL_ENV: &str = "PREPBOT_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSection,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Question-answering backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means requests may wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl BackendSection {
    /// Client configuration for this section
    pub fn client_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Local UI host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5173
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page behaviour toggles
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show the upload control and accept `POST /upload`
    #[serde(default)]
    pub upload_enabled: bool,

    #[serde(default = "default_sidebar_visible")]
    pub sidebar_visible: bool,
}

fn default_sidebar_visible() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            upload_enabled: false,
            sidebar_visible: default_sidebar_visible(),
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
    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_directive(&self) -> String {
        format!("prepbot={},tower_http=debug", self.level)
    }

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

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let discovery = Self::discover();
        discovery.log();
        discovery.config
    }

    /// Search the default locations without logging, so the caller can
    /// report the outcome once a subscriber is installed
    pub fn discover() -> Discovery {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("prepbot").join("config.toml")),
            Some(PathBuf::from("./prepbot.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover_in(&config_paths)
    }

    /// First loadable file among `paths`, in order
    pub fn discover_in(paths: &[PathBuf]) -> Discovery {
        let mut skipped = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_with_env(path) {
                Ok(config) => {
                    return Discovery {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        Discovery {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.backend.base_url = url;
            }
        }
    }
}

/// Outcome of searching the default config locations
#[derive(Debug)]
pub struct Discovery {
    pub config: Config,
    /// File the config was read from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl Discovery {
    pub fn log(&self) {
        for e in &self.skipped {
            tracing::warn!("{}", e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Prep Bot Configuration
#
# PREPBOT_API_URL overrides backend.base_url.

[backend]
# Question-answering backend
base_url = "https://prep-bot-backend.onrender.com"

# Request timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 60

[server]
# Address the page is served on
host = "127.0.0.1"
port = 5173

[ui]
# Show the document upload control
upload_enabled = false

# Start with the sidebar open
sidebar_visible = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "https://prep-bot-backend.onrender.com");
        assert!(config.backend.request_timeout_secs.is_none());
        assert_eq!(config.server.addr(), "127.0.0.1:5173");
        assert!(!config.ui.upload_enabled);
        assert!(config.ui.sidebar_visible);
        assert_eq!(config.logging.default_directive(), "prepbot=info,tower_http=debug");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config(), Path::new("generated")).unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_API_URL);
        assert_eq!(config.server.port, 5173);
        assert!(!config.ui.upload_enabled);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nbase_url = \"http://localhost:8000\"\nrequest_timeout_secs = 30\n\n[ui]\nupload_enabled = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert!(config.ui.upload_enabled);
        assert!(config.ui.sidebar_visible);
        assert_eq!(
            config.backend.client_config().request_timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend\nbase_url = 1").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_skips_broken_file() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[server\nport = ").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[server]\nport = 8080").unwrap();

        let paths = vec![
            PathBuf::from("/nonexistent/prepbot.toml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let discovery = Config::discover_in(&paths);

        assert_eq!(discovery.source.as_deref(), Some(good.path()));
        assert_eq!(discovery.config.server.port, 8080);
        assert_eq!(discovery.skipped.len(), 1);
        assert!(matches!(discovery.skipped[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let discovery = Config::discover_in(&[PathBuf::from("/nonexistent/prepbot.toml")]);
        assert!(discovery.source.is_none());
        assert!(discovery.skipped.is_empty());
        assert_eq!(discovery.config.server.port, 5173);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/prepbot.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
