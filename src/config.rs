//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::endpoint::{EndpointResolver, API_URL_ENV, CODESPACE_ENV};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Explicit base URL; falls back to `http://localhost:8000`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Codespaces workspace name; wins over `base_url`
    #[serde(default)]
    pub codespace_name: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            codespace_name: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn resolver(&self) -> EndpointResolver {
        EndpointResolver::new(self.codespace_name.clone(), self.base_url.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Development backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Wrap list responses in a `{count, next, previous, results}` envelope
    #[serde(default = "default_paginate")]
    pub paginate: bool,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_paginate() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            paginate: default_paginate(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here: subscribers are configured from the result,
    /// so call [`LoadedConfig::report`] once tracing is initialized.
    pub fn load_default() -> LoadedConfig {
        Self::load_first(default_paths())
    }

    /// Load the first readable file in `paths`, skipping broken ones
    fn load_first(paths: impl IntoIterator<Item = PathBuf>) -> LoadedConfig {
        let mut skipped = Vec::new();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_with_env(&path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(name) = var(CODESPACE_ENV) {
            self.api.codespace_name = Some(name);
        }
        if let Some(url) = var(API_URL_ENV) {
            self.api.base_url = Some(url);
        }
        if let Some(secs) = var("OCTOFIT_REQUEST_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.api.request_timeout_secs = secs;
        }

        // Server overrides
        if let Some(host) = var("OCTOFIT_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("OCTOFIT_SERVER_PORT").and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Some(paginate) = var("OCTOFIT_SERVER_PAGINATE").and_then(|s| s.parse().ok()) {
            self.server.paginate = paginate;
        }

        // Logging overrides
        if let Some(level) = var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
        Some(PathBuf::from("./octofit.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// A config together with where it came from and the files that failed
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub skipped: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Wrap a config loaded from an explicit path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::load_with_env(path)?,
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        })
    }

    /// Log the outcome of loading. Must run after `init_tracing`.
    pub fn report(&self) {
        for error in &self.skipped {
            tracing::warn!("Skipped config file: {}", error);
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
    r#"# OctoFit Tracker Configuration
#
# Environment variables override these settings:
# - CODESPACE_NAME
# - OCTOFIT_API_URL
# - OCTOFIT_REQUEST_TIMEOUT_SECS
# - OCTOFIT_SERVER_HOST
# - OCTOFIT_SERVER_PORT
# - OCTOFIT_SERVER_PAGINATE
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[api]
# Backend base URL (used when no Codespaces name is set)
# base_url = "http://localhost:8000"

# GitHub Codespaces workspace name; resolves to https://<name>-8000.app.github.dev
# codespace_name = ""

# Request timeout in seconds
request_timeout_secs = 30

[server]
# Development backend host
host = "0.0.0.0"

# Development backend port
port = 8000

# Wrap list responses in {count, next, previous, results}
paginate = true

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
