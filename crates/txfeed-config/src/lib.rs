//! Configuration management for txfeed
//!
//! This module handles loading, validation, and management of
//! txfeed configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Remote endpoints backing the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme and authority of the remote functions host
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transaction list endpoint (GET)
    #[serde(default = "default_transactions_path")]
    pub transactions_path: String,
    /// Create-transaction endpoint (POST)
    #[serde(default = "default_create_path")]
    pub create_path: String,
    /// Summary endpoint (POST)
    #[serde(default = "default_summary_path")]
    pub summary_path: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            transactions_path: default_transactions_path(),
            create_path: default_create_path(),
            summary_path: default_summary_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8888".to_string()
}

fn default_transactions_path() -> String {
    "/.netlify/functions/getTransactions".to_string()
}

fn default_create_path() -> String {
    "/.netlify/functions/createTransaction".to_string()
}

fn default_summary_path() -> String {
    "/.netlify/functions/generateSummary".to_string()
}

impl UpstreamConfig {
    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn transactions_url(&self) -> String {
        self.endpoint(&self.transactions_path)
    }

    pub fn create_url(&self) -> String {
        self.endpoint(&self.create_path)
    }

    pub fn summary_url(&self) -> String {
        self.endpoint(&self.summary_path)
    }
}

/// Feed display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum rows rendered per pass
    #[serde(default = "default_render_limit")]
    pub render_limit: usize,
    /// Number of synthetic transactions used when the list endpoint fails
    #[serde(default = "default_fallback_count")]
    pub fallback_count: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            render_limit: default_render_limit(),
            fallback_count: default_fallback_count(),
        }
    }
}

fn default_render_limit() -> usize {
    12
}

fn default_fallback_count() -> usize {
    4
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote endpoint settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Feed display settings
    #[serde(default)]
    pub feed: FeedConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to built-in defaults when the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        let base = &self.upstream.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "upstream.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        for (field, value) in [
            ("upstream.transactions_path", &self.upstream.transactions_path),
            ("upstream.create_path", &self.upstream.create_path),
            ("upstream.summary_path", &self.upstream.summary_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "Endpoint paths must start with '/'".to_string(),
                });
            }
        }

        if self.feed.render_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.render_limit".to_string(),
                reason: "Render limit must be greater than 0".to_string(),
            });
        }

        if self.feed.fallback_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.fallback_count".to_string(),
                reason: "Fallback count must be greater than 0".to_string(),
            });
        }

        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level: {}", self.logging.level),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Default config file name looked up by the binary
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}
