//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for tourdesk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Agent generation settings
    pub agent: AgentConfig,
    /// Azure OpenAI settings
    pub azure: AzureConfig,
    /// Static dataset settings
    pub data: DataConfig,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Session cache settings
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Agent generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum tokens per completion
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tool-calling iterations per turn
    pub max_tool_iterations: u32,
    /// Number of history messages rebuilt into each LLM call
    pub history_window: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
            max_tool_iterations: 8,
            history_window: 50,
        }
    }
}

/// Azure OpenAI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    /// Resource endpoint, e.g. https://myresource.cognitiveservices.azure.com/
    #[serde(default)]
    pub endpoint: String,
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Deployment name (the model alias configured on the resource)
    #[serde(default = "default_deployment")]
    pub deployment: String,
}

fn default_api_version() -> String {
    "2024-12-01-preview".to_string()
}

fn default_deployment() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            api_version: default_api_version(),
            deployment: default_deployment(),
        }
    }
}

/// Static dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding package.json, availabilities.json, accommodations.json
    #[serde(default = "default_data_dir")]
    pub dir: String,
    /// Expected package id; the loader warns when the dataset disagrees
    #[serde(default)]
    pub package_id: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            package_id: String::new(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the chat UI assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "tourdesk-server/static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Session cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum idle seconds before a session's agent is evicted
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Interval of the periodic eviction sweep
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_ttl_secs() -> u64 {
    3600
}

fn default_sweep_interval_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Module-specific overrides
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: default_log_dir(),
            overrides: HashMap::new(),
        }
    }
}
