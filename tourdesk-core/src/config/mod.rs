//! Configuration management
//!
//! Configuration is merged from `config.json` in the config directory and
//! environment overrides, then validated. Azure credentials are normally
//! supplied through the `AZURE_*` environment aliases.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::ConfigLoader;
pub use schema::{
    AgentConfig, AzureConfig, CacheConfig, Config, DataConfig, LoggingConfig, ServerConfig,
};
