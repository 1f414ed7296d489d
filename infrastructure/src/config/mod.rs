//! Configuration file loading for kafka-chatbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `AWS_*` and `CONFLUENT_*` variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatbot.toml` or `./.chatbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/kafka-chatbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAwsConfig, FileConfig, FileModelConfig, FileOutputConfig,
    FileReplConfig, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
