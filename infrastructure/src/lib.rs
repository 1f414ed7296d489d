//! Infrastructure layer for kafka-chatbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod bedrock;
pub mod config;

// Re-export commonly used types
pub use bedrock::{BedrockAuthenticator, BedrockClient};
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAwsConfig, FileConfig, FileModelConfig, FileOutputConfig,
    FileReplConfig, Severity,
};
