//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod aws;
mod model;
mod output;
mod repl;

pub use aws::FileAwsConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use chatbot_domain::{ConfluentSettings, Credentials, ModelId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while validating configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// AWS credentials and region
    pub aws: FileAwsConfig,
    /// Model id, generation parameters and fallback
    pub model: FileModelConfig,
    /// Confluent Cloud connection parameters
    pub confluent: ConfluentSettings,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn credentials(&self) -> Credentials {
        self.aws.to_credentials()
    }

    /// Apply command-line overrides, which take precedence over every other source.
    pub fn apply_overrides(&mut self, region: Option<&str>, model_id: Option<&str>) {
        if let Some(region) = region {
            self.aws.region = region.to_string();
        }
        if let Some(model_id) = model_id {
            let Ok(model) = model_id.parse::<ModelId>();
            self.model.id = model;
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Credentials
        if self.credentials().is_partial() {
            issues.push(ConfigIssue::error(
                "aws",
                "access_key_id and secret_access_key must be set together",
            ));
        }

        // 2. Generation parameters
        let params = &self.model.params;
        if params.max_tokens_to_sample == 0 {
            issues.push(ConfigIssue::error(
                "model.params.max_tokens_to_sample",
                "must be greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&params.temperature) {
            issues.push(ConfigIssue::warning(
                "model.params.temperature",
                format!("{} is outside 0.0..=1.0", params.temperature),
            ));
        }
        if !(0.0..=1.0).contains(&params.top_p) {
            issues.push(ConfigIssue::warning(
                "model.params.top_p",
                format!("{} is outside 0.0..=1.0", params.top_p),
            ));
        }
        if params.stop_sequences.is_empty() {
            issues.push(ConfigIssue::warning(
                "model.params.stop_sequences",
                "no stop sequence; the model may continue past its own turn",
            ));
        }

        // 3. Fallback
        if self.model.fallback.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "model.fallback",
                "empty fallback; failed calls will print nothing",
            ));
        }

        issues
    }
}
