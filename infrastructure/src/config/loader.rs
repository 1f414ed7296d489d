//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
    value::{Dict, Value},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "kafka-chatbot";
const PROJECT_FILES: [&str; 2] = ["chatbot.toml", ".chatbot.toml"];

const AWS_ENV_KEYS: [&str; 5] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_DEFAULT_REGION",
    "AWS_PROFILE",
];

const CONFLUENT_ENV_KEYS: [&str; 10] = [
    "CONFLUENT_API_KEY",
    "CONFLUENT_API_SECRET",
    "CONFLUENT_ENVIRONMENT_ID",
    "CONFLUENT_ORG_ID",
    "CONFLUENT_POOL_ID",
    "CONFLUENT_PRINCIPAL",
    "CONFLUENT_CATALOG",
    "CONFLUENT_DATABASE",
    "CONFLUENT_CLOUD_PROVIDER",
    "CONFLUENT_CLOUD_REGION",
];

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Invalid(Box::new(err))
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`AWS_*`, `CONFLUENT_*`)
    /// 2. Explicit config path (if provided, it must exist)
    /// 3. Project root: `./chatbot.toml` or `./.chatbot.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/kafka-chatbot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut files = Vec::new();

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                files.push(global_path);
            }
        }

        // Add project-level config file
        if let Some(path) = Self::project_config_path() {
            files.push(path);
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.clone()));
            }
            files.push(path.clone());
        }

        Self::merge_sources(&files, std::env::vars())
    }

    /// Load defaults plus environment only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, ConfigError> {
        Self::merge_sources(&[], std::env::vars())
    }

    /// Defaults, then `files` in order, then the recognised environment variables.
    fn merge_sources<I>(files: &[PathBuf], vars: I) -> Result<FileConfig, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in files {
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment
            .merge(Serialized::defaults(env_overrides(vars)))
            .extract()?)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/kafka-chatbot/config.toml if set,
    /// otherwise falls back to ~/.config/kafka-chatbot/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default readline history location
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Expand a leading `~/` in a configured path.
    pub fn expand_home(path: &str) -> PathBuf {
        match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => Path::new(path).to_path_buf(),
        }
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] AWS_* and CONFLUENT_* variables (.env is loaded first)");

        if let Some(path) = explicit {
            let tag = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", tag, path.display());
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./chatbot.toml or ./.chatbot.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

/// Recognised environment variables nested under `aws` / `confluent`.
///
/// Values stay strings: ids, cluster names and secrets may look like
/// numbers or booleans. Blank values are skipped.
fn env_overrides<I>(vars: I) -> Dict
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut aws = Dict::new();
    let mut confluent = Dict::new();

    for (key, value) in vars {
        if value.trim().is_empty() {
            continue;
        }
        let key = key.to_ascii_uppercase();
        if AWS_ENV_KEYS.contains(&key.as_str()) {
            aws.insert(aws_env_key(&key), Value::from(value));
        } else if CONFLUENT_ENV_KEYS.contains(&key.as_str()) {
            confluent.insert(confluent_env_key(&key), Value::from(value));
        }
    }

    let mut dict = Dict::new();
    if !aws.is_empty() {
        dict.insert("aws".to_string(), Value::from(aws));
    }
    if !confluent.is_empty() {
        dict.insert("confluent".to_string(), Value::from(confluent));
    }
    dict
}

/// `AWS_DEFAULT_REGION` → `region`, `AWS_ACCESS_KEY_ID` → `access_key_id`, ...
fn aws_env_key(key: &str) -> String {
    let name = key.to_ascii_lowercase();
    match name.as_str() {
        "aws_default_region" => "region".to_string(),
        other => other.strip_prefix("aws_").unwrap_or(other).to_string(),
    }
}

/// `CONFLUENT_POOL_ID` → `compute_pool`, `CONFLUENT_API_KEY` → `api_key`, ...
fn confluent_env_key(key: &str) -> String {
    let name = key.to_ascii_lowercase();
    match name.as_str() {
        "confluent_pool_id" => "compute_pool".to_string(),
        other => other.strip_prefix("confluent_").unwrap_or(other).to_string(),
    }
}
