//! Confluent Cloud connection settings
//!
//! Collected alongside the model credentials and carried as opaque strings;
//! nothing in this crate connects to Confluent.

use crate::core::error::DomainError;
use crate::core::string::redact;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Cloud hosting the Confluent cluster
///
/// Parsed case-insensitively, so `CONFLUENT_CLOUD_PROVIDER=AWS` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudProvider {
    Azure,
    #[default]
    Aws,
    Gcp,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Azure => "azure",
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CloudProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "azure" => Ok(CloudProvider::Azure),
            "aws" => Ok(CloudProvider::Aws),
            "gcp" => Ok(CloudProvider::Gcp),
            other => Err(DomainError::UnknownCloudProvider(other.to_string())),
        }
    }
}

impl Serialize for CloudProvider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CloudProvider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Flink / Kafka connection parameters
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluentSettings {
    pub api_key: String,
    pub api_secret: String,
    pub environment_id: String,
    pub org_id: String,
    /// Flink compute pool id
    pub compute_pool: String,
    pub principal: String,
    /// Flink environment name
    pub catalog: String,
    /// Kafka cluster name
    pub database: String,
    pub cloud_provider: CloudProvider,
    pub cloud_region: String,
}

impl Default for ConfluentSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            environment_id: String::new(),
            org_id: String::new(),
            compute_pool: String::new(),
            principal: String::new(),
            catalog: String::new(),
            database: String::new(),
            cloud_provider: CloudProvider::default(),
            cloud_region: "us-west-2".to_string(),
        }
    }
}

impl ConfluentSettings {
    /// Labelled fields for display, with the API secret masked.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Flink API Key", self.api_key.clone()),
            ("Flink API Secret", redact(&self.api_secret)),
            ("Environment ID", self.environment_id.clone()),
            ("Organization ID", self.org_id.clone()),
            ("Flink Compute Pool", self.compute_pool.clone()),
            ("Flink Principal", self.principal.clone()),
            ("Flink Environment Name", self.catalog.clone()),
            ("Kafka Cluster Name (Flink DB)", self.database.clone()),
            ("Cloud provider", self.cloud_provider.to_string()),
            ("Cloud provider region", self.cloud_region.clone()),
        ]
    }

    /// Names of fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.display_fields()
            .into_iter()
            .filter(|(name, value)| *name != "Flink API Secret" && value.trim().is_empty())
            .map(|(name, _)| name)
            .chain(self.api_secret.is_empty().then_some("Flink API Secret"))
            .collect()
    }
}

impl fmt::Debug for ConfluentSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfluentSettings")
            .field("api_key", &self.api_key)
            .field("api_secret", &redact(&self.api_secret))
            .field("environment_id", &self.environment_id)
            .field("org_id", &self.org_id)
            .field("compute_pool", &self.compute_pool)
            .field("principal", &self.principal)
            .field("catalog", &self.catalog)
            .field("database", &self.database)
            .field("cloud_provider", &self.cloud_provider)
            .field("cloud_region", &self.cloud_region)
            .finish()
    }
}
