//! Bedrock authenticator
//!
//! Implements `ModelAuthenticator`: turns a credential set into an
//! authenticated [`BedrockClient`].

use super::client::BedrockClient;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use chatbot_application::{AuthError, ClientHandle, ModelAuthenticator};
use chatbot_domain::Credentials;
use std::sync::Arc;
use tracing::{debug, info};

/// Provider name attached to credentials supplied by the user.
const PROVIDER_NAME: &str = "kafka-chatbot";

#[derive(Debug, Clone, Default)]
pub struct BedrockAuthenticator {
    /// AWS profile used when no access key pair is supplied.
    profile: Option<String>,
}

impl BedrockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.trim().is_empty());
        self
    }

    fn loader(region: &str) -> ConfigLoader {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
    }

    /// Resolve the SDK configuration for `credentials`.
    ///
    /// A supplied key pair is used as-is. Without one, the default provider
    /// chain must produce credentials.
    async fn resolve(&self, credentials: &Credentials) -> Result<SdkConfig, AuthError> {
        let region = credentials.resolved_region();

        if credentials.is_partial() {
            return Err(AuthError::PartialCredentials);
        }

        if credentials.has_static_keys() {
            debug!(region = %region, "Using supplied access key pair");
            let static_credentials = aws_credential_types::Credentials::new(
                credentials.access_key.trim(),
                credentials.secret_key.trim(),
                credentials.session_token().map(str::to_string),
                None,
                PROVIDER_NAME,
            );
            return Ok(Self::loader(region)
                .credentials_provider(static_credentials)
                .load()
                .await);
        }

        debug!(region = %region, profile = ?self.profile, "Using default credential chain");
        let mut loader = Self::loader(region);
        if let Some(ref profile) = self.profile {
            loader = loader.profile_name(profile);
        }
        let config = loader.load().await;

        let provider = config.credentials_provider().ok_or_else(|| {
            AuthError::CredentialsUnavailable("no credential provider configured".to_string())
        })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| AuthError::CredentialsUnavailable(e.to_string()))?;

        Ok(config)
    }
}

#[async_trait]
impl ModelAuthenticator for BedrockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<ClientHandle, AuthError> {
        let config = self.resolve(credentials).await?;

        let region = config
            .region()
            .map(|r| r.as_ref().to_string())
            .ok_or_else(|| AuthError::ClientConstruction("no region configured".to_string()))?;

        let client = BedrockClient::from_sdk_config(&config, region.clone());
        info!(region = %region, "Bedrock client initialized");

        Ok(ClientHandle::new(Arc::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_keys_bind_default_region() {
        let creds = Credentials::new("AKIAEXAMPLE", "secretEXAMPLE", "", "");
        let handle = BedrockAuthenticator::new()
            .authenticate(&creds)
            .await
            .unwrap();
        assert_eq!(handle.region(), "us-west-2");
    }

    #[tokio::test]
    async fn test_static_keys_keep_explicit_region() {
        let creds = Credentials::new("AKIAEXAMPLE", "secretEXAMPLE", "token", "eu-central-1");
        let handle = BedrockAuthenticator::new()
            .authenticate(&creds)
            .await
            .unwrap();
        assert_eq!(handle.region(), "eu-central-1");
    }

    #[tokio::test]
    async fn test_partial_credentials_rejected() {
        let creds = Credentials::new("AKIAEXAMPLE", "", "", "us-west-2");
        let err = BedrockAuthenticator::new()
            .authenticate(&creds)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PartialCredentials));
    }

    #[test]
    fn test_blank_profile_is_ignored() {
        let auth = BedrockAuthenticator::new().with_profile(Some("  ".to_string()));
        assert!(auth.profile.is_none());
        let auth = BedrockAuthenticator::new().with_profile(Some("dev".to_string()));
        assert_eq!(auth.profile.as_deref(), Some("dev"));
    }
}
