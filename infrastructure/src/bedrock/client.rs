//! Bedrock model client
//!
//! Implements the `ModelClient` port on top of the Bedrock runtime
//! `InvokeModel` API and the control-plane `ListFoundationModels` API.
//! Each call is a single attempt; the SDK retry layer is disabled by the
//! authenticator.

use super::types;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_smithy_types::Blob;
use chatbot_application::{InvocationError, ModelClient};
use tracing::debug;

pub struct BedrockClient {
    runtime: aws_sdk_bedrockruntime::Client,
    control: aws_sdk_bedrock::Client,
    region: String,
}

impl BedrockClient {
    /// Build both SDK clients from one resolved SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig, region: impl Into<String>) -> Self {
        Self {
            runtime: aws_sdk_bedrockruntime::Client::new(config),
            control: aws_sdk_bedrock::Client::new(config),
            region: region.into(),
        }
    }
}

#[async_trait]
impl ModelClient for BedrockClient {
    fn region(&self) -> &str {
        &self.region
    }

    async fn invoke_model(
        &self,
        model_id: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, InvocationError> {
        debug!(model = %model_id, region = %self.region, "Calling Bedrock InvokeModel API");

        let response = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_invoke_error(&e))?;

        Ok(response.body().as_ref().to_vec())
    }

    async fn list_foundation_models(&self) -> Result<serde_json::Value, InvocationError> {
        debug!(region = %self.region, "Calling Bedrock ListFoundationModels API");

        let response = self
            .control
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| types::convert_list_error(&e))?;

        Ok(types::foundation_models_to_json(response.model_summaries()))
    }
}
