//! Model configuration from TOML (`[model]` section)

use chatbot_application::InvokeOptions;
use chatbot_domain::{FALLBACK_QUERY, InferenceParams, ModelId};
use serde::{Deserialize, Serialize};

/// Raw model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Bedrock model id (e.g. "anthropic.claude-v2")
    pub id: ModelId,
    /// Returned instead of generated text when a call fails
    pub fallback: String,
    /// Optional system message placed at the start of every conversation
    pub system_prompt: Option<String>,
    /// Generation parameters
    pub params: InferenceParams,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            id: ModelId::default(),
            fallback: FALLBACK_QUERY.to_string(),
            system_prompt: None,
            params: InferenceParams::default(),
        }
    }
}

impl FileModelConfig {
    pub fn to_invoke_options(&self) -> InvokeOptions {
        InvokeOptions::default()
            .with_model(self.id.clone())
            .with_params(self.params.clone())
            .with_fallback(self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_model_section() {
        let toml_str = r#"
[model]
id = "anthropic.claude-instant-v1"
fallback = "show tables"

[model.params]
temperature = 0.5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.id, ModelId::ClaudeInstantV1);
        assert_eq!(config.model.params.temperature, 0.5);
        assert_eq!(config.model.params.top_k, 250);

        let options = config.model.to_invoke_options();
        assert_eq!(options.fallback, "show tables");
        assert_eq!(options.model, ModelId::ClaudeInstantV1);
    }
}
