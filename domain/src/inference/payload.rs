//! JSON request/response bodies for the text-completion invoke endpoint

use crate::inference::params::InferenceParams;
use serde::{Deserialize, Serialize};

/// Body of an invoke request
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: String,
    #[serde(flatten)]
    pub params: &'a InferenceParams,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(prompt: impl Into<String>, params: &'a InferenceParams) -> Self {
        Self {
            prompt: prompt.into(),
            params,
        }
    }
}

/// Body of an invoke response
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl CompletionResponse {
    /// Generated text with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.completion.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let params = InferenceParams::default();
        let request = CompletionRequest::new("\n\nHuman: User: hi\n\nAssistant:", &params);
        let value = serde_json::to_value(&request).unwrap();

        let expected = json!({
            "prompt": "\n\nHuman: User: hi\n\nAssistant:",
            "max_tokens_to_sample": 1000,
            "temperature": 0.2,
            "top_k": 250,
            "top_p": 1.0,
            "stop_sequences": ["\n\nHuman:"]
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_response_trims_completion() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"completion": "  select 1  \n", "stop_reason": "stop_sequence"}"#)
                .unwrap();
        assert_eq!(response.text(), "select 1");
        assert_eq!(response.stop_reason.as_deref(), Some("stop_sequence"));
    }

    #[test]
    fn test_response_missing_completion_fails() {
        let result = serde_json::from_str::<CompletionResponse>(r#"{"outputs": []}"#);
        assert!(result.is_err());
    }
}
