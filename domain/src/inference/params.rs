//! Generation parameters sent with every invocation

use serde::{Deserialize, Serialize};

/// Generation configuration for text-completion models (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceParams {
    pub max_tokens_to_sample: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub stop_sequences: Vec<String>,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            max_tokens_to_sample: 1000,
            temperature: 0.2,
            top_k: 250,
            top_p: 1.0,
            stop_sequences: vec!["\n\nHuman:".to_string()],
        }
    }
}
