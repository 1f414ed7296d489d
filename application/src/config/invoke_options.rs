//! Invocation options: what every chat call sends.

use chatbot_domain::{FALLBACK_QUERY, InferenceParams, ModelId, PromptTemplate};

/// Static options for [`ChatInvoker`](crate::use_cases::chat_invoker::ChatInvoker).
#[derive(Debug, Clone)]
pub struct InvokeOptions {
    /// Model invoked for every turn.
    pub model: ModelId,
    /// Generation parameters sent with the prompt.
    pub params: InferenceParams,
    /// Value returned in place of generated text when a call fails.
    pub fallback: String,
    /// Turn framing applied to the conversation.
    pub template: PromptTemplate,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            params: InferenceParams::default(),
            fallback: FALLBACK_QUERY.to_string(),
            template: PromptTemplate::anthropic(),
        }
    }
}

impl InvokeOptions {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }

    pub fn with_params(mut self, params: InferenceParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}
