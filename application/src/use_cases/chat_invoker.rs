//! Chat invoker use case
//!
//! Turns an ordered conversation into a single prompt, sends it to the
//! configured model once, and returns the generated text. Any failure is
//! reported through the [`Notifier`] and replaced by the fallback value.

use crate::config::InvokeOptions;
use crate::ports::model_gateway::{ClientHandle, InvocationError};
use crate::ports::notifier::{NoNotifier, Notifier};
use chatbot_domain::{ChatMessage, CompletionRequest, CompletionResponse, InvocationResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while invoking a model
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Model client not initialized; authenticate first")]
    NotAuthenticated,

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Invocation failed: {0}")]
    Invocation(#[from] InvocationError),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Use case for sending a conversation to the model
pub struct ChatInvoker {
    options: InvokeOptions,
    notifier: Arc<dyn Notifier>,
}

impl ChatInvoker {
    pub fn new(options: InvokeOptions) -> Self {
        Self {
            options,
            notifier: Arc::new(NoNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn options(&self) -> &InvokeOptions {
        &self.options
    }

    /// Render the prompt that would be sent for `messages`.
    pub fn build_prompt(&self, messages: &[ChatMessage]) -> String {
        self.options.template.render(messages)
    }

    /// Invoke the model, returning the fallback value on any failure.
    pub async fn invoke(
        &self,
        handle: Option<&ClientHandle>,
        messages: &[ChatMessage],
    ) -> InvocationResult {
        match self.try_invoke(handle, messages).await {
            Ok(text) => InvocationResult::Text(text),
            Err(e) => {
                warn!(model = %self.options.model, "Falling back after failed invocation: {}", e);
                self.notifier.error(&format!("Error calling Bedrock: {}", e));
                InvocationResult::Fallback(self.options.fallback.clone())
            }
        }
    }

    /// Invoke the model and surface the distinct failure cause.
    ///
    /// Fails fast with [`ChatError::NotAuthenticated`] before any network
    /// call when `handle` is `None`.
    pub async fn try_invoke(
        &self,
        handle: Option<&ClientHandle>,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let handle = handle.ok_or(ChatError::NotAuthenticated)?;

        let prompt = self.build_prompt(messages);
        let request = CompletionRequest::new(prompt, &self.options.params);
        let body = serde_json::to_vec(&request).map_err(|e| ChatError::Encode(e.to_string()))?;

        debug!(
            model = %self.options.model,
            region = %handle.region(),
            messages = messages.len(),
            bytes = body.len(),
            "Invoking model"
        );

        self.notifier.on_request_start("Waiting for model");
        let result = handle
            .client()
            .invoke_model(self.options.model.as_str(), body)
            .await;
        self.notifier.on_request_end();
        let raw = result?;

        let response: CompletionResponse =
            serde_json::from_slice(&raw).map_err(|e| ChatError::Parse(e.to_string()))?;

        info!(
            model = %self.options.model,
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "Model responded"
        );

        Ok(response.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::mocks::{MockClient, RecordingNotifier};
    use chatbot_domain::{FALLBACK_QUERY, ModelId};
    use serde_json::json;

    fn invoker() -> (ChatInvoker, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let invoker = ChatInvoker::new(InvokeOptions::default()).with_notifier(notifier.clone());
        (invoker, notifier)
    }

    #[tokio::test]
    async fn test_success_returns_trimmed_completion() {
        let (invoker, notifier) = invoker();
        let (client, handle) = MockClient::new("us-west-2")
            .with_response(json!({"completion": "  select * from orders\n", "stop_reason": "stop_sequence"}))
            .into_handle();

        let result = invoker
            .invoke(Some(&handle), &[ChatMessage::user("show orders")])
            .await;

        assert_eq!(result, InvocationResult::Text("select * from orders".to_string()));
        assert_eq!(client.request_count(), 1);
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_request_body_and_model_id() {
        let (invoker, _) = invoker();
        let (client, handle) = MockClient::new("us-west-2")
            .with_response(json!({"completion": "ok"}))
            .into_handle();

        invoker.invoke(Some(&handle), &[ChatMessage::user("hi")]).await;

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].0, "anthropic.claude-v2");
        drop(requests);

        let body = client.last_request_json();
        assert_eq!(
            body,
            json!({
                "prompt": "\n\nHuman: User: hi\n\nAssistant:",
                "max_tokens_to_sample": 1000,
                "temperature": 0.2,
                "top_k": 250,
                "top_p": 1.0,
                "stop_sequences": ["\n\nHuman:"]
            })
        );
    }

    #[tokio::test]
    async fn test_missing_handle_returns_fallback_without_call() {
        let (invoker, notifier) = invoker();

        let result = invoker.invoke(None, &[ChatMessage::user("hi")]).await;

        assert!(result.is_fallback());
        assert_eq!(result.text(), "select * from customer_accounts limit 10");
        assert_eq!(*notifier.requests.lock().unwrap(), 0);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_try_invoke_reports_not_authenticated() {
        let (invoker, _) = invoker();
        let err = invoker.try_invoke(None, &[]).await.unwrap_err();
        assert!(matches!(err, ChatError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_remote_error_returns_fallback() {
        let (invoker, notifier) = invoker();
        let (_, handle) = MockClient::new("us-west-2")
            .with_error(InvocationError::Throttled("slow down".into()))
            .into_handle();

        let result = invoker.invoke(Some(&handle), &[ChatMessage::user("hi")]).await;

        assert_eq!(result, InvocationResult::Fallback(FALLBACK_QUERY.to_string()));
        assert!(notifier.errors()[0].contains("slow down"));
    }

    #[tokio::test]
    async fn test_unparseable_response_is_parse_error() {
        let (invoker, _) = invoker();
        let (_, handle) = MockClient::new("us-west-2")
            .with_raw_response(b"not json")
            .into_handle();

        let err = invoker
            .try_invoke(Some(&handle), &[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_completion_field_returns_fallback() {
        let (invoker, _) = invoker();
        let (_, handle) = MockClient::new("us-west-2")
            .with_response(json!({"generation": "wrong shape"}))
            .into_handle();

        let result = invoker.invoke(Some(&handle), &[ChatMessage::user("hi")]).await;
        assert!(result.is_fallback());
    }

    #[tokio::test]
    async fn test_custom_model_and_fallback() {
        let options = InvokeOptions::default()
            .with_model(ModelId::ClaudeInstantV1)
            .with_fallback("show tables");
        let invoker = ChatInvoker::new(options);
        let (client, handle) = MockClient::new("us-east-1")
            .with_error(InvocationError::Timeout)
            .into_handle();

        let result = invoker.invoke(Some(&handle), &[ChatMessage::user("hi")]).await;

        assert_eq!(result.text(), "show tables");
        assert_eq!(client.requests.lock().unwrap()[0].0, "anthropic.claude-instant-v1");
    }

    #[test]
    fn test_build_prompt_is_order_sensitive() {
        let (invoker, _) = invoker();
        let a = ChatMessage::user("a");
        let b = ChatMessage::assistant("b");
        assert_ne!(
            invoker.build_prompt(&[a.clone(), b.clone()]),
            invoker.build_prompt(&[b, a])
        );
    }
}
