//! List models use case
//!
//! Pass-through to the model listing endpoint; the result is not reshaped.

use crate::ports::model_gateway::ClientHandle;
use crate::ports::notifier::{NoNotifier, Notifier};
use crate::use_cases::chat_invoker::ChatError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for listing the foundation models visible to a session
pub struct ListModelsUseCase {
    notifier: Arc<dyn Notifier>,
}

impl ListModelsUseCase {
    pub fn new() -> Self {
        Self {
            notifier: Arc::new(NoNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub async fn execute(
        &self,
        handle: Option<&ClientHandle>,
    ) -> Result<serde_json::Value, ChatError> {
        let result = match handle {
            Some(handle) => {
                debug!(region = %handle.region(), "Listing foundation models");
                self.notifier.on_request_start("Listing models");
                let result = handle.client().list_foundation_models().await;
                self.notifier.on_request_end();
                result.map_err(ChatError::from)
            }
            None => Err(ChatError::NotAuthenticated),
        };

        if let Err(ref e) = result {
            warn!("Model listing failed: {}", e);
            self.notifier.error(&format!("Model listing failed: {}", e));
        }
        result
    }
}

impl Default for ListModelsUseCase {
    fn default() -> Self {
        Self::new()
    }
}
