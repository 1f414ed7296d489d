//! Credential session use case
//!
//! Owns the authenticated/not-authenticated state of one user session.
//! The state is the presence of a [`ClientHandle`]; there is nothing else.

use crate::ports::model_gateway::{AuthError, ClientHandle, ModelAuthenticator};
use crate::ports::notifier::{NoNotifier, Notifier};
use chatbot_domain::Credentials;
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the client handle produced by the last successful authentication
pub struct CredentialSession<A: ModelAuthenticator + 'static> {
    authenticator: Arc<A>,
    notifier: Arc<dyn Notifier>,
    handle: Option<ClientHandle>,
}

impl<A: ModelAuthenticator + 'static> CredentialSession<A> {
    pub fn new(authenticator: Arc<A>) -> Self {
        Self {
            authenticator,
            notifier: Arc::new(NoNotifier),
            handle: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&ClientHandle> {
        self.handle.as_ref()
    }

    /// Authenticate from scratch, replacing any previous handle.
    ///
    /// An empty region is bound as [`DEFAULT_REGION`](chatbot_domain::DEFAULT_REGION).
    /// On failure the session is left unauthenticated.
    pub async fn authenticate(
        &mut self,
        credentials: &Credentials,
    ) -> Result<ClientHandle, AuthError> {
        let credentials = credentials.clone().with_default_region();
        self.handle = None;

        self.notifier.on_request_start("Authenticating");
        let result = self.authenticator.authenticate(&credentials).await;
        self.notifier.on_request_end();

        match result {
            Ok(handle) => {
                info!(region = %handle.region(), "Authenticated with model service");
                self.notifier.success(&format!(
                    "You have successfully authenticated with AWS Bedrock ({})",
                    handle.region()
                ));
                self.handle = Some(handle.clone());
                Ok(handle)
            }
            Err(e) => {
                warn!(region = %credentials.region, "Authentication failed: {}", e);
                self.notifier.error(&format!("Authentication failed: {}", e));
                Err(e)
            }
        }
    }
}
