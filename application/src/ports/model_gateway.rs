//! Model gateway ports
//!
//! Defines how the application layer authenticates against the model
//! hosting service and talks to it afterwards. Adapters live in the
//! infrastructure layer.

use async_trait::async_trait;
use chatbot_domain::Credentials;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building an authenticated client
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Partial credentials: both an access key and a secret key are required")]
    PartialCredentials,

    #[error("Credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("Client construction failed: {0}")]
    ClientConstruction(String),
}

/// Errors raised by a remote call on an authenticated client
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Model not ready: {0}")]
    ModelNotReady(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// An authenticated connection to the model hosting service
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Region the client is bound to
    fn region(&self) -> &str;

    /// Send a JSON body to a model's invoke endpoint and return the raw
    /// JSON response body.
    async fn invoke_model(
        &self,
        model_id: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, InvocationError>;

    /// List the foundation models visible to these credentials.
    async fn list_foundation_models(&self) -> Result<serde_json::Value, InvocationError>;
}

/// Shared handle to an authenticated [`ModelClient`]
///
/// Cloning is cheap; all clones talk to the same client. A new handle is
/// created on every successful authentication.
#[derive(Clone)]
pub struct ClientHandle {
    client: Arc<dyn ModelClient>,
}

impl ClientHandle {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    pub fn region(&self) -> &str {
        self.client.region()
    }

    pub fn client(&self) -> &dyn ModelClient {
        self.client.as_ref()
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}

/// Builds authenticated clients from credentials
#[async_trait]
pub trait ModelAuthenticator: Send + Sync {
    /// Create a client bound to `credentials`.
    ///
    /// `credentials.region` is expected to be resolved already.
    async fn authenticate(&self, credentials: &Credentials) -> Result<ClientHandle, AuthError>;
}
