//! Hand-written port doubles shared by the use case tests.

use crate::ports::model_gateway::{
    AuthError, ClientHandle, InvocationError, ModelAuthenticator, ModelClient,
};
use crate::ports::notifier::Notifier;
use async_trait::async_trait;
use chatbot_domain::Credentials;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ==================== Client ====================

pub(crate) struct MockClient {
    region: String,
    responses: Mutex<VecDeque<Result<Vec<u8>, InvocationError>>>,
    pub(crate) requests: Mutex<Vec<(String, Vec<u8>)>>,
    models: Mutex<Option<Result<serde_json::Value, InvocationError>>>,
}

impl MockClient {
    pub(crate) fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            models: Mutex::new(None),
        }
    }

    pub(crate) fn with_response(self, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(serde_json::to_vec(&body).unwrap()));
        self
    }

    pub(crate) fn with_raw_response(self, body: &[u8]) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
        self
    }

    pub(crate) fn with_error(self, error: InvocationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn with_models(self, models: Result<serde_json::Value, InvocationError>) -> Self {
        *self.models.lock().unwrap() = Some(models);
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request_json(&self) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let (_, body) = requests.last().expect("no request recorded");
        serde_json::from_slice(body).unwrap()
    }

    pub(crate) fn into_handle(self) -> (Arc<MockClient>, ClientHandle) {
        let client = Arc::new(self);
        let handle = ClientHandle::new(client.clone());
        (client, handle)
    }
}

#[async_trait]
impl ModelClient for MockClient {
    fn region(&self) -> &str {
        &self.region
    }

    async fn invoke_model(
        &self,
        model_id: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, InvocationError> {
        self.requests
            .lock()
            .unwrap()
            .push((model_id.to_string(), body));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(InvocationError::RequestFailed("No more responses".into())))
    }

    async fn list_foundation_models(&self) -> Result<serde_json::Value, InvocationError> {
        self.models
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(InvocationError::RequestFailed("No models scripted".into())))
    }
}

// ==================== Authenticator ====================

/// Succeeds unless `fail_with` is set; records every credential set it sees.
pub(crate) struct MockAuthenticator {
    pub(crate) seen: Mutex<Vec<Credentials>>,
    fail_with: Mutex<Option<AuthError>>,
}

impl MockAuthenticator {
    pub(crate) fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub(crate) fn failing(error: AuthError) -> Self {
        let auth = Self::new();
        *auth.fail_with.lock().unwrap() = Some(error);
        auth
    }

    pub(crate) fn fail_next(&self, error: AuthError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl ModelAuthenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<ClientHandle, AuthError> {
        self.seen.lock().unwrap().push(credentials.clone());
        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }
        let (_, handle) = MockClient::new(&credentials.region).into_handle();
        Ok(handle)
    }
}

// ==================== Notifier ====================

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) successes: Mutex<Vec<String>>,
    pub(crate) errors: Mutex<Vec<String>>,
    pub(crate) requests: Mutex<usize>,
}

impl RecordingNotifier {
    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub(crate) fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn on_request_start(&self, _label: &str) {
        *self.requests.lock().unwrap() += 1;
    }
}
