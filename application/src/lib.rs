//! Application layer for kafka-chatbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::InvokeOptions;
pub use ports::{
    model_gateway::{AuthError, ClientHandle, InvocationError, ModelAuthenticator, ModelClient},
    notifier::{NoNotifier, Notifier},
};
pub use use_cases::chat_invoker::{ChatError, ChatInvoker};
pub use use_cases::credential_session::CredentialSession;
pub use use_cases::list_models::ListModelsUseCase;
