//! Domain layer for kafka-chatbot
//!
//! This crate contains the value objects and entities of the chatbot.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Credentials**: access key, secret key, session token and region for one session
//! - **Conversation**: ordered chat messages, linearized into a single prompt
//! - **Invocation**: fixed generation parameters, and a fallback value when a call fails

pub mod config;
pub mod confluent;
pub mod core;
pub mod inference;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use confluent::{CloudProvider, ConfluentSettings};
pub use core::{
    credentials::{Credentials, DEFAULT_REGION},
    error::DomainError,
    model::ModelId,
};
pub use inference::{
    params::InferenceParams,
    payload::{CompletionRequest, CompletionResponse},
    result::{FALLBACK_QUERY, InvocationResult},
};
pub use prompt::PromptTemplate;
pub use session::entities::{ChatMessage, Conversation, Role};
