//! Model invocation value objects.
//!
//! - [`params::InferenceParams`]: fixed generation configuration
//! - [`payload::CompletionRequest`] / [`payload::CompletionResponse`]: JSON wire shapes
//! - [`result::InvocationResult`]: generated text or the fallback value

pub mod params;
pub mod payload;
pub mod result;
