//! AWS Bedrock provider
//!
//! Authenticates with static or ambient AWS credentials and talks to the
//! Bedrock runtime (model invocation) and control plane (model listing).

mod authenticator;
mod client;
mod types;

pub use authenticator::BedrockAuthenticator;
pub use client::BedrockClient;
