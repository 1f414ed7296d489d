//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod chat_invoker;
pub mod credential_session;
pub mod list_models;

#[cfg(test)]
pub(crate) mod mocks;
