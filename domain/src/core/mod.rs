//! Core domain concepts shared across all subdomains.
//!
//! - [`credentials::Credentials`]: cloud credentials and region for one session
//! - [`model::ModelId`]: text-completion model identifiers
//! - [`error::DomainError`]: domain-level errors

pub mod credentials;
pub mod error;
pub mod model;
pub mod string;
