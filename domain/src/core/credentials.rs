//! Cloud credentials value object

use crate::core::string::redact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region used when none is supplied.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Transient AWS credentials for one session (Value Object)
///
/// All fields are opaque strings. Validation beyond presence is left to
/// the remote service.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: String,
    pub region: String,
}

impl Credentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: session_token.into(),
            region: region.into(),
        }
    }

    /// The region to bind a client to, falling back to [`DEFAULT_REGION`].
    pub fn resolved_region(&self) -> &str {
        let region = self.region.trim();
        if region.is_empty() {
            DEFAULT_REGION
        } else {
            region
        }
    }

    /// Return a copy whose region is always populated.
    pub fn with_default_region(mut self) -> Self {
        self.region = self.resolved_region().to_string();
        self
    }

    /// Session token, if one was supplied.
    pub fn session_token(&self) -> Option<&str> {
        let token = self.session_token.trim();
        (!token.is_empty()).then_some(token)
    }

    /// Whether an access key / secret key pair was supplied.
    pub fn has_static_keys(&self) -> bool {
        !self.access_key.trim().is_empty() && !self.secret_key.trim().is_empty()
    }

    /// Whether exactly one half of the key pair was supplied.
    pub fn is_partial(&self) -> bool {
        self.access_key.trim().is_empty() != self.secret_key.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("session_token", &redact(&self.session_token))
            .field("region", &self.region)
            .finish()
    }
}
