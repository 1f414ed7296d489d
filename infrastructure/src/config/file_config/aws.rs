//! AWS configuration from TOML (`[aws]` section)

use chatbot_domain::Credentials;
use chatbot_domain::core::string::redact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw AWS configuration
///
/// Field names follow the standard AWS environment variables so that
/// `AWS_ACCESS_KEY_ID` maps onto `aws.access_key_id`, and so on.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    /// AWS region (empty means `us-west-2`)
    pub region: String,
    /// Profile used when no access key pair is configured
    pub profile: Option<String>,
}

impl FileAwsConfig {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            self.session_token.clone(),
            self.region.clone(),
        )
    }
}

impl fmt::Debug for FileAwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAwsConfig")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("session_token", &redact(&self.session_token))
            .field("region", &self.region)
            .field("profile", &self.profile)
            .finish()
    }
}
