//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown cloud provider: {0} (expected azure, aws or gcp)")]
    UnknownCloudProvider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_cloud_provider_display() {
        let error = DomainError::UnknownCloudProvider("oracle".to_string());
        assert!(error.to_string().contains("oracle"));
        assert!(error.to_string().contains("azure, aws or gcp"));
    }
}
