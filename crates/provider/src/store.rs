//! The secret store capability

use async_trait::async_trait;
use kscp_core::{Namespace, RawSecret, SecretName};

/// Failures a secret store can report.
///
/// The provider never recovers from these; it wraps them into a resolution
/// failure for the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("secret \"{name}\" not found in namespace \"{namespace}\"")]
    NotFound { namespace: String, name: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    #[must_use]
    pub fn not_found(namespace: &Namespace, name: &SecretName) -> Self {
        StoreError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

/// Reads raw secrets by namespace and name.
///
/// Retries, timeouts and caching are the implementation's business; one call
/// is one read.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the raw contents of `name` in `namespace`
    async fn read(&self, namespace: &Namespace, name: &SecretName)
        -> Result<RawSecret, StoreError>;
}
