//! Builder methods for creating errors with context

use super::types::Error;
use crate::types::KeyFilter;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a resolution failure that keeps the underlying store error.
    ///
    /// `keys` is set when the failed call asked for a subset of the secret, so
    /// the rendered message names both the secret and the requested keys.
    #[must_use]
    pub fn resolution_failure_with_source(
        secret: impl Into<String>,
        keys: Option<KeyFilter>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source = source.into();
        Error::ResolutionFailure {
            secret: secret.into(),
            keys,
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a key-not-found error
    #[must_use]
    pub fn key_not_found(secret: impl Into<String>, keys: KeyFilter) -> Self {
        Error::KeyNotFound {
            secret: secret.into(),
            keys,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Error::ResolutionFailure { .. })
    }

    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Name of the secret this error concerns, if any
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match self {
            Error::ResolutionFailure { secret, .. } | Error::KeyNotFound { secret, .. } => {
                Some(secret)
            }
            _ => None,
        }
    }
}
