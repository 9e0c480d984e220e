//! Core error type definitions

use crate::types::KeyFilter;
use std::path::PathBuf;

/// Result type alias for kscp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for kscp operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied argument or option failed validation
    InvalidArgument { message: String },

    /// The secret store could not produce the requested secret
    ResolutionFailure {
        secret: String,
        keys: Option<KeyFilter>,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// None of the requested keys exist in the fetched secret
    KeyNotFound { secret: String, keys: KeyFilter },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
