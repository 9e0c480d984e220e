//! Extension traits for error handling

use super::types::{Error, Result};
use std::path::Path;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Prefix the error message with `message`.
    ///
    /// Invalid arguments stay invalid arguments; every other error is reported
    /// as a configuration error.
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Same as `context`, building the message only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(message.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(f(), e.into()))
    }
}

fn prefix(message: String, error: Error) -> Error {
    match error {
        Error::InvalidArgument { message: inner } => Error::InvalidArgument {
            message: format!("{message}: {inner}"),
        },
        other => Error::Configuration {
            message: format!("{message}: {other}"),
        },
    }
}

/// Attach the offending path to I/O failures
pub trait IoResultExt<T> {
    fn for_path(self, path: &Path, operation: &str) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn for_path(self, path: &Path, operation: &str) -> Result<T> {
        self.map_err(|e| Error::file_system(path, operation, e))
    }
}
