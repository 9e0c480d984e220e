//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            Error::ResolutionFailure {
                secret,
                keys,
                message,
                ..
            } => match keys {
                Some(keys) => write!(
                    f,
                    "failed to read keys {keys} from secret '{secret}': {message}"
                ),
                None => write!(f, "failed to read data from secret '{secret}': {message}"),
            },
            Error::KeyNotFound { secret, keys } => {
                write!(f, "keys {keys} not found in secret '{secret}'")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
