//! Conversions from foreign error types

use super::types::Error;

// I/O errors go through `IoResultExt::for_path` so they always carry a path.
impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json {
            message: format!("{source} ({:?})", source.classify()),
            source,
        }
    }
}
