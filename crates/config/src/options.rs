//! The `configure` option map and its validated form

use kscp_core::{Error, Namespace, Result, MISSING_NAMESPACE_MESSAGE, NAMESPACE_OPTION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Untyped options as a host hands them to `configure`
pub type OptionMap = HashMap<String, Value>;

/// Validated provider options.
///
/// Immutable once built; a provider rebinds by being configured again with a
/// fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
    pub namespace: Namespace,
}

impl ProviderOptions {
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    /// Validate an option map.
    ///
    /// `namespace` must be present, non-null, a string, and not blank. Any
    /// other option is ignored.
    pub fn from_map(options: &OptionMap) -> Result<Self> {
        for key in options.keys().filter(|k| k.as_str() != NAMESPACE_OPTION) {
            tracing::debug!(option = %key, "Ignoring unrecognized provider option");
        }

        let namespace = match options.get(NAMESPACE_OPTION) {
            None | Some(Value::Null) => {
                return Err(Error::invalid_argument(MISSING_NAMESPACE_MESSAGE));
            }
            Some(Value::String(namespace)) => Namespace::new(namespace.as_str())?,
            Some(other) => {
                return Err(Error::invalid_argument(format!(
                    "option '{NAMESPACE_OPTION}' must be a string, got {other}"
                )));
            }
        };

        Ok(Self { namespace })
    }

    /// Render back into the untyped form
    #[must_use]
    pub fn to_map(&self) -> OptionMap {
        HashMap::from([(
            NAMESPACE_OPTION.to_string(),
            Value::String(self.namespace.to_string()),
        )])
    }
}
