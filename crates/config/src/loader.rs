//! Layered loading of provider options
//!
//! Precedence, highest first: an explicit namespace, a properties file, then
//! the `KSCP_NAMESPACE` environment variable.

use crate::options::{OptionMap, ProviderOptions};
use crate::properties::Properties;
use kscp_core::{
    IoResultExt, Result, ResultExt, DEFAULT_PROVIDER_ALIAS, KSCP_NAMESPACE_VAR, NAMESPACE_OPTION,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

impl ProviderOptions {
    /// Read options from the process environment
    pub fn from_env() -> Result<Self> {
        let mut options = OptionMap::new();
        if let Ok(namespace) = std::env::var(KSCP_NAMESPACE_VAR) {
            options.insert(NAMESPACE_OPTION.to_string(), Value::String(namespace));
        }
        ProviderOptions::from_map(&options)
    }

    /// Read the options addressed to `alias` from properties text
    pub fn from_properties(text: &str, alias: &str) -> Result<Self> {
        let properties = Properties::parse(text)?;
        ProviderOptions::from_map(&properties.params_for(alias))
    }

    /// Read the options addressed to `alias` from a properties file
    pub fn load(path: &Path, alias: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).for_path(path, "read")?;
        Self::from_properties(&text, alias)
            .with_context(|| format!("loading provider options from '{}'", path.display()))
    }
}

/// Builder that merges the available option sources
#[derive(Debug, Clone)]
pub struct ProviderOptionsLoader {
    namespace: Option<String>,
    file: Option<PathBuf>,
    alias: String,
    use_env: bool,
}

impl ProviderOptionsLoader {
    pub fn new() -> Self {
        Self {
            namespace: None,
            file: None,
            alias: DEFAULT_PROVIDER_ALIAS.to_string(),
            use_env: true,
        }
    }

    /// Namespace given directly, e.g. on the command line
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Properties file to consult
    pub fn file(mut self, path: Option<PathBuf>) -> Self {
        self.file = path;
        self
    }

    /// Provider alias used to scope properties keys
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Whether `KSCP_NAMESPACE` is consulted as a last resort
    pub fn use_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }

    pub fn load(self) -> Result<ProviderOptions> {
        let mut options = OptionMap::new();

        if self.use_env {
            if let Ok(namespace) = std::env::var(KSCP_NAMESPACE_VAR) {
                tracing::debug!(source = "env", "Namespace candidate found");
                options.insert(NAMESPACE_OPTION.to_string(), Value::String(namespace));
            }
        }

        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path).for_path(path, "read")?;
            let properties = Properties::parse(&text)
                .with_context(|| format!("parsing '{}'", path.display()))?;
            let params = properties.params_for(&self.alias);
            if params.contains_key(NAMESPACE_OPTION) {
                tracing::debug!(
                    source = %path.display(),
                    alias = %self.alias,
                    "Namespace candidate found"
                );
            }
            options.extend(params);
        }

        if let Some(namespace) = self.namespace {
            tracing::debug!(source = "explicit", "Namespace candidate found");
            options.insert(NAMESPACE_OPTION.to_string(), Value::String(namespace));
        }

        ProviderOptions::from_map(&options)
    }
}

impl Default for ProviderOptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}
