//! Resolution of one secret reference into a flat configuration map

use async_trait::async_trait;
use kscp_config::{OptionMap, ProviderOptions};
use kscp_core::{
    Error, KeyFilter, Namespace, RawSecret, ResolvedConfig, Result, SecretName,
    MISSING_NAMESPACE_MESSAGE,
};
use std::collections::HashMap;
use std::sync::Arc;
use zeroize::Zeroize;

use crate::store::SecretStore;

/// The interface a host configuration framework drives.
///
/// `get` returns every key of a secret; `get_keys` returns the requested
/// subset. Both fail with `InvalidArgument` on a blank secret name and with
/// `ResolutionFailure` when the store cannot produce the secret.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Bind provider options. Must succeed before the first `get`.
    fn configure(&mut self, options: &OptionMap) -> Result<()>;

    async fn get(&self, path: &str) -> Result<ResolvedConfig>;

    async fn get_keys(&self, path: &str, keys: &KeyFilter) -> Result<ResolvedConfig>;

    /// Release resources. Never fails.
    fn close(&mut self);
}

/// Resolves secrets from one namespace through an injected store.
///
/// # Missing keys
///
/// A keyed resolution drops requested keys the secret does not have. If that
/// leaves nothing, the call fails with `KeyNotFound` naming the secret and
/// every requested key; an empty map is never returned from `resolve_keys`.
pub struct SecretConfigProvider {
    store: Arc<dyn SecretStore>,
    namespace: Option<Namespace>,
}

impl SecretConfigProvider {
    /// Create an unconfigured provider. Resolution fails until a namespace is
    /// bound with [`configure`](Self::configure) or [`bind`](Self::bind).
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self {
            store,
            namespace: None,
        }
    }

    /// Create a provider already bound to `options`
    pub fn with_options(store: Arc<dyn SecretStore>, options: ProviderOptions) -> Self {
        let mut provider = Self::new(store);
        provider.bind(options);
        provider
    }

    /// Validate and bind an option map. On failure the previous binding is
    /// kept.
    pub fn configure(&mut self, options: &OptionMap) -> Result<()> {
        let options = ProviderOptions::from_map(options)?;
        self.bind(options);
        Ok(())
    }

    /// Bind already-validated options
    pub fn bind(&mut self, options: ProviderOptions) {
        tracing::debug!(namespace = %options.namespace, "Provider configured");
        self.namespace = Some(options.namespace);
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    /// Resolve every key of `secret_name`
    pub async fn resolve(&self, secret_name: &str) -> Result<ResolvedConfig> {
        tracing::info!(secret = %secret_name, "Read data from secret");

        let name = SecretName::new(secret_name)?;
        let merged = self.read_merged(&name, None).await?;
        Ok(ResolvedConfig::new(merged))
    }

    /// Resolve only `keys` of `secret_name`
    pub async fn resolve_keys(
        &self,
        secret_name: &str,
        keys: &KeyFilter,
    ) -> Result<ResolvedConfig> {
        tracing::info!(secret = %secret_name, keys = %keys, "Read keys from secret");

        let name = SecretName::new(secret_name)?;
        let merged = ResolvedConfig::new(self.read_merged(&name, Some(keys)).await?);
        let filtered = filter_values(merged.data(), keys);

        if filtered.is_empty() {
            tracing::warn!(secret = %name, keys = %keys, "None of the requested keys were found");
            return Err(Error::key_not_found(name.as_str(), keys.clone()));
        }

        tracing::debug!(
            secret = %name,
            requested = keys.len(),
            found = filtered.len(),
            "Filtered secret keys"
        );
        Ok(ResolvedConfig::new(filtered))
    }

    /// Nothing to release; the store owns its own lifecycle
    pub fn close(&mut self) {
        tracing::debug!("Provider closed");
    }

    async fn read_merged(
        &self,
        name: &SecretName,
        keys: Option<&KeyFilter>,
    ) -> Result<HashMap<String, String>> {
        let namespace = self
            .namespace
            .as_ref()
            .ok_or_else(|| Error::invalid_argument(MISSING_NAMESPACE_MESSAGE))?;

        let raw = self.store.read(namespace, name).await.map_err(|e| {
            tracing::warn!(
                namespace = %namespace,
                secret = %name,
                error = %e,
                "Failed to read secret"
            );
            Error::resolution_failure_with_source(name.as_str(), keys.cloned(), e)
        })?;

        Ok(merge_values(&raw, name))
    }
}

#[async_trait]
impl ConfigProvider for SecretConfigProvider {
    fn configure(&mut self, options: &OptionMap) -> Result<()> {
        SecretConfigProvider::configure(self, options)
    }

    async fn get(&self, path: &str) -> Result<ResolvedConfig> {
        self.resolve(path).await
    }

    async fn get_keys(&self, path: &str, keys: &KeyFilter) -> Result<ResolvedConfig> {
        self.resolve_keys(path, keys).await
    }

    fn close(&mut self) {
        SecretConfigProvider::close(self);
    }
}

/// Flatten a raw secret into one map.
///
/// Binary values are decoded as UTF-8 (invalid sequences become U+FFFD) and
/// merged first; string values are merged second and win on collision.
#[must_use]
pub fn merge_values(raw: &RawSecret, name: &SecretName) -> HashMap<String, String> {
    let mut data = HashMap::with_capacity(raw.entry_count());

    if let Some(binary) = &raw.binary_values {
        for (key, bytes) in binary {
            let value = match std::str::from_utf8(bytes) {
                Ok(text) => text.to_owned(),
                Err(_) => {
                    tracing::warn!(
                        secret = %name,
                        key = %key,
                        "Value is not valid UTF-8, decoding lossily"
                    );
                    String::from_utf8_lossy(bytes).into_owned()
                }
            };
            data.insert(key.clone(), value);
        }
    }

    if let Some(strings) = &raw.string_values {
        for (key, value) in strings {
            if let Some(mut previous) = data.insert(key.clone(), value.clone()) {
                previous.zeroize();
                tracing::trace!(
                    secret = %name,
                    key = %key,
                    "String value overrides binary value"
                );
            }
        }
    }

    tracing::debug!(secret = %name, keys = data.len(), "Merged secret values");
    data
}

/// Keep only the entries of `data` whose key is in `keys`
#[must_use]
pub fn filter_values(data: &HashMap<String, String>, keys: &KeyFilter) -> HashMap<String, String> {
    keys.iter()
        .filter_map(|key| data.get(key).map(|value| (key.to_string(), value.clone())))
        .collect()
}
