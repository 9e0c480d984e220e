//! The flat map handed back to the host

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use zeroize::Zeroize;

/// Result of one resolution call.
///
/// Values are zeroized on drop and never rendered by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    data: HashMap<String, String>,
    ttl: Option<Duration>,
}

impl ResolvedConfig {
    /// Wrap resolved values. Secrets are not polled, so there is no ttl.
    #[must_use]
    pub fn new(data: HashMap<String, String>) -> Self {
        Self { data, ttl: None }
    }

    #[must_use]
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// How long the host may cache these values. Always `None`.
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Take ownership of the values
    #[must_use]
    pub fn into_data(mut self) -> HashMap<String, String> {
        std::mem::take(&mut self.data)
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ResolvedConfig")
            .field("keys", &keys)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl Drop for ResolvedConfig {
    fn drop(&mut self) {
        self.data.values_mut().for_each(|v| v.zeroize());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_is_always_absent() {
        let config = ResolvedConfig::new(HashMap::from([("k".to_string(), "v".to_string())]));
        assert!(config.ttl().is_none());
        assert_eq!(config.get("k"), Some("v"));
    }

    #[test]
    fn test_debug_redacts_values() {
        let config = ResolvedConfig::new(HashMap::from([(
            "token".to_string(),
            "s3cr3t".to_string(),
        )]));
        let rendered = format!("{config:?}");
        assert!(rendered.contains("token"));
        assert!(!rendered.contains("s3cr3t"));
    }

    #[test]
    fn test_into_data_moves_values_out() {
        let config = ResolvedConfig::new(HashMap::from([("k".to_string(), "v".to_string())]));
        let data = config.into_data();
        assert_eq!(data.get("k").map(String::as_str), Some("v"));
    }
}
