//! The secret store's view of a secret

use std::collections::BTreeMap;
use zeroize::Zeroize;

/// Raw contents of a secret as returned by a store.
///
/// Both maps share one key namespace and may overlap. Payloads are zeroized
/// when the value is dropped, so build instances with the `with_*` methods
/// rather than struct update syntax.
#[derive(Default)]
pub struct RawSecret {
    /// Key to binary payload (the secret's `data` field)
    pub binary_values: Option<BTreeMap<String, Vec<u8>>>,
    /// Key to plain text (the secret's `stringData` field)
    pub string_values: Option<BTreeMap<String, String>>,
}

impl RawSecret {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_binary(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.binary_values
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.string_values
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Total number of entries across both maps, counting overlaps twice
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.binary_values.as_ref().map_or(0, BTreeMap::len)
            + self.string_values.as_ref().map_or(0, BTreeMap::len)
    }
}

impl Clone for RawSecret {
    fn clone(&self) -> Self {
        Self {
            binary_values: self.binary_values.clone(),
            string_values: self.string_values.clone(),
        }
    }
}

impl std::fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawSecret")
            .field(
                "binary_keys",
                &self.binary_values.as_ref().map(|m| m.keys().collect::<Vec<_>>()),
            )
            .field(
                "string_keys",
                &self.string_values.as_ref().map(|m| m.keys().collect::<Vec<_>>()),
            )
            .finish()
    }
}

impl Drop for RawSecret {
    fn drop(&mut self) {
        if let Some(values) = self.binary_values.as_mut() {
            values.values_mut().for_each(|v| v.zeroize());
        }
        if let Some(values) = self.string_values.as_mut() {
            values.values_mut().for_each(|v| v.zeroize());
        }
    }
}
