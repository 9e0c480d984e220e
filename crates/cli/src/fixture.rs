//! Offline secret source read from `kubectl get secrets -o json` output

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use eyre::WrapErr;
use kscp_core::{Namespace, RawSecret, SecretName};
use kscp_provider::InMemorySecretStore;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Deserialize)]
struct SecretList {
    items: Vec<SecretItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretItem {
    metadata: Metadata,
    #[serde(default)]
    data: BTreeMap<String, String>,
    #[serde(default)]
    string_data: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct Metadata {
    name: String,
    namespace: String,
}

pub fn load(path: &Path) -> eyre::Result<InMemorySecretStore> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading fixture '{}'", path.display()))?;
    parse(&text).wrap_err_with(|| format!("parsing fixture '{}'", path.display()))
}

fn parse(text: &str) -> eyre::Result<InMemorySecretStore> {
    let list: SecretList = serde_json::from_str(text)?;
    let store = InMemorySecretStore::new();
    let count = list.items.len();

    for item in list.items {
        let mut raw = RawSecret::new();
        for (key, encoded) in &item.data {
            let bytes = STANDARD.decode(encoded).wrap_err_with(|| {
                format!("data key '{key}' of '{}' is not base64", item.metadata.name)
            })?;
            raw = raw.with_binary(key.as_str(), bytes);
        }
        for (key, value) in &item.string_data {
            raw = raw.with_string(key.as_str(), value.as_str());
        }

        store.insert(
            Namespace::new(item.metadata.namespace)?,
            SecretName::new(item.metadata.name)?,
            raw,
        );
    }

    tracing::debug!(secrets = count, "Fixture loaded");
    Ok(store)
}
