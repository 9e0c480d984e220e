//! Tests for secret resolution
//!
//! Covers the merge of binary and string values, key filtering, the strict
//! missing-key policy, and how store failures are classified.

use super::*;
use async_trait::async_trait;
use kscp_core::{Error, KeyFilter, Namespace, RawSecret, SecretName};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn ns(name: &str) -> Namespace {
    Namespace::new(name).unwrap()
}

fn secret(name: &str) -> SecretName {
    SecretName::new(name).unwrap()
}

fn keys(names: &[&str]) -> KeyFilter {
    names.iter().copied().collect()
}

fn configured(store: Arc<dyn SecretStore>, namespace: &str) -> SecretConfigProvider {
    let mut provider = SecretConfigProvider::new(store);
    let options = serde_json::from_value(json!({ "namespace": namespace })).unwrap();
    provider.configure(&options).unwrap();
    provider
}

/// Store that counts reads and always returns the same secret
struct CountingStore {
    reads: AtomicUsize,
    secret: RawSecret,
}

#[async_trait]
impl SecretStore for CountingStore {
    async fn read(&self, _: &Namespace, _: &SecretName) -> Result<RawSecret, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.secret.clone())
    }
}

#[test]
fn test_merge_string_values_win() {
    let raw = RawSecret::new()
        .with_binary("shared", b"from-data".to_vec())
        .with_binary("only_binary", b"bin".to_vec())
        .with_string("shared", "from-string-data")
        .with_string("only_string", "str");

    let merged = merge_values(&raw, &secret("s"));

    assert_eq!(
        merged,
        HashMap::from([
            ("shared".to_string(), "from-string-data".to_string()),
            ("only_binary".to_string(), "bin".to_string()),
            ("only_string".to_string(), "str".to_string()),
        ])
    );
}

#[test]
fn test_merge_decodes_invalid_utf8_lossily() {
    let raw = RawSecret::new().with_binary("broken", vec![b'o', b'k', 0xff]);
    let merged = merge_values(&raw, &secret("s"));
    assert_eq!(merged["broken"], "ok\u{fffd}");
}

#[test]
fn test_merge_of_empty_secret_is_empty() {
    assert!(merge_values(&RawSecret::new(), &secret("s")).is_empty());
}

#[test]
fn test_filter_keeps_intersection_only() {
    let data = HashMap::from([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ]);
    let filtered = filter_values(&data, &keys(&["a", "missing"]));
    assert_eq!(filtered, HashMap::from([("a".to_string(), "1".to_string())]));
}

#[tokio::test]
async fn test_resolve_before_configure_fails_without_reading() {
    let store = Arc::new(CountingStore {
        reads: AtomicUsize::new(0),
        secret: RawSecret::new().with_string("k", "v"),
    });
    let provider = SecretConfigProvider::new(store.clone());

    let err = provider.resolve("my-secret").await.unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("No namespace specified"));
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_name_fails_before_reading() {
    let store = Arc::new(CountingStore {
        reads: AtomicUsize::new(0),
        secret: RawSecret::new().with_string("k", "v"),
    });
    let provider = configured(store.clone(), "my-ns");

    for name in ["", "   "] {
        assert!(provider.resolve(name).await.unwrap_err().is_invalid_argument());
        assert!(provider
            .resolve_keys(name, &keys(&["k"]))
            .await
            .unwrap_err()
            .is_invalid_argument());
    }
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_each_resolve_reads_once() {
    let store = Arc::new(CountingStore {
        reads: AtomicUsize::new(0),
        secret: RawSecret::new().with_string("k", "v"),
    });
    let provider = configured(store.clone(), "my-ns");

    provider.resolve("my-secret").await.unwrap();
    provider.resolve("my-secret").await.unwrap();
    provider.resolve_keys("my-secret", &keys(&["k"])).await.unwrap();

    assert_eq!(store.reads.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_resolve_merges_binary_and_string_values() {
    let store = InMemorySecretStore::new();
    store.insert(
        ns("my-ns"),
        secret("mixed"),
        RawSecret::new()
            .with_binary("user", b"admin".to_vec())
            .with_binary("password", b"stale".to_vec())
            .with_string("password", "fresh"),
    );
    let provider = configured(Arc::new(store), "my-ns");

    let resolved = provider.resolve("mixed").await.unwrap();

    assert_eq!(resolved.get("user"), Some("admin"));
    assert_eq!(resolved.get("password"), Some("fresh"));
    assert_eq!(resolved.len(), 2);
    assert!(resolved.ttl().is_none());
}

#[tokio::test]
async fn test_partial_key_miss_is_dropped() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("my-ns"), secret("s"), [("a", "1"), ("b", "2")]);
    let provider = configured(Arc::new(store), "my-ns");

    let resolved = provider
        .resolve_keys("s", &keys(&["a", "nope"]))
        .await
        .unwrap();

    assert_eq!(
        resolved.data(),
        &HashMap::from([("a".to_string(), "1".to_string())])
    );
}

#[tokio::test]
async fn test_no_requested_key_found_is_key_not_found() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("my-ns"), secret("s"), [("a", "1")]);
    let provider = configured(Arc::new(store), "my-ns");

    let err = provider
        .resolve_keys("s", &keys(&["x", "y"]))
        .await
        .unwrap_err();

    match &err {
        Error::KeyNotFound { secret, keys } => {
            assert_eq!(secret, "s");
            assert_eq!(keys.len(), 2);
        }
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("[x, y]"));
}

#[tokio::test]
async fn test_empty_key_request_is_key_not_found() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("my-ns"), secret("s"), [("a", "1")]);
    let provider = configured(Arc::new(store), "my-ns");

    let err = provider.resolve_keys("s", &KeyFilter::new()).await.unwrap_err();
    assert!(err.is_key_not_found());
}

#[tokio::test]
async fn test_store_failures_become_resolution_failures() {
    let store = InMemorySecretStore::new();
    store.deny_namespace(ns("locked"));
    let provider = configured(Arc::new(store), "locked");

    let err = provider.resolve("any").await.unwrap_err();

    assert!(err.is_resolution_failure());
    assert_eq!(err.secret(), Some("any"));
    assert!(err.to_string().contains("forbidden"));
    let source = std::error::Error::source(&err).expect("store error is kept as source");
    assert!(source.to_string().starts_with("unauthorized"));
}

#[tokio::test]
async fn test_failed_configure_keeps_previous_namespace() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("first"), secret("s"), [("k", "v")]);
    let mut provider = configured(Arc::new(store), "first");

    let err = provider.configure(&HashMap::new()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(provider.namespace().map(|n| n.as_str()), Some("first"));
    assert_eq!(provider.resolve("s").await.unwrap().get("k"), Some("v"));
}

#[tokio::test]
async fn test_reconfigure_rebinds_namespace() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("first"), secret("s"), [("k", "one")]);
    store.insert_strings(ns("second"), secret("s"), [("k", "two")]);
    let mut provider = configured(Arc::new(store.clone()), "first");

    assert_eq!(provider.resolve("s").await.unwrap().get("k"), Some("one"));

    let options = serde_json::from_value(json!({ "namespace": "second" })).unwrap();
    provider.configure(&options).unwrap();
    assert_eq!(provider.resolve("s").await.unwrap().get("k"), Some("two"));

    let namespaces: Vec<String> = store
        .reads()
        .into_iter()
        .map(|r| r.namespace.to_string())
        .collect();
    assert_eq!(namespaces, vec!["first", "second"]);
}

#[tokio::test]
async fn test_close_is_a_no_op() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("my-ns"), secret("s"), [("k", "v")]);
    let mut provider = configured(Arc::new(store), "my-ns");

    provider.close();
    provider.close();
    assert_eq!(provider.resolve("s").await.unwrap().get("k"), Some("v"));
}

#[tokio::test]
async fn test_trait_object_dispatch() {
    let store = InMemorySecretStore::new();
    store.insert_strings(ns("my-ns"), secret("s"), [("a", "1"), ("b", "2")]);
    let mut provider: Box<dyn ConfigProvider> =
        Box::new(SecretConfigProvider::new(Arc::new(store)));

    let options = serde_json::from_value(json!({ "namespace": "my-ns" })).unwrap();
    provider.configure(&options).unwrap();

    assert_eq!(provider.get("s").await.unwrap().len(), 2);
    assert_eq!(provider.get_keys("s", &keys(&["b"])).await.unwrap().get("b"), Some("2"));
    provider.close();
}
