//! In-memory secret store for tests and local runs.

use async_trait::async_trait;
use kscp_core::{Namespace, RawSecret, SecretName, SecretReference};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::store::{SecretStore, StoreError};

#[derive(Default)]
struct Inner {
    secrets: HashMap<(Namespace, SecretName), RawSecret>,
    denied: HashSet<Namespace>,
    reads: Vec<SecretReference>,
}

/// A shared, cloneable map of secrets.
///
/// Clones share state, so a test can keep a handle after giving the store to a
/// provider and inspect which references were read.
#[derive(Clone, Default)]
pub struct InMemorySecretStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemorySecretStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a secret
    pub fn insert(&self, namespace: Namespace, name: SecretName, secret: RawSecret) {
        self.inner.write().secrets.insert((namespace, name), secret);
    }

    /// Store a secret that only has string values
    pub fn insert_strings<I, K, V>(&self, namespace: Namespace, name: SecretName, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let secret = values
            .into_iter()
            .fold(RawSecret::new(), |secret, (k, v)| secret.with_string(k, v));
        self.insert(namespace, name, secret);
    }

    /// Remove a secret, returning whether it existed
    pub fn remove(&self, namespace: &Namespace, name: &SecretName) -> bool {
        self.inner
            .write()
            .secrets
            .remove(&(namespace.clone(), name.clone()))
            .is_some()
    }

    /// Make every read in `namespace` fail as unauthorized
    pub fn deny_namespace(&self, namespace: Namespace) {
        self.inner.write().denied.insert(namespace);
    }

    /// Every reference read so far, in order
    #[must_use]
    pub fn reads(&self) -> Vec<SecretReference> {
        self.inner.read().reads.clone()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn read(
        &self,
        namespace: &Namespace,
        name: &SecretName,
    ) -> Result<RawSecret, StoreError> {
        let mut inner = self.inner.write();
        inner
            .reads
            .push(SecretReference::new(namespace.clone(), name.clone()));

        if inner.denied.contains(namespace) {
            return Err(StoreError::Unauthorized {
                message: format!("reading secrets in namespace \"{namespace}\" is forbidden"),
            });
        }

        inner
            .secrets
            .get(&(namespace.clone(), name.clone()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(namespace, name))
    }
}
