//! Secret-backed configuration provider
//!
//! A [`SecretConfigProvider`] turns a reference to one Kubernetes secret into a
//! flat `key -> value` map for a host configuration framework. The secret
//! store is injected through the [`SecretStore`] trait, so the same provider
//! runs against a live cluster ([`KubeSecretStore`]) or an in-memory fixture
//! ([`InMemorySecretStore`]).

mod memory;
mod provider;
mod store;

#[cfg(feature = "kube")]
mod kubernetes;

#[cfg(test)]
mod tests;

pub use memory::InMemorySecretStore;
pub use provider::{filter_values, merge_values, ConfigProvider, SecretConfigProvider};
pub use store::{SecretStore, StoreError};

#[cfg(feature = "kube")]
pub use kubernetes::KubeSecretStore;
