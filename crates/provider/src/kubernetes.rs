//! Secret store backed by the Kubernetes API

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kscp_core::{Namespace, RawSecret, SecretName};
use kube::{Api, Client};

use crate::store::{SecretStore, StoreError};

/// Reads `v1/Secret` objects with a `kube` client.
///
/// Connection details (kubeconfig, in-cluster service account, TLS, timeouts)
/// all come from the client.
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient kubeconfig or in-cluster environment
    pub async fn try_default() -> Result<Self, StoreError> {
        let client = Client::try_default().await.map_err(transport)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn read(
        &self,
        namespace: &Namespace,
        name: &SecretName,
    ) -> Result<RawSecret, StoreError> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace.as_str());
        let secret = secrets
            .get(name.as_str())
            .await
            .map_err(|e| classify(e, namespace, name))?;
        Ok(into_raw(secret))
    }
}

fn into_raw(secret: Secret) -> RawSecret {
    let mut raw = RawSecret::new();
    raw.binary_values = secret.data.map(|data| {
        data.into_iter()
            .map(|(key, ByteString(bytes))| (key, bytes))
            .collect()
    });
    raw.string_values = secret.string_data;
    raw
}

fn classify(error: kube::Error, namespace: &Namespace, name: &SecretName) -> StoreError {
    match error {
        kube::Error::Api(response) => match response.code {
            404 => StoreError::not_found(namespace, name),
            401 | 403 => StoreError::Unauthorized {
                message: response.message,
            },
            code => StoreError::Api {
                code,
                message: response.message,
            },
        },
        other => transport(other),
    }
}

fn transport(error: kube::Error) -> StoreError {
    StoreError::Transport {
        message: error.to_string(),
        source: Box::new(error),
    }
}
