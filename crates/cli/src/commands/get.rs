use clap::Args;
use kscp_core::KeyFilter;
use kscp_provider::{SecretConfigProvider, SecretStore};
use std::path::PathBuf;
use std::sync::Arc;

use super::ProviderArgs;
use crate::fixture;
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Name of the secret to resolve
    pub secret: String,

    /// Only return these keys (repeatable)
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    #[command(flatten)]
    pub provider: ProviderArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Read secrets from a `kubectl get secrets -o json` dump instead of the cluster
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}

pub async fn execute(args: GetArgs) -> eyre::Result<()> {
    let options = args.provider.load()?;

    let store: Arc<dyn SecretStore> = match &args.fixture {
        Some(path) => Arc::new(fixture::load(path)?),
        None => Arc::new(kscp_provider::KubeSecretStore::try_default().await?),
    };

    let mut provider = SecretConfigProvider::with_options(store, options);

    let resolved = if args.keys.is_empty() {
        provider.resolve(&args.secret).await
    } else {
        let keys: KeyFilter = args.keys.iter().cloned().collect();
        provider.resolve_keys(&args.secret, &keys).await
    };
    provider.close();

    print!("{}", output::render(&resolved?, args.format)?);
    Ok(())
}
