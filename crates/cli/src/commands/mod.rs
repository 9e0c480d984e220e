use clap::{Args, Subcommand};
use kscp_config::{ProviderOptions, ProviderOptionsLoader};
use kscp_core::DEFAULT_PROVIDER_ALIAS;
use std::path::PathBuf;

pub mod get;
pub mod options;

use self::get::GetArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a secret (or some of its keys) and print the values
    Get(GetArgs),

    /// Print the provider options that would be used, without contacting the cluster
    Options {
        #[command(flatten)]
        provider: ProviderArgs,
    },
}

/// Where the provider's namespace comes from
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Namespace to read secrets from (overrides --config and KSCP_NAMESPACE)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Properties file with provider options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Provider alias used to select `config.providers.<alias>.param.*` keys
    #[arg(long, default_value = DEFAULT_PROVIDER_ALIAS)]
    pub alias: String,
}

impl ProviderArgs {
    pub fn load(&self) -> kscp_core::Result<ProviderOptions> {
        ProviderOptionsLoader::new()
            .namespace(self.namespace.clone())
            .file(self.config.clone())
            .alias(self.alias.clone())
            .load()
    }
}
