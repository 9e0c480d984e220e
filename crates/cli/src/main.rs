use clap::Parser;

mod commands;
mod execute;
mod fixture;
mod logging;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "kscp")]
#[command(about = "Resolve Kubernetes secrets into configuration values", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). KSCP_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    cli.command.execute().await
}
