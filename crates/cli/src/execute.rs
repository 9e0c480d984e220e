use crate::commands::Commands;

impl Commands {
    pub async fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Get(args) => crate::commands::get::execute(args).await,
            Commands::Options { provider } => crate::commands::options::execute(&provider),
        }
    }
}
