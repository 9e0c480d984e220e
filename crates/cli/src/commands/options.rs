use super::ProviderArgs;
use crate::output;

pub fn execute(provider: &ProviderArgs) -> eyre::Result<()> {
    let options = provider.load()?;
    print!("{}", output::render_options(&options)?);
    Ok(())
}
