use kscp_core::KSCP_LOG_VAR;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// `KSCP_LOG` takes an `EnvFilter` directive. Without it the level comes from
/// the `-v` count, defaulting to warnings only. Output goes to stderr so stdout
/// stays clean for resolved values.
pub fn init(verbosity: u8) -> eyre::Result<()> {
    let filter = match EnvFilter::try_from_env(KSCP_LOG_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directive(verbosity)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
