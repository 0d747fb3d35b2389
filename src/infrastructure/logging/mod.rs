// Logging module - Logging infrastructure
use anyhow::Context;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging system
///
/// `RUST_LOG` wins over `level`. Everything goes to stderr so stdout carries
/// only the key payload.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("ghkeys={level},warn"))
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .context("logging already initialized")?;

    tracing::debug!("ghkeys logging system initialized");
    Ok(())
}

/// Level implied by the command line flags, if any.
pub fn level_override(verbose: bool, quiet: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}
