//! Logging init: tracing to stderr, keeping stdout for the checksum line.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. Filtered via `RUST_LOG`;
/// defaults to `warn` so nothing but the checksum ever reaches stdout and
/// stderr stays quiet unless asked for.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to set global subscriber: {err}"))?;
    Ok(())
}
