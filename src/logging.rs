// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber for the CLI.
//
// Logs go to stderr so `--json` output on stdout stays machine-readable.
// RUST_LOG wins when set; otherwise --verbose picks debug over info.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        "dead_link_sentinel=debug"
    } else {
        "dead_link_sentinel=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
