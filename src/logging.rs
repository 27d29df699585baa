//! Diagnostics setup. The UI takes over the terminal with raw mode and the
//! alternate screen, so log lines cannot go to stdout or stderr without
//! corrupting the display. Instead a `tracing` subscriber appends plain text
//! (no ANSI colors) to the log file next to the data file. Store loads and
//! saves, accepted and rejected actions, and fatal errors all end up there.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive. Fixed, since the tracker reads no environment.
const LOG_FILTER: &str = "info";

/// Route `tracing` output to an append-only log file. Writing to stderr would
/// tear the alternate screen while the UI is running.
pub fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
