use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. A log file wins; otherwise headless runs log
/// to stderr and interactive runs, which own the terminal, log nowhere.
pub fn init(log_file: Option<&Path>, headless: bool) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|err| anyhow::anyhow!(err))
            .context("failed to install logger")?;
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!(err))
            .context("failed to install logger")?;
    }
    Ok(())
}
