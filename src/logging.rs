//! Tracing setup. The TUI owns stdout, so events are only recorded when a log
//! file is configured; otherwise they are dropped.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. `directives` uses `EnvFilter` syntax, for
/// example `info` or `atr_conect=debug`.
pub fn init_logging(log_file: Option<&Path>, directives: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory).context("failed to create log directory")?;

    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter: {directives}"))?;
    let appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
