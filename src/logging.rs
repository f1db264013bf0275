use crate::config::LogConfig;
use anyhow::Context;
use std::sync::Mutex;

/// Send `tracing` events to the log file named in `config`.  The terminal
/// belongs to the game, so if no file is configured, nothing is logged.
pub(crate) fn init(config: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = config.file.as_deref() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log file directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install logger")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        "logging started"
    );
    Ok(())
}
