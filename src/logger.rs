//! File logging setup.
//!
//! When `[logging].enabled` is set, every `log` macro call in the app is
//! written to a file under the user cache directory. Logging to stdout or
//! stderr would corrupt the alternate-screen UI, so the file is the only
//! sink.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Path of the log file: `<cache_dir>/taskpad/taskpad.log`.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .context("could not determine cache directory")
        .map(|dir| dir.join("taskpad").join("taskpad.log"))
}

/// Install the global logger.
///
/// With `enabled == false` this is a no-op and all `log` macros stay silent.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let log_path = log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log_path).with_context(|| {
            format!("failed to open log file: {}", log_path.display())
        })?)
        .apply()
        .context("failed to install logger")?;

    Ok(())
}
