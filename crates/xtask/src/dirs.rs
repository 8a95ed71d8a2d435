//! Platform-specific directory utilities
//!
//! Resolves the same locations the client uses, honouring `SAVE_DATA_DIR`
//! and `BLOCKER_LOG_DIR` when they are set.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use runtime::RuntimeConfig;

/// Directory the statistics file lives in.
///
/// Follows platform conventions unless `SAVE_DATA_DIR` is set:
/// - macOS: `~/Library/Application Support/blocker`
/// - Linux: `~/.local/share/blocker` (or `$XDG_DATA_HOME/blocker`)
/// - Windows: `%APPDATA%\blocker`
pub fn data_dir() -> Result<PathBuf> {
    RuntimeConfig::from_env()
        .data_dir()
        .context("Failed to determine data directory")
}

/// Directory the client writes its daily log files to.
pub fn log_dir() -> Result<PathBuf> {
    match std::env::var("BLOCKER_LOG_DIR") {
        Ok(dir) => Ok(PathBuf::from(dir)),
        Err(_) => Ok(data_dir()?.join("logs")),
    }
}

/// Find the most recent client log file (`blocker.log.<date>`).
pub fn find_latest_log(log_dir: &Path) -> Result<PathBuf> {
    let mut logs: Vec<(std::time::SystemTime, PathBuf)> = Vec::new();

    for entry in std::fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("blocker.log"));
        if path.is_file() && is_log {
            logs.push((entry.metadata()?.modified()?, path));
        }
    }

    logs.sort_by(|a, b| b.0.cmp(&a.0));

    logs.into_iter()
        .next()
        .map(|(_, path)| path)
        .ok_or_else(|| anyhow::anyhow!("No log files found in {}", log_dir.display()))
}
