//! Client-specific configuration.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Terminal client configuration, separate from the runtime's.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BLOCKER_LOG_DIR` - Directory for log files (default: `<data dir>/logs`)
    pub fn from_env() -> Self {
        Self {
            log_dir: env::var("BLOCKER_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    /// Resolved log directory.
    pub fn log_dir(&self, runtime: &RuntimeConfig) -> anyhow::Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(runtime.data_dir()?.join("logs")),
        }
    }
}
