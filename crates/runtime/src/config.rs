//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

use crate::repository::{RepositoryError, Result};

/// Configuration required to build a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed word to start the session with; `None` waits for the player.
    pub seed: Option<String>,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            enable_persistence: true,
            save_data_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BLOCKER_SEED` - Seed word; the session starts immediately when set
    /// - `ENABLE_PERSISTENCE` - Save statistics to disk (default: true)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = env::var("BLOCKER_SEED")
            .ok()
            .map(|seed| seed.trim().to_owned())
            .filter(|seed| !seed.is_empty());

        if let Some(enable) = read_env::<bool>("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        } else if env::var("ENABLE_PERSISTENCE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.enable_persistence = true;
        }

        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);

        config
    }

    /// Directory statistics are saved in: `SAVE_DATA_DIR` or the platform
    /// data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.save_data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

/// Platform data directory for the application.
pub fn default_data_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "blocker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(RepositoryError::NoDataDir)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
