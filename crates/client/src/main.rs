//! Block & foul dice assistant binary.
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging
//! 3. Runtime (rules, statistics persistence) via `RuntimeBuilder`
//! 4. The line-oriented terminal frontend
//!
//! # Examples
//!
//! ```bash
//! # Start straight into a session
//! BLOCKER_SEED=thunder cargo run -p blocker-client
//!
//! # Keep statistics in memory only
//! ENABLE_PERSISTENCE=false cargo run -p blocker-client
//! ```

mod app;
mod command;
mod config;
mod logging;
mod render;
mod seed;

use anyhow::{Context, Result};
use runtime::{Runtime, RuntimeConfig};

use crate::app::App;
use crate::config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let client_config = ClientConfig::from_env();

    // 2. Setup logging
    let log_dir = client_config.log_dir(&runtime_config)?;
    let _guard = logging::setup_logging(&log_dir)?;

    tracing::info!("Starting blocker client");
    tracing::info!("Persistence: {}", runtime_config.enable_persistence);

    // 3. Build Runtime
    let runtime = Runtime::builder()
        .config(runtime_config)
        .build()
        .context("building runtime")?;

    // 4. Run the frontend
    App::new(runtime).run()
}
