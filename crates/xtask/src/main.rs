//! Development tasks for the block and foul dice assistant
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, ReadStats, Simulate, TailLogs};

/// Development tasks for the dice assistant
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the block and foul dice assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Monitor client logs in real-time
    TailLogs(TailLogs),

    /// Clean saved statistics and logs
    Clean(Clean),

    /// Read and inspect the saved statistics file
    ReadStats(ReadStats),

    /// Roll block dice offline and compare against the fair-die distribution
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
        Command::ReadStats(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
