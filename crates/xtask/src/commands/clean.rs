//! Clean saved statistics and logs command
//!
//! Provides utilities to clean up the assistant's persistent data:
//! - Logs (daily client log files)
//! - Statistics (the `statistics.json` save file)
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use runtime::FileStatisticsRepository;

use crate::dirs;

/// Clean saved statistics and logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Clean only logs
    #[arg(long)]
    pub logs: bool,

    /// Clean only the statistics file
    #[arg(long)]
    pub stats: bool,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

enum Target {
    File(PathBuf),
    Dir(PathBuf),
}

impl Target {
    fn path(&self) -> &PathBuf {
        match self {
            Self::File(path) | Self::Dir(path) => path,
        }
    }

    fn remove(&self) -> io::Result<()> {
        match self {
            Self::File(path) => std::fs::remove_file(path),
            Self::Dir(path) => std::fs::remove_dir_all(path),
        }
    }
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        // If no flags specified, clean both
        let clean_logs = self.logs || !self.stats;
        let clean_stats = self.stats || !self.logs;

        let mut targets = Vec::new();

        if clean_logs {
            let log_dir = dirs::log_dir()?;
            if log_dir.exists() {
                targets.push(("All logs", Target::Dir(log_dir)));
            }
        }

        if clean_stats {
            let file = dirs::data_dir()?.join(FileStatisticsRepository::FILE_NAME);
            if file.exists() {
                targets.push(("Roll statistics", Target::File(file)));
            }
        }

        if targets.is_empty() {
            println!("{}", style("Nothing to clean - no saved data yet").dim());
            return Ok(());
        }

        println!("{}", style("Clean saved data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for (label, target) in &targets {
            println!("  {} {}", style("→").cyan(), style(label).bold());
            println!("    {}", style(target.path().display()).dim());
        }
        println!();

        if !self.yes && !self.confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for (label, target) in targets {
            print!("Deleting {}... ", label);
            io::stdout().flush()?;

            target
                .remove()
                .with_context(|| format!("Failed to delete: {}", target.path().display()))?;

            println!("{}", style("✓").green());
        }

        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }

    /// Prompt user for confirmation
    fn confirm(&self) -> Result<bool> {
        print!("{} ", style("Proceed? [y/N]").yellow().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}
