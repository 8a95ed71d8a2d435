//! Read and inspect the saved statistics file
//!
//! Deserializes `statistics.json` and prints the block-face distribution
//! against a fair die, or dumps the raw counters.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use game_core::{Counter, Deviation, GameConfig, RollStatistics};
use runtime::FileStatisticsRepository;

use crate::dirs;

/// Read and inspect the saved statistics file
#[derive(Parser)]
pub struct ReadStats {
    /// Custom data directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Percentage points a face may drift before it is flagged
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_DEVIATION_THRESHOLD)]
    threshold: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Block table, outcome rates and most common rolls
    Summary,
    /// Every counter, one per line
    Counters,
    /// Full JSON output
    Json,
}

impl ReadStats {
    pub fn execute(self) -> Result<()> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()?,
        };

        let file = data_dir.join(FileStatisticsRepository::FILE_NAME);
        if !file.exists() {
            anyhow::bail!(
                "Statistics file not found: {}\n\nHint: Run the client and roll some dice first",
                file.display()
            );
        }

        let bytes = std::fs::read(&file)
            .with_context(|| format!("Failed to read statistics file: {}", file.display()))?;
        let stats: RollStatistics = serde_json::from_slice(&bytes).with_context(|| {
            format!("Failed to deserialize statistics file: {}", file.display())
        })?;

        match self.format {
            OutputFormat::Summary => print_summary(&stats, self.threshold, &file),
            OutputFormat::Counters => print_counters(&stats),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&stats)
                    .context("Failed to serialize statistics to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(stats: &RollStatistics, threshold: f64, file: &std::path::Path) {
    println!("{}", style("Roll Statistics").cyan().bold());
    println!("  File: {}", style(file.display()).dim());
    println!();

    println!("{}", style("Block dice").yellow().bold());
    println!(
        "  {:<12} {:>8} {:>10} {:>10}",
        "face", "count", "expected", "actual"
    );
    for report in stats.face_reports(threshold) {
        let marker = match report.deviation {
            Deviation::High => style(report.deviation.marker()).green().to_string(),
            Deviation::Low => style(report.deviation.marker()).red().to_string(),
            Deviation::Normal => String::new(),
        };
        println!(
            "  {:<12} {:>8} {:>9.1}% {:>9.1}% {}",
            report.face.label(),
            report.count,
            report.theoretical,
            report.actual,
            marker
        );
    }
    println!("  {:<12} {:>8}", "total", stats.block_total());
    println!();

    let rates = stats.rates();
    println!("{}", style("Outcomes").yellow().bold());
    println!(
        "  Actions:   {} started, {} completed ({:.1}%)",
        stats.count(Counter::ActionsStarted),
        stats.count(Counter::ActionsCompleted),
        rates.completion
    );
    println!(
        "  Armour:    {} broken, {} held ({:.1}% break rate)",
        stats.count(Counter::ArmourBroken),
        stats.count(Counter::ArmourHeld),
        rates.armour_break
    );
    println!(
        "  Injury:    {:.1}% of actions, casualty {:.1}%",
        rates.injury, rates.casualty
    );
    println!();

    println!("{}", style("Dice").yellow().bold());
    println!("  Most common d6:   {}", stats.most_common_d6());
    println!("  Most common 2d6:  {}", stats.most_common_two_d6());
    println!("  Total rolls:      {}", stats.total_rolls());
}

fn print_counters(stats: &RollStatistics) {
    for (counter, count) in stats.counters() {
        let name = counter.as_ref();
        if count == 0 {
            println!("  {:<28} {}", style(name).dim(), style(count).dim());
        } else {
            println!("  {:<28} {}", name, count);
        }
    }
}
