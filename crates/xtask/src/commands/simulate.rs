//! Offline block dice simulation
//!
//! Rolls block dice from a seed word without touching saved data, which is
//! handy for checking that a seed replays and that the generator stays fair.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::{DiceEngine, GameConfig, RollStatistics};

/// Roll block dice offline
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Seed word for the dice
    #[arg(short, long, default_value = "thunder")]
    pub seed: String,

    /// Number of block rolls
    #[arg(short = 'n', long, default_value = "10000")]
    pub count: u32,

    /// Block dice per roll (1-3)
    #[arg(short, long, default_value = "1")]
    pub dice: u8,

    /// Print the first rolls as well as the totals
    #[arg(long, default_value = "0")]
    pub show: u32,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let mut engine = DiceEngine::seeded(&self.seed);
        let mut stats = RollStatistics::new();

        println!("{}", style("Block dice simulation").cyan().bold());
        println!(
            "  Seed: {}  Rolls: {}  Dice per roll: {}",
            style(&self.seed).cyan(),
            self.count,
            self.dice
        );
        println!();

        for index in 0..self.count {
            let roll = engine
                .roll_block_dice(self.dice)
                .with_context(|| format!("Cannot roll {} block dice", self.dice))?;
            let faces = roll.faces();
            if index < self.show {
                let labels: Vec<&str> = faces.iter().map(|face| face.label()).collect();
                println!("  #{:<5} {}", index + 1, labels.join(", "));
            }
            for face in faces {
                stats.record_block_face(face);
            }
        }
        if self.show > 0 {
            println!();
        }

        println!(
            "  {:<12} {:>8} {:>10} {:>10}",
            "face", "count", "expected", "actual"
        );
        for report in stats.face_reports(GameConfig::DEFAULT_DEVIATION_THRESHOLD) {
            println!(
                "  {:<12} {:>8} {:>9.1}% {:>9.1}% {}",
                report.face.label(),
                report.count,
                report.theoretical,
                report.actual,
                report.deviation.marker()
            );
        }

        Ok(())
    }
}
