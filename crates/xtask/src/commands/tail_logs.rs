//! Tail client logs command
//!
//! Follows the client's daily log. When no file is named, the command hops to
//! the next day's file as soon as the appender rotates.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dirs;

/// Minimum level a line must carry to be printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Level of a formatted `tracing` line, looked up among its leading fields.
    fn of(line: &str) -> Option<Self> {
        line.split_whitespace().take(3).find_map(|word| match word {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            _ => None,
        })
    }
}

/// Follow the client log in real time
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Log file to follow; defaults to the newest and tracks rotation
    pub file: Option<PathBuf>,

    /// Lines of history to print before following
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Hide lines below this level (continuation lines follow their parent)
    #[arg(short, long, value_enum, default_value = "trace")]
    pub level: Level,

    /// Milliseconds to wait between polls when the file is idle
    #[arg(long, default_value = "200")]
    pub poll_ms: u64,
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let (mut path, log_dir) = match &self.file {
            Some(path) => (path.clone(), None),
            None => {
                let log_dir = dirs::log_dir()?;
                if !log_dir.is_dir() {
                    anyhow::bail!(
                        "No logs at {}; start `blocker` once to create them",
                        log_dir.display()
                    );
                }
                (dirs::find_latest_log(&log_dir)?, Some(log_dir))
            }
        };

        println!(
            "{} {}",
            style("Following").green().bold(),
            style(path.display()).dim()
        );

        let mut printer = LinePrinter::new(self.level);
        let mut reader = open(&path)?;
        for line in history(&mut reader, self.lines)? {
            printer.print(&line);
        }

        let idle = Duration::from_millis(self.poll_ms);
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? > 0 {
                printer.print(line.trim_end_matches(['\r', '\n']));
                continue;
            }

            if let Some(newer) = log_dir.as_deref().and_then(|dir| rotated(dir, &path)) {
                println!(
                    "{} {}",
                    style("Rotated to").yellow().bold(),
                    style(newer.display()).dim()
                );
                reader = open(&newer)?;
                path = newer;
                continue;
            }
            std::thread::sleep(idle);
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Newest log in `dir`, when it is no longer `current`.
fn rotated(dir: &Path, current: &Path) -> Option<PathBuf> {
    dirs::find_latest_log(dir)
        .ok()
        .filter(|latest| latest != current)
}

/// Reads `reader` to its end, keeping only the last `keep` lines.
fn history(reader: &mut impl BufRead, keep: usize) -> Result<VecDeque<String>> {
    let mut kept = VecDeque::with_capacity(keep);
    for line in reader.by_ref().lines() {
        let line = line.context("Log file is not valid UTF-8")?;
        if keep == 0 {
            continue;
        }
        if kept.len() == keep {
            kept.pop_front();
        }
        kept.push_back(line);
    }
    Ok(kept)
}

/// Prints lines at or above a level, coloured by severity.
struct LinePrinter {
    min: Level,
    /// Level of the last line that carried one; multi-line events inherit it.
    current: Option<Level>,
}

impl LinePrinter {
    fn new(min: Level) -> Self {
        Self { min, current: None }
    }

    fn print(&mut self, line: &str) {
        if let Some(level) = Level::of(line) {
            self.current = Some(level);
        }
        if self.current.is_some_and(|level| level < self.min) {
            return;
        }
        match self.current {
            Some(Level::Error) => println!("{}", style(line).red()),
            Some(Level::Warn) => println!("{}", style(line).yellow()),
            Some(Level::Debug | Level::Trace) => println!("{}", style(line).dim()),
            _ => println!("{line}"),
        }
    }
}
