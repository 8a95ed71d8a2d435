//! Line-oriented driver for the runtime.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use game_core::{Phase, Skills};
use runtime::{Runtime, RuntimeError};

use crate::command::{Command, Pick, help_lines};
use crate::{render, seed};

/// Whether the read loop keeps going.
enum Flow {
    Continue,
    Quit,
}

/// Terminal application: reads commands, forwards them to the runtime and
/// prints new log entries and the next prompt.
pub struct App {
    runtime: Runtime,
    /// Skills carried from one action to the next.
    skills: Skills,
}

impl App {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            skills: Skills::NONE,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("Block & Foul dice assistant").bold().cyan());
        if self.runtime.session().is_seeded() {
            self.print_new_entries(0);
        } else {
            self.print_suggestions();
        }
        println!("{}", style("type 'help' for commands").dim());

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{} > ", render::phase_hint(self.runtime.session()));
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    println!("{}", style(error).yellow());
                    continue;
                }
            };

            let seen = self.runtime.session().log().len();
            match self.handle(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => self.print_new_entries(seen),
                Err(error) => {
                    self.print_new_entries(seen);
                    println!("{}", style(error).red());
                }
            }
        }

        tracing::info!("Client exiting");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> std::result::Result<Flow, RuntimeError> {
        match command {
            Command::Seed(Some(word)) => {
                self.runtime.start_session(&word);
            }
            Command::Seed(None) => self.print_suggestions(),
            Command::Select(action) => {
                self.runtime.select_action(action)?;
                if self.skills != Skills::NONE {
                    self.runtime.set_skills(self.skills)?;
                }
            }
            Command::Dice(count) => {
                self.runtime.select_dice_count(count)?;
            }
            Command::Roll { piling_on } => self.roll(piling_on)?,
            Command::Pick(pick) => self.pick(pick)?,
            Command::ToggleSkill { side, skill } => {
                self.skills.toggle(side, skill);
                if self.runtime.session().record().is_some() {
                    self.runtime.set_skills(self.skills)?;
                } else {
                    println!("  {}", render::skills(&self.skills));
                }
            }
            Command::Niggles(count) => {
                self.runtime.set_niggling_injuries(count)?;
            }
            Command::ArmourValue { value, stunty } => {
                self.runtime.set_armour_value(value, stunty)?;
            }
            Command::Apothecary(use_it) => {
                self.runtime.choose_apothecary(use_it)?;
            }
            Command::Argue => {
                self.runtime.argue_the_call()?;
            }
            Command::Done => {
                self.runtime.complete_action()?;
            }
            Command::Back => {
                self.runtime.go_back();
            }
            Command::Abandon => {
                if self.runtime.abandon_action().is_none() {
                    println!("  no action in progress");
                }
            }
            Command::Stats => {
                let session = self.runtime.session();
                for line in render::statistics(session.statistics(), &session.face_reports()) {
                    println!("{line}");
                }
            }
            Command::ResetStats => self.runtime.reset_statistics(),
            Command::Log(count) => {
                let log = self.runtime.session().log();
                for entry in &log[log.len().saturating_sub(count)..] {
                    println!("{}", render::log_entry(entry));
                }
            }
            Command::Help => {
                for line in help_lines() {
                    println!("  {line}");
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Rolls whatever the current phase calls for.
    fn roll(&mut self, piling_on: bool) -> std::result::Result<(), RuntimeError> {
        match self.runtime.phase() {
            Phase::DiceRoll => {
                let roll = self.runtime.roll_block_dice()?;
                println!("  {}", render::block_faces(&roll.faces()));
            }
            Phase::ArmourRoll => {
                self.runtime.roll_armour(piling_on)?;
            }
            Phase::InjuryRoll => {
                self.runtime.roll_injury(piling_on)?;
            }
            Phase::CasualtyRoll => {
                self.runtime.roll_casualty()?;
            }
            phase => println!("  nothing to roll during {}", phase.title()),
        }
        Ok(())
    }

    fn pick(&mut self, pick: Pick) -> std::result::Result<(), RuntimeError> {
        let face = match pick {
            Pick::Face(face) => face,
            Pick::Index(index) => {
                let faces = self
                    .runtime
                    .session()
                    .record()
                    .and_then(|record| record.block_roll.as_ref())
                    .map(|roll| roll.faces())
                    .unwrap_or_default();
                match index.checked_sub(1).and_then(|i| faces.get(i)) {
                    Some(face) => *face,
                    None => {
                        println!("  pick a die between 1 and {}", faces.len().max(1));
                        return Ok(());
                    }
                }
            }
        };
        self.runtime.select_result(face, self.skills)?;
        Ok(())
    }

    fn print_new_entries(&self, seen: usize) {
        for entry in self.runtime.session().log().iter().skip(seen) {
            println!("{}", render::log_entry(entry));
        }
    }

    fn print_suggestions(&self) {
        println!(
            "  seed ideas: {}",
            style(seed::suggest(3).join(", ")).italic()
        );
    }
}
