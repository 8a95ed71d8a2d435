//! Text command parsing.
//!
//! This module owns the word-to-command mapping so the rest of the
//! application can stay agnostic about concrete spellings and aliases.

use std::str::FromStr;

use game_core::{ActionType, BlockFace, Side, Skill};
use strum::{EnumMessage, IntoEnumIterator};

/// First word of a command line.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumMessage,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Verb {
    #[strum(message = "seed [word]        start a session (suggests words when empty)")]
    Seed,
    #[strum(message = "block              start a block action")]
    Block,
    #[strum(message = "foul               start a foul action")]
    Foul,
    #[strum(message = "dice <1-3>         choose how many block dice to roll")]
    Dice,
    #[strum(
        to_string = "roll",
        serialize = "r",
        message = "roll [pile]        roll for the current phase (pile: use Piling On)"
    )]
    Roll,
    #[strum(message = "pick <n|face>      choose a block die result")]
    Pick,
    #[strum(message = "skill <side> <skill>  toggle a skill (attacker/defender)")]
    Skill,
    #[strum(message = "niggles <n>        target's niggling injuries")]
    Niggles,
    #[strum(message = "av <1-12> [stunty] set the target's armour value")]
    Av,
    #[strum(message = "apo <yes|no>       use the apothecary on this casualty")]
    Apo,
    #[strum(message = "argue              argue the call after a foul is spotted")]
    Argue,
    #[strum(message = "done               complete the action")]
    Done,
    #[strum(message = "back               undo the last step")]
    Back,
    #[strum(message = "abandon            drop the current action")]
    Abandon,
    #[strum(message = "stats              show roll statistics")]
    Stats,
    #[strum(message = "reset-stats        zero all statistics")]
    ResetStats,
    #[strum(message = "log [n]            show the last n log entries")]
    Log,
    #[strum(to_string = "help", serialize = "?", message = "help               this list")]
    Help,
    #[strum(
        to_string = "quit",
        serialize = "q",
        serialize = "exit",
        message = "quit               leave"
    )]
    Quit,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Seed(Option<String>),
    Select(ActionType),
    Dice(u8),
    Roll { piling_on: bool },
    Pick(Pick),
    ToggleSkill { side: Side, skill: Skill },
    Niggles(u8),
    ArmourValue { value: u8, stunty: bool },
    Apothecary(bool),
    Argue,
    Done,
    Back,
    Abandon,
    Stats,
    ResetStats,
    Log(usize),
    Help,
    Quit,
}

/// Block die choice, by position in the roll or by face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    Index(usize),
    Face(BlockFace),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{verb}' needs {what}")]
    MissingArgument { verb: Verb, what: &'static str },

    #[error("'{value}' is not {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let verb =
            Verb::from_str(first).map_err(|_| CommandError::Unknown(first.to_owned()))?;
        let args: Vec<&str> = words.collect();

        let command = match verb {
            Verb::Seed => Command::Seed(args.first().map(|word| (*word).to_owned())),
            Verb::Block => Command::Select(ActionType::Block),
            Verb::Foul => Command::Select(ActionType::Foul),
            Verb::Dice => Command::Dice(number(verb, &args, "a dice count")?),
            Verb::Roll => Command::Roll {
                piling_on: args.iter().any(|arg| is_piling_on(arg)),
            },
            Verb::Pick => {
                let arg = required(verb, &args, "a die number or face")?;
                match arg.parse::<usize>() {
                    Ok(index) => Command::Pick(Pick::Index(index)),
                    Err(_) => Command::Pick(Pick::Face(parse(arg, "a block face")?)),
                }
            }
            Verb::Skill => {
                let side = required(verb, &args, "a side and a skill")?;
                let side = parse(side, "attacker or defender")?;
                let skill = args
                    .get(1..)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| rest.join("-"))
                    .ok_or(CommandError::MissingArgument {
                        verb,
                        what: "a skill",
                    })?;
                Command::ToggleSkill {
                    side,
                    skill: parse(&skill, "a known skill")?,
                }
            }
            Verb::Niggles => Command::Niggles(number(verb, &args, "a count")?),
            Verb::Av => Command::ArmourValue {
                value: number(verb, &args, "an armour value")?,
                stunty: args.iter().skip(1).any(|arg| arg.eq_ignore_ascii_case("stunty")),
            },
            Verb::Apo => Command::Apothecary(yes_no(required(verb, &args, "yes or no")?)?),
            Verb::Argue => Command::Argue,
            Verb::Done => Command::Done,
            Verb::Back => Command::Back,
            Verb::Abandon => Command::Abandon,
            Verb::Stats => Command::Stats,
            Verb::ResetStats => Command::ResetStats,
            Verb::Log => Command::Log(match args.first() {
                Some(arg) => parse(arg, "a number")?,
                None => 10,
            }),
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

/// One line of help per verb.
pub fn help_lines() -> impl Iterator<Item = &'static str> {
    Verb::iter().filter_map(|verb| verb.get_message())
}

fn required<'a>(verb: Verb, args: &[&'a str], what: &'static str) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or(CommandError::MissingArgument { verb, what })
}

fn number<T: FromStr>(verb: Verb, args: &[&str], what: &'static str) -> Result<T, CommandError> {
    parse(required(verb, args, what)?, what)
}

fn parse<T: FromStr>(value: &str, expected: &'static str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        value: value.to_owned(),
        expected,
    })
}

fn yes_no(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(CommandError::InvalidArgument {
            value: value.to_owned(),
            expected: "yes or no",
        }),
    }
}

fn is_piling_on(arg: &str) -> bool {
    matches!(
        arg.to_ascii_lowercase().as_str(),
        "pile" | "piling-on" | "pilingon"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_verbs() {
        assert_eq!("block".parse(), Ok(Command::Select(ActionType::Block)));
        assert_eq!("FOUL".parse(), Ok(Command::Select(ActionType::Foul)));
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("reset-stats".parse(), Ok(Command::ResetStats));
    }

    #[test]
    fn parses_arguments() {
        assert_eq!("dice 2".parse(), Ok(Command::Dice(2)));
        assert_eq!(
            "av 8 stunty".parse(),
            Ok(Command::ArmourValue {
                value: 8,
                stunty: true
            })
        );
        assert_eq!("roll pile".parse(), Ok(Command::Roll { piling_on: true }));
        assert_eq!("r".parse(), Ok(Command::Roll { piling_on: false }));
        assert_eq!("apo y".parse(), Ok(Command::Apothecary(true)));
        assert_eq!("log".parse(), Ok(Command::Log(10)));
    }

    #[test]
    fn pick_accepts_index_or_face() {
        assert_eq!("pick 2".parse(), Ok(Command::Pick(Pick::Index(2))));
        assert_eq!(
            "pick both-down".parse(),
            Ok(Command::Pick(Pick::Face(BlockFace::BothDown)))
        );
    }

    #[test]
    fn skill_names_may_be_split_by_spaces() {
        assert_eq!(
            "skill attacker mighty blow".parse(),
            Ok(Command::ToggleSkill {
                side: Side::Attacker,
                skill: Skill::MightyBlow
            })
        );
        assert_eq!(
            "skill defender thick-skull".parse(),
            Ok(Command::ToggleSkill {
                side: Side::Defender,
                skill: Skill::ThickSkull
            })
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "tackle".parse::<Command>(),
            Err(CommandError::Unknown("tackle".to_owned()))
        );
        assert!(matches!(
            "dice".parse::<Command>(),
            Err(CommandError::MissingArgument { verb: Verb::Dice, .. })
        ));
        assert!(matches!(
            "dice many".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "skill attacker".parse::<Command>(),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn every_verb_has_help() {
        assert_eq!(help_lines().count(), Verb::iter().count());
    }
}
