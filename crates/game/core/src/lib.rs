//! Deterministic dice resolution for block and foul actions.
//!
//! `game-core` defines the canonical rules (seeded dice, rule tables, skills,
//! the per-action phase machine and roll statistics) and exposes pure APIs
//! that can be reused by both the runtime and offline tools. All session
//! mutation flows through [`engine::GameSession`], and supporting crates
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod log;
pub mod rng;
pub mod rules;
pub mod statistics;

pub use action::{
    ActionRecord, ActionStateMachine, ActionType, ApothecaryDecision, Branch, Operation, Phase,
    PhaseError,
};
pub use config::GameConfig;
pub use dice::{BlockFace, DiceEngine, DiceError, DieKind, DieRoll};
pub use engine::{GameSession, SessionError};
pub use error::{ErrorSeverity, GameError};
pub use log::{ActionLogEntry, LogIcon, LogPayload};
pub use rng::SeedState;
pub use rules::{
    ArgueTheCall, ArmourResult, CasualtyResult, CasualtyRoll, Characteristic, InjuryResult,
    InjuryRoll, LastingInjury, Modifier, RuleError, Side, Skill, SkillSet, Skills,
};
pub use statistics::{
    BlockPercentages, Counter, Deviation, FaceReport, RollStatistics, SuccessRates, deviation,
};
