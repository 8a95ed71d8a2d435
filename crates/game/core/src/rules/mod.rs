//! Rule tables and skill modifiers.
//!
//! This module provides pure functions that turn raw dice into game outcomes.
//! Nothing here draws dice or touches session state.
//!
//! # Tables
//!
//! - `armour`: 2d6 against the target's armour value
//! - `injury`: 2d6 on the standard or stunty injury table
//! - `casualty`: d16 on the casualty table, then d6 for lasting injuries
//! - `tables`: argue-the-call (fouls only)
//! - `skills`: skill sets, block-face transforms, roll modifiers

pub mod armour;
pub mod casualty;
pub mod error;
pub mod injury;
pub mod skills;
pub mod tables;

pub use armour::{ArmourResult, armour_broken, effective_armour, resolve_armour, validate_armour_value};
pub use casualty::{
    CasualtyResult, CasualtyRoll, Characteristic, LastingInjury, casualty_result, resolve_casualty,
};
pub use error::RuleError;
pub use injury::{InjuryResult, InjuryRoll, injury_result, resolve_injury};
pub use skills::{Modifier, Side, Skill, SkillSet, Skills, resolve_face};
pub use tables::ArgueTheCall;
