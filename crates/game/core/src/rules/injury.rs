//! Injury table.

use arrayvec::ArrayVec;

use super::skills::{collect_modifiers, modifier_total};
use super::{Modifier, Skill, Skills};

/// Outcome of an injury roll.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum InjuryResult {
    Stunned,
    #[strum(serialize = "ko")]
    #[cfg_attr(feature = "serde", serde(rename = "ko"))]
    KnockedOut,
    BadlyHurt,
    Casualty,
}

impl InjuryResult {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stunned => "Stunned",
            Self::KnockedOut => "KO'd",
            Self::BadlyHurt => "Badly Hurt",
            Self::Casualty => "Casualty!",
        }
    }

    /// True when the casualty table must be rolled next.
    pub const fn is_casualty(&self) -> bool {
        matches!(self, Self::Casualty)
    }
}

/// Looks up a modified injury total.
///
/// | total | standard | stunty |
/// |-------|----------|--------|
/// | ≤6    | Stunned  | Stunned |
/// | 7     | Stunned  | KO'd |
/// | 8     | KO'd     | KO'd |
/// | 9     | KO'd     | Badly Hurt |
/// | ≥10   | Casualty | Casualty |
pub fn injury_result(total: u8, stunty: bool) -> InjuryResult {
    match (stunty, total) {
        (false, 0..=7) => InjuryResult::Stunned,
        (false, 8..=9) => InjuryResult::KnockedOut,
        (true, 0..=6) => InjuryResult::Stunned,
        (true, 7..=8) => InjuryResult::KnockedOut,
        (true, 9) => InjuryResult::BadlyHurt,
        (_, _) => InjuryResult::Casualty,
    }
}

/// Resolved injury roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InjuryRoll {
    pub dice: (u8, u8),
    /// Mighty Blow and, when chosen, Piling On.
    pub modifiers: ArrayVec<Modifier, 2>,
    pub total: u8,
    pub stunty: bool,
    pub result: InjuryResult,
}

/// Resolves an injury roll with attacker modifiers.
pub fn resolve_injury(dice: (u8, u8), skills: &Skills, stunty: bool, piling_on: bool) -> InjuryRoll {
    let candidates: &[Skill] = if piling_on {
        &[Skill::MightyBlow, Skill::PilingOn]
    } else {
        &[Skill::MightyBlow]
    };
    let modifiers: ArrayVec<Modifier, 2> = collect_modifiers(skills, candidates);
    let total = dice.0 + dice.1 + modifier_total(&modifiers);

    InjuryRoll {
        dice,
        modifiers,
        total,
        stunty,
        result: injury_result(total, stunty),
    }
}
