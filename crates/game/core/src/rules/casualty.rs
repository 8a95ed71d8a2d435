//! Casualty and lasting injury tables.

use arrayvec::ArrayVec;

use super::skills::{collect_modifiers, modifier_total};
use super::{Modifier, Skill, Skills};
use crate::config::GameConfig;

/// Outcome of the casualty table, ordered from least to most severe.
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
pub enum CasualtyResult {
    BadlyHurt,
    MissNextGame,
    NigglingInjury,
    LastingInjury,
    Dead,
}

impl CasualtyResult {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BadlyHurt => "Badly Hurt",
            Self::MissNextGame => "Miss Next Game",
            Self::NigglingInjury => "Niggling Injury",
            Self::LastingInjury => "Lasting Injury",
            Self::Dead => "DEAD",
        }
    }
}

/// Looks up a modified casualty total, capped at 16.
///
/// 1–6 Badly Hurt, 7–9 Miss Next Game, 10–12 Niggling Injury,
/// 13–14 Lasting Injury, 15–16 Dead.
pub fn casualty_result(total: u8) -> CasualtyResult {
    match total.min(GameConfig::CASUALTY_SIDES as u8) {
        0..=6 => CasualtyResult::BadlyHurt,
        7..=9 => CasualtyResult::MissNextGame,
        10..=12 => CasualtyResult::NigglingInjury,
        13..=14 => CasualtyResult::LastingInjury,
        _ => CasualtyResult::Dead,
    }
}

/// Resolved casualty roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasualtyRoll {
    /// Raw d16 value.
    pub die: u8,
    /// Mighty Blow and Decay.
    pub modifiers: ArrayVec<Modifier, 2>,
    /// Niggling injuries the player already carries, +1 each.
    pub niggling_injuries: u8,
    /// Modified total, capped at 16.
    pub total: u8,
    pub result: CasualtyResult,
    /// Lasting injury drawn when `result` is [`CasualtyResult::LastingInjury`].
    pub lasting: Option<LastingInjury>,
}

/// Resolves a casualty die with attacker skills and niggling injuries.
pub fn resolve_casualty(die: u8, skills: &Skills, niggling_injuries: u8) -> CasualtyRoll {
    let modifiers: ArrayVec<Modifier, 2> =
        collect_modifiers(skills, &[Skill::MightyBlow, Skill::Decay]);
    let total = die
        .saturating_add(modifier_total(&modifiers))
        .saturating_add(niggling_injuries)
        .min(GameConfig::CASUALTY_SIDES as u8);

    CasualtyRoll {
        die,
        modifiers,
        niggling_injuries,
        total,
        result: casualty_result(total),
        lasting: None,
    }
}

/// Characteristic reduced by a lasting injury.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum Characteristic {
    /// Armour value.
    Av,
    /// Movement allowance.
    Ma,
    /// Passing ability.
    Pa,
    /// Agility.
    Ag,
    /// Strength.
    St,
}

/// Lasting injury table (d6).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum LastingInjury {
    HeadInjury,
    SmashedKnee,
    BrokenArm,
    NeckInjury,
    DislocatedShoulder,
}

impl LastingInjury {
    /// 1–2 Head Injury, 3 Smashed Knee, 4 Broken Arm, 5 Neck Injury,
    /// 6 Dislocated Shoulder.
    pub fn from_d6(value: u8) -> Self {
        match value {
            0..=2 => Self::HeadInjury,
            3 => Self::SmashedKnee,
            4 => Self::BrokenArm,
            5 => Self::NeckInjury,
            _ => Self::DislocatedShoulder,
        }
    }

    pub const fn characteristic(&self) -> Characteristic {
        match self {
            Self::HeadInjury => Characteristic::Av,
            Self::SmashedKnee => Characteristic::Ma,
            Self::BrokenArm => Characteristic::Pa,
            Self::NeckInjury => Characteristic::Ag,
            Self::DislocatedShoulder => Characteristic::St,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::HeadInjury => "Head Injury",
            Self::SmashedKnee => "Smashed Knee",
            Self::BrokenArm => "Broken Arm",
            Self::NeckInjury => "Neck Injury",
            Self::DislocatedShoulder => "Dislocated Shoulder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries() {
        assert_eq!(casualty_result(1), CasualtyResult::BadlyHurt);
        assert_eq!(casualty_result(6), CasualtyResult::BadlyHurt);
        assert_eq!(casualty_result(7), CasualtyResult::MissNextGame);
        assert_eq!(casualty_result(9), CasualtyResult::MissNextGame);
        assert_eq!(casualty_result(10), CasualtyResult::NigglingInjury);
        assert_eq!(casualty_result(12), CasualtyResult::NigglingInjury);
        assert_eq!(casualty_result(13), CasualtyResult::LastingInjury);
        assert_eq!(casualty_result(14), CasualtyResult::LastingInjury);
        assert_eq!(casualty_result(15), CasualtyResult::Dead);
        assert_eq!(casualty_result(16), CasualtyResult::Dead);
    }

    #[test]
    fn niggling_injuries_add_and_cap() {
        let roll = resolve_casualty(12, &Skills::NONE, 2);
        assert_eq!(roll.total, 14);
        assert_eq!(roll.result, CasualtyResult::LastingInjury);

        let capped = resolve_casualty(15, &Skills::NONE, 5);
        assert_eq!(capped.total, 16);
        assert_eq!(capped.result, CasualtyResult::Dead);
    }

    #[test]
    fn mighty_blow_and_decay_each_add_one() {
        let skills = Skills::NONE
            .with_attacker(Skill::MightyBlow)
            .with_attacker(Skill::Decay);
        let roll = resolve_casualty(5, &skills, 0);
        assert_eq!(roll.total, 7);
        assert_eq!(roll.result, CasualtyResult::MissNextGame);
        assert_eq!(roll.modifiers.len(), 2);
    }

    #[test]
    fn severity_ordering() {
        assert!(CasualtyResult::Dead > CasualtyResult::LastingInjury);
        assert!(CasualtyResult::BadlyHurt < CasualtyResult::MissNextGame);
    }

    #[test]
    fn lasting_injury_table() {
        assert_eq!(LastingInjury::from_d6(1), LastingInjury::HeadInjury);
        assert_eq!(LastingInjury::from_d6(2), LastingInjury::HeadInjury);
        assert_eq!(LastingInjury::from_d6(3), LastingInjury::SmashedKnee);
        assert_eq!(LastingInjury::from_d6(4), LastingInjury::BrokenArm);
        assert_eq!(LastingInjury::from_d6(5), LastingInjury::NeckInjury);
        assert_eq!(LastingInjury::from_d6(6), LastingInjury::DislocatedShoulder);
        assert_eq!(LastingInjury::HeadInjury.characteristic(), Characteristic::Av);
        assert_eq!(Characteristic::St.to_string(), "ST");
    }
}
