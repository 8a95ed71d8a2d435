//! Inbound operations and the phase each one is valid in.

use super::Phase;

/// A request made by the UI collaborator.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    StartSession,
    SelectAction,
    SelectDiceCount,
    RollBlockDice,
    SelectResult,
    SetSkills,
    SetNigglingInjuries,
    SetArmourValue,
    RollArmour,
    RollInjury,
    RollCasualty,
    ChooseApothecary,
    ArgueTheCall,
    CompleteAction,
    AbandonAction,
    GoBack,
    ResetStatistics,
}

impl Operation {
    /// The single phase this operation is accepted in, if it is tied to one.
    pub const fn required_phase(&self) -> Option<Phase> {
        match self {
            Self::SelectAction => Some(Phase::ActionSelect),
            Self::SelectDiceCount => Some(Phase::DiceSelect),
            Self::RollBlockDice => Some(Phase::DiceRoll),
            Self::SelectResult => Some(Phase::ResultSelect),
            Self::SetArmourValue => Some(Phase::ArmourValue),
            Self::RollArmour => Some(Phase::ArmourRoll),
            Self::RollInjury => Some(Phase::InjuryRoll),
            Self::RollCasualty => Some(Phase::CasualtyRoll),
            Self::ChooseApothecary => Some(Phase::Apothecary),
            Self::CompleteAction => Some(Phase::Complete),
            Self::StartSession
            | Self::SetSkills
            | Self::SetNigglingInjuries
            | Self::ArgueTheCall
            | Self::AbandonAction
            | Self::GoBack
            | Self::ResetStatistics => None,
        }
    }
}
