//! Phases of a block or foul action and their legal order.

/// Type of action being resolved.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ActionType {
    Block,
    Foul,
}

/// One step of an action. Variants are declared in resolution order.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    ActionSelect,
    DiceSelect,
    DiceRoll,
    ResultSelect,
    ArmourValue,
    ArmourRoll,
    InjuryRoll,
    CasualtyRoll,
    Apothecary,
    Complete,
}

/// Which way a conditional phase goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// Armour broke / injury is a casualty / any unconditional step.
    Continue,
    /// Armour held / injury is not a casualty.
    Stop,
}

impl Branch {
    pub const fn from_bool(continue_: bool) -> Self {
        if continue_ { Self::Continue } else { Self::Stop }
    }
}

const BLOCK_SEQUENCE: [Phase; 10] = [
    Phase::ActionSelect,
    Phase::DiceSelect,
    Phase::DiceRoll,
    Phase::ResultSelect,
    Phase::ArmourValue,
    Phase::ArmourRoll,
    Phase::InjuryRoll,
    Phase::CasualtyRoll,
    Phase::Apothecary,
    Phase::Complete,
];

const FOUL_SEQUENCE: [Phase; 7] = [
    Phase::ActionSelect,
    Phase::ArmourValue,
    Phase::ArmourRoll,
    Phase::InjuryRoll,
    Phase::CasualtyRoll,
    Phase::Apothecary,
    Phase::Complete,
];

impl ActionType {
    /// Full phase order for this action type.
    pub const fn sequence(&self) -> &'static [Phase] {
        match self {
            Self::Block => &BLOCK_SEQUENCE,
            Self::Foul => &FOUL_SEQUENCE,
        }
    }

    /// First phase after action-select.
    pub const fn entry_phase(&self) -> Phase {
        match self {
            Self::Block => Phase::DiceSelect,
            Self::Foul => Phase::ArmourValue,
        }
    }

    /// True when `phase` appears in this action's sequence.
    pub fn visits(&self, phase: Phase) -> bool {
        self.sequence().contains(&phase)
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Block => "🏈",
            Self::Foul => "⚡",
        }
    }
}

impl Phase {
    /// Phase that follows `self` for `action` along `branch`.
    ///
    /// Returns `None` for [`Phase::Complete`] and for phases the action type
    /// never visits.
    pub fn successor(self, action: ActionType, branch: Branch) -> Option<Phase> {
        if !action.visits(self) {
            return None;
        }
        match (self, branch) {
            (Phase::Complete, _) => None,
            (Phase::ArmourRoll | Phase::InjuryRoll, Branch::Stop) => Some(Phase::Complete),
            (_, _) => {
                let sequence = action.sequence();
                let index = sequence.iter().position(|phase| *phase == self)?;
                sequence.get(index + 1).copied()
            }
        }
    }

    /// True when `from → to` is a legal step for `action`.
    pub fn is_legal_transition(action: ActionType, from: Phase, to: Phase) -> bool {
        [Branch::Continue, Branch::Stop]
            .into_iter()
            .any(|branch| from.successor(action, branch) == Some(to))
    }

    /// Human-readable phase title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ActionSelect => "Select Action",
            Self::DiceSelect => "Select Block Dice",
            Self::DiceRoll => "Roll Block Dice",
            Self::ResultSelect => "Select Result",
            Self::ArmourValue => "Set Armour Value",
            Self::ArmourRoll => "Armour Roll",
            Self::InjuryRoll => "Injury Roll",
            Self::CasualtyRoll => "Casualty Roll",
            Self::Apothecary => "Apothecary",
            Self::Complete => "Action Complete",
        }
    }
}
