//! Accumulated choices and results of the active action.

use super::{ActionType, Phase};
use crate::dice::{BlockFace, DieRoll};
use crate::rules::{ArgueTheCall, ArmourResult, CasualtyResult, CasualtyRoll, InjuryRoll, Skills};

/// Apothecary decision taken after a casualty roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApothecaryDecision {
    pub used: bool,
    /// Second casualty roll when the apothecary was used.
    pub reroll: Option<CasualtyRoll>,
    /// Casualty result that stands.
    pub kept: CasualtyResult,
}

/// Everything chosen and rolled during one action.
///
/// Created at action-select and discarded when the action completes or is
/// abandoned. Fields are only written by the session that owns the action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub action: ActionType,
    pub dice_count: Option<u8>,
    pub block_roll: Option<DieRoll>,
    /// Face picked from the block roll.
    pub chosen_face: Option<BlockFace>,
    /// Face after skill transforms.
    pub resolved_face: Option<BlockFace>,
    pub skills: Skills,
    pub armour_value: Option<u8>,
    pub stunty: bool,
    pub niggling_injuries: u8,
    pub armour: Option<ArmourResult>,
    pub injury: Option<InjuryRoll>,
    pub casualty: Option<CasualtyRoll>,
    pub apothecary: Option<ApothecaryDecision>,
    pub argued: Option<ArgueTheCall>,
}

impl ActionRecord {
    pub fn new(action: ActionType) -> Self {
        Self {
            action,
            dice_count: None,
            block_roll: None,
            chosen_face: None,
            resolved_face: None,
            skills: Skills::NONE,
            armour_value: None,
            stunty: false,
            niggling_injuries: 0,
            armour: None,
            injury: None,
            casualty: None,
            apothecary: None,
            argued: None,
        }
    }

    /// True when Piling On was spent on the armour roll.
    pub fn piling_on_spent(&self) -> bool {
        self.armour
            .as_ref()
            .is_some_and(ArmourResult::used_piling_on)
    }

    /// True when a foul's armour or injury roll came up doubles.
    pub fn rolled_double(&self) -> bool {
        self.action == ActionType::Foul
            && (self.armour.as_ref().is_some_and(|armour| armour.dice.0 == armour.dice.1)
                || self.injury.as_ref().is_some_and(|injury| injury.dice.0 == injury.dice.1))
    }

    /// True when the referee spotted the foul and the call was not overturned.
    pub fn sent_off(&self) -> bool {
        self.rolled_double() && !self.argued.is_some_and(|call| call.avoids_send_off())
    }

    /// Casualty result that stands after the apothecary decision.
    pub fn final_casualty(&self) -> Option<CasualtyResult> {
        self.apothecary
            .as_ref()
            .map(|decision| decision.kept)
            .or_else(|| self.casualty.as_ref().map(|roll| roll.result))
    }

    /// Drops everything produced in `phase` and later.
    pub fn clear_from(&mut self, phase: Phase) {
        if phase <= Phase::DiceSelect {
            self.dice_count = None;
        }
        if phase <= Phase::DiceRoll {
            self.block_roll = None;
        }
        if phase <= Phase::ResultSelect {
            self.chosen_face = None;
            self.resolved_face = None;
        }
        if phase <= Phase::ArmourValue {
            self.armour_value = None;
        }
        if phase <= Phase::ArmourRoll {
            self.armour = None;
        }
        if phase <= Phase::InjuryRoll {
            self.injury = None;
        }
        if phase <= Phase::CasualtyRoll {
            self.casualty = None;
        }
        if phase <= Phase::Apothecary {
            self.apothecary = None;
        }
        if !self.rolled_double() {
            self.argued = None;
        }
    }
}
