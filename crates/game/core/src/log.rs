//! Append-only action log.
//!
//! Each entry carries the phase it was produced in, a human-readable line, an
//! icon hint for front ends and, for rolls and decisions, a typed payload with
//! only the fields relevant to that kind of event.

use arrayvec::ArrayVec;

use crate::action::{ApothecaryDecision, Phase};
use crate::dice::BlockFace;
use crate::rules::{ArgueTheCall, ArmourResult, CasualtyRoll, InjuryRoll};

/// Icon hint for a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogIcon {
    Session,
    Block,
    Foul,
    Dice,
    Result,
    Skills,
    Armour,
    Injury,
    Casualty,
    Apothecary,
    Referee,
    Complete,
    Back,
    Abandon,
    Statistics,
}

impl LogIcon {
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Session => "🎮",
            Self::Block => "🏈",
            Self::Foul => "⚡",
            Self::Dice => "🎲",
            Self::Result | Self::Complete => "✅",
            Self::Skills => "🎯",
            Self::Armour => "🛡️",
            Self::Injury => "🩹",
            Self::Casualty => "💀",
            Self::Apothecary => "⚕️",
            Self::Referee => "🟥",
            Self::Back => "↩️",
            Self::Abandon => "✖️",
            Self::Statistics => "📊",
        }
    }
}

/// Typed roll or decision attached to a log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LogPayload {
    Block {
        faces: ArrayVec<BlockFace, 3>,
    },
    Result {
        chosen: BlockFace,
        resolved: BlockFace,
    },
    Armour(ArmourResult),
    Injury(InjuryRoll),
    Casualty(CasualtyRoll),
    Apothecary(ApothecaryDecision),
    ArgueTheCall {
        roll: u8,
        call: ArgueTheCall,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLogEntry {
    pub phase: Phase,
    pub description: String,
    pub icon: LogIcon,
    pub payload: Option<LogPayload>,
}

impl ActionLogEntry {
    pub fn new(phase: Phase, icon: LogIcon, description: impl Into<String>) -> Self {
        Self {
            phase,
            description: description.into(),
            icon,
            payload: None,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: LogPayload) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl core::fmt::Display for ActionLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.icon.glyph(), self.description)
    }
}
