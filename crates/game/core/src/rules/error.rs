use super::Skill;
use crate::dice::BlockFace;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while applying rule tables and skills.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleError {
    #[error("invalid armour value {0}: expected 1 to 12")]
    InvalidArmourValue(u8),

    #[error("{first} and {second} both modify a {face} result; resolve it manually")]
    ConflictingSkillTransform {
        face: BlockFace,
        first: Skill,
        second: Skill,
    },

    #[error("{0} was not rolled")]
    FaceNotRolled(BlockFace),

    #[error("piling on was already used on the armour roll")]
    PilingOnSpent,
}

impl GameError for RuleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArmourValue(_) | Self::FaceNotRolled(_) => ErrorSeverity::Validation,
            Self::ConflictingSkillTransform { .. } | Self::PilingOnSpent => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArmourValue(_) => "INVALID_ARMOUR_VALUE",
            Self::ConflictingSkillTransform { .. } => "CONFLICTING_SKILL_TRANSFORM",
            Self::FaceNotRolled(_) => "FACE_NOT_ROLLED",
            Self::PilingOnSpent => "PILING_ON_SPENT",
        }
    }
}
