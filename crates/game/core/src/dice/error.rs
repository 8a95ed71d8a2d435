use crate::error::{ErrorSeverity, GameError};

/// Errors raised while drawing dice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("random generator not initialized: start a session with a seed word first")]
    NotInitialized,

    #[error("invalid block dice count {0}: expected 1, 2 or 3")]
    InvalidDiceCount(u8),
}

impl GameError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInitialized => ErrorSeverity::Fatal,
            Self::InvalidDiceCount(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::InvalidDiceCount(_) => "INVALID_DICE_COUNT",
        }
    }
}
