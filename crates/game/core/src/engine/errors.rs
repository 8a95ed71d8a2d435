//! Error types for session operations.

use crate::action::PhaseError;
use crate::dice::DiceError;
use crate::error::{ErrorSeverity, GameError};
use crate::rules::RuleError;

/// Errors surfaced by [`GameSession`](super::GameSession) operations.
///
/// A rejected operation leaves the session exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Phase(#[from] PhaseError),

    #[error("the apothecary has already been used this game")]
    ApothecaryUnavailable,
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Dice(error) => error.severity(),
            Self::Rule(error) => error.severity(),
            Self::Phase(error) => error.severity(),
            Self::ApothecaryUnavailable => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dice(error) => error.error_code(),
            Self::Rule(error) => error.error_code(),
            Self::Phase(error) => error.error_code(),
            Self::ApothecaryUnavailable => "APOTHECARY_UNAVAILABLE",
        }
    }
}
