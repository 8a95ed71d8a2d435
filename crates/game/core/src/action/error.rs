//! Phase transition errors.

use super::{Operation, Phase};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by the action state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseError {
    /// The operation is not valid for the current phase.
    #[error("cannot {operation} during {phase}")]
    IllegalPhaseTransition { operation: Operation, phase: Phase },
}

impl PhaseError {
    pub const fn illegal(operation: Operation, phase: Phase) -> Self {
        Self::IllegalPhaseTransition { operation, phase }
    }
}

impl GameError for PhaseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "ILLEGAL_PHASE_TRANSITION"
    }
}
