//! Unified error types surfaced by the runtime API.
//!
//! Wraps session rejections and repository failures so clients can bubble
//! them up with consistent context.

use thiserror::Error;

use game_core::{ErrorSeverity, GameError, SessionError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// True when the player can simply try again with different input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Session(error) => matches!(
                error.severity(),
                ErrorSeverity::Recoverable | ErrorSeverity::Validation
            ),
            Self::Repository(_) => false,
        }
    }
}
