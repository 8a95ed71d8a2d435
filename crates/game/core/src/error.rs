//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`DiceError`, `RuleError`, `PhaseError`) are defined
//! in their respective modules alongside the operations they validate, and
//! aggregated by [`crate::engine::SessionError`].
//!
//! Every error is local and recoverable from the session's point of view: a
//! rejected operation leaves the seed, the active action and the statistics
//! exactly as they were before the call.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request does not fit the current situation; the user picks another.
    ///
    /// Examples: operation not valid in this phase, ambiguous skill interaction
    Recoverable,

    /// Invalid input, should be re-prompted rather than retried.
    ///
    /// Examples: armour value out of range, dice count out of range
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// The operation cannot run until the session is fixed.
    ///
    /// Examples: drawing from an unseeded generator
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the user must re-enter the input.
    pub const fn needs_reprompt(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
