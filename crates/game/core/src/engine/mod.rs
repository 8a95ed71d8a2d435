//! Session orchestration.
//!
//! [`GameSession`] is the single entry point the UI drives: it owns the seeded
//! dice, the phase machine for the active action, the running statistics and
//! the action log. Every operation validates against the current phase and its
//! inputs before touching any state, so a returned error means nothing changed.

mod errors;
mod session;

pub use errors::SessionError;
pub use session::GameSession;
