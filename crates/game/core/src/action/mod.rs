//! Action sequencing.
//!
//! An action is either a block or a foul. Each walks a fixed phase order:
//!
//! ```text
//! block: action-select → dice-select → dice-roll → result-select → armour-value
//!        → armour-roll → [injury-roll → [casualty-roll → apothecary]] → complete
//! foul:  action-select → armour-value
//!        → armour-roll → [injury-roll → [casualty-roll → apothecary]] → complete
//! ```
//!
//! [`ActionStateMachine`] holds the single active action and rejects any
//! [`Operation`] that does not fit the current [`Phase`].

pub mod error;
pub mod machine;
pub mod operation;
pub mod phase;
pub mod record;

pub use error::PhaseError;
pub use machine::ActionStateMachine;
pub use operation::Operation;
pub use phase::{ActionType, Branch, Phase};
pub use record::{ActionRecord, ApothecaryDecision};
